//! Query/filter engine
//!
//! Pure functions over borrowed record slices; no I/O, no mutation. Filtering
//! is a stable linear scan, so results always preserve dataset order.

use std::collections::{BTreeSet, HashMap};

/// A record type whose filterable/searchable fields are addressable through a
/// closed field enum.
pub trait Queryable {
    type Field: Copy;

    /// Text of the given field, `None` when the record does not carry it.
    fn field_text(&self, field: Self::Field) -> Option<&str>;
}

/// A record with a lookup identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Filter `items` by exact-match criteria and an optional free-text query.
///
/// Exact filters with an absent or empty expected value impose no constraint.
/// A record passes a remaining filter iff the field is present and equal to
/// the expected value case-insensitively. A non-empty `search_query` must
/// appear as a substring of the lowercased concatenation of the listed
/// `search_fields` (missing fields contribute an empty string).
pub fn apply_filters<'a, T: Queryable>(
    items: &'a [T],
    exact_filters: &[(T::Field, Option<&str>)],
    search_query: Option<&str>,
    search_fields: &[T::Field],
) -> Vec<&'a T> {
    let active: Vec<(T::Field, String)> = exact_filters
        .iter()
        .filter_map(|&(field, expected)| match expected {
            Some(value) if !value.is_empty() => Some((field, value.to_lowercase())),
            _ => None,
        })
        .collect();
    let needle = search_query
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    items
        .iter()
        .filter(|item| matches(*item, &active, needle.as_deref(), search_fields))
        .collect()
}

fn matches<T: Queryable>(
    item: &T,
    active: &[(T::Field, String)],
    needle: Option<&str>,
    search_fields: &[T::Field],
) -> bool {
    for (field, expected) in active {
        match item.field_text(*field) {
            Some(value) if value.to_lowercase() == *expected => {}
            _ => return false,
        }
    }

    if let Some(needle) = needle {
        let haystack = search_fields
            .iter()
            .map(|field| item.field_text(*field).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if !haystack.contains(needle) {
            return false;
        }
    }

    true
}

/// Parse a raw `limit` query parameter; unparsable input means "no limit".
pub fn parse_limit(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.parse().ok())
}

/// Cap a result list. `Some(n)` keeps the first `max(n, 0)` elements, so an
/// explicit limit of zero returns nothing; only `None` means unlimited.
pub fn truncate<T>(mut items: Vec<T>, limit: Option<i64>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit.max(0) as usize);
    }
    items
}

/// First record carrying `id`. Duplicate ids are tolerated; the first match
/// wins.
pub fn find_by_id<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// Count occurrences of each non-empty value.
pub fn tally<'a, I>(values: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts = HashMap::new();
    for value in values.into_iter().flatten() {
        if value.is_empty() {
            continue;
        }
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Deduplicated non-empty values in ascending order.
pub fn sorted_distinct<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
