//! Record types and request/response bodies
//!
//! Both datasets get a typed struct: the fields the API filters and searches
//! on are explicit optional strings, validated when the JSON files are
//! deserialized at startup. Anything else in a record rides along in a
//! flattened map so responses reproduce stored records unchanged.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::query::{Identified, Queryable};

/// One community resource listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One scholarship/opportunity listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields of a [`Resource`] that filtering and search may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceField {
    Name,
    Description,
    County,
    Type,
}

/// Fields of an [`Opportunity`] that filtering and search may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpportunityField {
    Title,
    Description,
    County,
    Category,
}

impl Resource {
    /// Fields participating in free-text search, in haystack order.
    pub const SEARCH_FIELDS: &'static [ResourceField] = &[
        ResourceField::Name,
        ResourceField::Description,
        ResourceField::County,
        ResourceField::Type,
    ];
}

impl Opportunity {
    /// Fields participating in free-text search, in haystack order.
    pub const SEARCH_FIELDS: &'static [OpportunityField] = &[
        OpportunityField::Title,
        OpportunityField::Description,
        OpportunityField::County,
        OpportunityField::Category,
    ];
}

impl Queryable for Resource {
    type Field = ResourceField;

    fn field_text(&self, field: ResourceField) -> Option<&str> {
        match field {
            ResourceField::Name => self.name.as_deref(),
            ResourceField::Description => self.description.as_deref(),
            ResourceField::County => self.county.as_deref(),
            ResourceField::Type => self.resource_type.as_deref(),
        }
    }
}

impl Queryable for Opportunity {
    type Field = OpportunityField;

    fn field_text(&self, field: OpportunityField) -> Option<&str> {
        match field {
            OpportunityField::Title => self.title.as_deref(),
            OpportunityField::Description => self.description.as_deref(),
            OpportunityField::County => self.county.as_deref(),
            OpportunityField::Category => self.category.as_deref(),
        }
    }
}

impl Identified for Resource {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Opportunity {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Query parameters accepted by `GET /api/resources`.
///
/// `limit` stays a raw string: an unparsable value means "no limit" rather
/// than a client error.
#[derive(Debug, Default, Deserialize)]
pub struct ResourceListParams {
    pub county: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub q: Option<String>,
    pub limit: Option<String>,
}

/// Query parameters accepted by `GET /api/opportunities`.
#[derive(Debug, Default, Deserialize)]
pub struct OpportunityListParams {
    pub county: Option<String>,
    pub category: Option<String>,
    pub q: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub count: usize,
    pub results: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub resources: usize,
    pub opportunities: usize,
}

#[derive(Debug, Serialize)]
pub struct CountiesResponse {
    pub counties: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub resources_by_county: HashMap<String, usize>,
    pub resources_by_type: HashMap<String, usize>,
    pub opportunities_by_county: HashMap<String, usize>,
    pub opportunities_by_category: HashMap<String, usize>,
}

/// Login body; missing fields fail verification instead of rejecting the
/// request.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
}
