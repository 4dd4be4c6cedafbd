//! Dataset store
//!
//! Loads both datasets from JSON files exactly once at startup. A missing or
//! malformed file is fatal; after bootstrap the data is read-only and shared
//! freely across requests.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::query::Identified;
use crate::types::{Opportunity, Resource};

pub const RESOURCES_FILE: &str = "resources.json";
pub const OPPORTUNITIES_FILE: &str = "scholarships.json";

/// Read one dataset file: a JSON array of record objects.
pub fn load_dataset<T: DeserializeOwned>(path: &Path) -> ServerResult<Vec<T>> {
    if !path.exists() {
        return Err(ServerError::DataFileMissing {
            path: path.to_path_buf(),
        });
    }

    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| ServerError::DataFileInvalid {
        path: path.to_path_buf(),
        source,
    })
}

/// Both datasets, in file order, immutable after [`Datasets::bootstrap`].
#[derive(Debug, Clone)]
pub struct Datasets {
    pub resources: Vec<Resource>,
    pub opportunities: Vec<Opportunity>,
}

impl Datasets {
    pub fn bootstrap(data_dir: &Path) -> ServerResult<Self> {
        let resources: Vec<Resource> = load_dataset(&data_dir.join(RESOURCES_FILE))?;
        let opportunities: Vec<Opportunity> = load_dataset(&data_dir.join(OPPORTUNITIES_FILE))?;

        report_duplicate_ids("resources", &resources);
        report_duplicate_ids("opportunities", &opportunities);

        info!(
            resources = resources.len(),
            opportunities = opportunities.len(),
            "Datasets loaded"
        );

        Ok(Self {
            resources,
            opportunities,
        })
    }
}

// Duplicates only warn; lookups stay first-match-wins.
fn report_duplicate_ids<T: Identified>(dataset: &str, items: &[T]) {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            warn!(dataset, id = item.id(), "Duplicate record id, lookups return the first match");
        }
    }
}

/// Read-only context handed to every request handler.
#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
    pub datasets: Datasets,
}
