//! Test helper utilities for integration tests

use std::sync::Arc;

use nrtr_server::types::{Opportunity, Resource};
use nrtr_server::{AppState, Datasets, ServerConfig};

/// Build an injected server state around fixture datasets.
pub fn state_with(resources: Vec<Resource>, opportunities: Vec<Opportunity>) -> Arc<AppState> {
    Arc::new(AppState {
        config: ServerConfig::default(),
        datasets: Datasets {
            resources,
            opportunities,
        },
    })
}
