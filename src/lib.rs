//! Backend for the NRTR community resources site
//!
//! Serves two read-only datasets (community resources and
//! scholarship/opportunity listings) over a small JSON API, with filtered
//! list queries, id lookups, aggregate counts, and a demo login endpoint.
//! Both datasets are loaded from static JSON files once at startup and are
//! never mutated afterwards.

pub mod auth;
pub mod config;
pub mod error;
pub mod query;
pub mod server;
pub mod store;
pub mod types;
pub mod web;

// Re-export main types
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::ApiServer;
pub use store::{AppState, Datasets};
