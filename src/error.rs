//! Server-specific error types

use std::path::PathBuf;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Missing data file: {}", path.display())]
    DataFileMissing { path: PathBuf },

    #[error("Malformed data file: {}", path.display())]
    DataFileInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Resource not found")]
    ResourceNotFound { id: String },

    #[error("Opportunity not found")]
    OpportunityNotFound { id: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::ResourceNotFound { .. } | Self::OpportunityNotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "message": "Invalid credentials" })),
            )
                .into_response(),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response(),
        }
    }
}
