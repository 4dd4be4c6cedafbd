//! HTTP server assembly
//!
//! Builds the Axum router over the injected read-only state, binds, and
//! serves until Ctrl+C or SIGTERM.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::error::{ServerError, ServerResult};
use crate::store::AppState;
use crate::web::handlers::api;

pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/api/health", get(api::health))
            .route("/api/resources", get(api::list_resources))
            .route("/api/resources/:id", get(api::get_resource))
            .route("/api/opportunities", get(api::list_opportunities))
            .route("/api/opportunities/:id", get(api::get_opportunity))
            .route("/api/meta/counties", get(api::list_counties))
            .route("/api/meta/stats", get(api::stats))
            .route("/api/login", post(api::login))
            .layer(ServiceBuilder::new().layer(CorsLayer::permissive()).into_inner())
            .with_state(self.state.clone())
    }

    /// Bind and serve until a shutdown signal arrives.
    pub async fn run(&self) -> ServerResult<()> {
        let router = self.build_router();
        let address = self.state.config.bind_address();

        let listener = TcpListener::bind(address)
            .await
            .map_err(|e| ServerError::ServerStartup(format!("Failed to bind to {address}: {e}")))?;

        info!("Server listening on http://{address}");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
