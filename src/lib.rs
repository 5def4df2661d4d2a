//! Rental property listing backend.
//!
//! Serves filtered, sorted and paginated property listings from either a
//! bundled fixture or a remote Medusa store.

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod listing;
pub mod models;
pub mod provider;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use provider::PropertyProvider;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn PropertyProvider>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/properties", get(api::list_properties))
        .route("/properties/{id}", get(api::get_property))
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
