//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes for the Zakah and Fara'id calculators
//! - JSON error responses built from `AppError`
//! - Request tracing and CORS layers

pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::response::Response;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use ishrakaat_core::faraid::DistributionEngine;
use ishrakaat_core::zakah::NisabWeights;
use ishrakaat_shared::{AppConfig, AppError};

/// Application state shared across handlers. Immutable once built.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wraps a loaded configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Distribution engine at the configured precision.
    #[must_use]
    pub fn engine(&self) -> DistributionEngine {
        DistributionEngine::new(self.config.calculator.decimal_places)
    }

    /// Nisab weights from configuration.
    #[must_use]
    pub fn nisab_weights(&self) -> NisabWeights {
        NisabWeights::from(&self.config.nisab)
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn not_found() -> Response {
    routes::error_response(&AppError::NotFound("no such route".to_string()))
}
