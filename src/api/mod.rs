//! HTTP API for the transformation lifecycle
//!
//! Routes:
//! - `POST   /transformations`              create
//! - `GET    /transformations`              list
//! - `PATCH  /transformations/:id`          run (`{"state": "RUNNING"}`)
//! - `DELETE /transformations/:id`          delete
//! - `GET    /transformations/:id/state`    read state
//! - `GET    /datasets/:id`                 read result

pub mod error;
pub mod handlers;
pub mod models;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::registry::TransformationRegistry;

pub use error::AppError;

/// Shared application state injected into every handler
#[derive(Clone, Default)]
pub struct AppState {
    pub registry: TransformationRegistry,
}

impl AppState {
    pub fn new(registry: TransformationRegistry) -> Self {
        Self { registry }
    }
}

/// Build the application router around the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/transformations",
            post(handlers::new_transformation).get(handlers::get_transformations),
        )
        .route(
            "/transformations/:transformation_id",
            patch(handlers::update_transformation_state).delete(handlers::delete_transformation),
        )
        .route(
            "/transformations/:transformation_id/state",
            get(handlers::get_transformation_state),
        )
        .route("/datasets/:transformation_id", get(handlers::get_results))
        // Utility endpoints
        .route("/heartbeat", get(handlers::heartbeat))
        .route("/health", get(handlers::health_check))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
