//! HTTP layer with Axum routes and session extractors.
//!
//! This crate provides:
//! - The typed procedure routes under `/api/rpc`
//! - Session endpoints backing the client auth context
//! - Request extractors and error responses
//! - The HTML page shell served at `/`

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;

use axum::Router;
use condos_shared::config::AuthConfig;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Session cookie settings.
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    /// Builds the state from a connection and session settings.
    #[must_use]
    pub fn new(db: DatabaseConnection, auth: AuthConfig) -> Self {
        Self {
            db: Arc::new(db),
            auth: Arc::new(auth),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::shell::routes())
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
