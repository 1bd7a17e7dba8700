//! HTTP surface for Corridor Adventure.

pub mod assets;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Builds the application router without the outer tower layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/runs", routes::runs::router())
        .with_state(state)
}
