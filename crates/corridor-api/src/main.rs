//! Corridor Adventure API server entry point.

use std::sync::Arc;

use corridor_adventure::domain::cue::CueTimings;
use corridor_api::assets::FsAssetCatalog;
use corridor_api::config::AppConfig;
use corridor_api::error::AppError;
use corridor_api::state::AppState;
use corridor_core::clock::SystemClock;
use corridor_event_store::memory_event_repository::InMemoryEventRepository;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Corridor Adventure API server");

    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;

    if !config.asset_dir.is_dir() {
        tracing::warn!(
            asset_dir = %config.asset_dir.display(),
            "asset directory not found; scenes will have no media"
        );
    }

    // Build application state.
    let app_state = AppState::new(
        Arc::new(SystemClock),
        CueTimings::scaled(config.cue_time_scale),
        Arc::new(InMemoryEventRepository::new()),
        Arc::new(FsAssetCatalog::new(&config.asset_dir)),
    );

    // TODO: Replace CorsLayer::permissive() with restricted origins once the client origin is fixed.
    let app = corridor_api::build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!(%addr, cue_time_scale = config.cue_time_scale, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
