//! Kolam web service
//!
//! Three surfaces over [`kolam_core`]:
//!
//! - `POST /analyze`: multipart upload (`image` field), saved to disk, answered
//!   with the template selected for its filename
//! - `POST /export-svg`: `{paths, grid_dots}` JSON in, `{success, svg}` out
//! - everything else: files from the static directory, `index.html` at `/`

pub mod error;
pub mod routes;
pub mod state;
pub mod upload;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Create the main router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(routes::analyze::router())
        .merge(routes::export::router())
        .merge(routes::health::router())
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the web server and run until Ctrl-C
pub async fn serve(state: Arc<AppState>) -> std::io::Result<()> {
    tokio::fs::create_dir_all(&state.config.upload_dir).await?;

    let bind = state.config.bind.clone();
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(
        bind = %bind,
        static_dir = %state.config.static_dir.display(),
        upload_dir = %state.config.upload_dir.display(),
        patterns = state.catalog.len(),
        "kolam-web listening"
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
