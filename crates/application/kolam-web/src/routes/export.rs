use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};

use kolam_core::SvgRequest;

use crate::{ApiError, AppState};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/export-svg", post(export_svg))
}

/// Body is read raw so malformed JSON still gets the error envelope.
async fn export_svg(body: Result<Bytes, BytesRejection>) -> Result<Json<Value>, ApiError> {
    let request = SvgRequest::from_slice(&body?)?;
    let svg = request.render();
    tracing::debug!(
        dots = request.grid_dots.len(),
        paths = request.paths.len(),
        "exported svg"
    );
    Ok(Json(json!({ "success": true, "svg": svg })))
}
