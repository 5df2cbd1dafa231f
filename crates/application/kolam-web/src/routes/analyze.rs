use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};

use kolam_core::AnalysisResult;

use crate::upload;
use crate::{ApiError, AppState};

/// Multipart field carrying the image
const IMAGE_FIELD: &str = "image";

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", post(analyze))
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, ApiError> {
    let mut multipart = multipart?;

    let mut image = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        // A plain form value named `image` is not a file.
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        image = Some((file_name, field.bytes().await?));
        break;
    }

    let (raw_name, bytes) = image.ok_or(ApiError::MissingImage)?;
    let name = upload::sanitize_filename(&raw_name).ok_or(ApiError::EmptyFilename)?;

    let stored = upload::save(&state.config.upload_dir, &name, &bytes).await?;
    let pattern = state.catalog.select(&name);
    tracing::info!(
        file = %name,
        stored = %stored.display(),
        bytes = bytes.len(),
        pattern = %pattern.id,
        "analyzed upload"
    );

    let result = AnalysisResult::stamp(pattern, name);
    Ok(Json(json!({ "success": true, "data": result })))
}
