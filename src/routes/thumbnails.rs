//! Thumbnail API endpoints
//!
//! - `POST /` renders one page, optionally with a minimum side
//! - `POST /all` renders every page in order

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use super::extract::ApiJson;
use crate::error::ThumbnailError;
use crate::state::AppState;
use crate::thumbnail::ThumbnailResult;

/// Request body for a single page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Path or `file://` URI of the PDF
    pub locator: String,
    /// Zero-based page index
    pub page: i64,
    /// Minimum shorter side in pixels; non-positive values are ignored
    pub min_side: Option<i64>,
}

/// Request body for all pages
#[derive(Debug, Deserialize)]
pub struct GenerateAllRequest {
    pub locator: String,
}

/// Create the thumbnail router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(generate))
        .route("/all", post(generate_all_pages))
}

async fn generate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateRequest>,
) -> Result<Json<ThumbnailResult>, ThumbnailError> {
    tracing::debug!(
        "Thumbnail request: page {} of '{}' (min side {:?})",
        request.page,
        request.locator,
        request.min_side
    );

    let result = state
        .thumbnails()
        .run_blocking(move |service| match request.min_side {
            Some(min_side) => {
                service.generate_with_min_side(&request.locator, request.page, min_side)
            }
            None => service.generate(&request.locator, request.page),
        })
        .await?;

    Ok(Json(result))
}

async fn generate_all_pages(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateAllRequest>,
) -> Result<Json<Vec<ThumbnailResult>>, ThumbnailError> {
    tracing::debug!("Thumbnail request: all pages of '{}'", request.locator);

    let results = state
        .thumbnails()
        .run_blocking(move |service| service.generate_all_pages(&request.locator))
        .await?;

    Ok(Json(results))
}
