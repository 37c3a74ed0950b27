//! Handler for resolving a short code to its long URL as JSON.

use axum::{Json, extract::State};

use crate::api::dto::lookup::{RetrieveLongUrlRequest, RetrieveLongUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Looks up the long URL behind a short code.
///
/// # Endpoint
///
/// `GET /retrieveLongUrl` with a JSON body:
///
/// ```json
/// { "short_url": "abc1234" }
/// ```
///
/// # Response
///
/// ```json
/// { "long_url": "http://www.google.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `{ "Error": "URL not found" }` if the code has
/// no mapping.
pub async fn retrieve_long_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<RetrieveLongUrlRequest>,
) -> Result<Json<RetrieveLongUrlResponse>, AppError> {
    let long_url = state
        .link_service
        .resolve(&payload.short_url)
        .map_err(|e| AppError::bad_request(e.to_string()))?;

    Ok(Json(RetrieveLongUrlResponse {
        long_url: long_url.into_inner(),
    }))
}
