//! Handler for link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::state::AppState;

/// Returns the short code for a long URL, creating it on first request.
///
/// # Endpoint
///
/// `POST /short`
///
/// # Request Body
///
/// ```json
/// { "long_url": "www.google.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "abc1234" }
/// ```
///
/// Submitting the same (normalized) URL again returns the same code.
/// The handler itself never fails; a body that is not JSON or lacks
/// `long_url` is rejected by the `Json` extractor.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Json<ShortenResponse> {
    let code = state.link_service.get_or_create_short(&payload.long_url);

    Json(ShortenResponse {
        short_url: code.into_inner(),
    })
}
