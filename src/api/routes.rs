//! API route configuration.
//!
//! All endpoints are public.

use crate::api::handlers::{redirect_handler, retrieve_long_url_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// The shortening, lookup and redirect routes.
///
/// # Endpoints
///
/// - `POST /short`            - Get or create the short code for a long URL
/// - `GET  /retrieveLongUrl`  - Resolve a code (JSON body) to its long URL
/// - `GET  /{short_url}`      - Redirect to the long URL
///
/// Static segments win over the `{short_url}` capture, so `/short` and
/// `/retrieveLongUrl` never reach the redirect handler.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/short", post(shorten_handler))
        .route("/retrieveLongUrl", get(retrieve_long_url_handler))
        .route("/{short_url}", get(redirect_handler))
}
