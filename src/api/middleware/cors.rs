//! Cross-origin resource sharing.

use tower_http::cors::CorsLayer;

/// Allows requests from any origin.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
