//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a long URL.
///
/// `long_url` is taken as-is; any string is accepted and normalized by the
/// service.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub long_url: String,
}

/// The short code allocated for (or already held by) the long URL.
///
/// The field carries the bare code, not a full URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
