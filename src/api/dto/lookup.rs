//! DTOs for the long URL lookup endpoint.

use serde::{Deserialize, Serialize};

/// Request carrying the short code to resolve.
#[derive(Debug, Deserialize)]
pub struct RetrieveLongUrlRequest {
    pub short_url: String,
}

#[derive(Debug, Serialize)]
pub struct RetrieveLongUrlResponse {
    pub long_url: String,
}
