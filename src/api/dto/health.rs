//! DTOs for health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of mappings held by the store.
    pub mappings: usize,
    /// Time of the newest allocation, `null` before the first one.
    pub last_allocated_at: Option<DateTime<Utc>>,
}
