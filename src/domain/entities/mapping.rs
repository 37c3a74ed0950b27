//! Mapping entity pairing a long URL with its short code.

use super::{LongUrl, ShortCode};
use chrono::{DateTime, Utc};

/// One bidirectional association between a [`LongUrl`] and a [`ShortCode`].
///
/// Mappings are created once and never updated or removed while the process
/// runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub long_url: LongUrl,
    pub short_code: ShortCode,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a mapping stamped with the current time.
    pub fn new(long_url: LongUrl, short_code: ShortCode) -> Self {
        Self {
            long_url,
            short_code,
            created_at: Utc::now(),
        }
    }
}
