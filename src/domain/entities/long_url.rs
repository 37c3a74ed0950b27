//! Normalized long URL value type.

use crate::utils::url_normalizer::normalize_url;
use std::fmt;

/// The original URL supplied by a client, normalized to carry a scheme.
///
/// The only way to build one from client input is [`LongUrl::normalize`], so
/// every value held by the store has gone through the same rule and two
/// spellings that normalize identically share one mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LongUrl(String);

impl LongUrl {
    /// Normalizes raw client input.
    ///
    /// Never fails: see [`normalize_url`] for the rule.
    pub fn normalize(raw: &str) -> Self {
        Self(normalize_url(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LongUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
