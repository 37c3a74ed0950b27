//! Short code allocation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{LongUrl, ShortCode};
use chrono::{DateTime, Utc};
use crate::domain::generator::CodeGenerator;
use crate::domain::repositories::{LookupError, MappingRepository};
use tracing::debug;

/// Service exposing the two core operations to the HTTP layer.
///
/// Normalizes client input, then delegates to the repository, which owns the
/// mapping and makes creation atomic.
pub struct LinkService<R: MappingRepository, G: CodeGenerator> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R: MappingRepository, G: CodeGenerator> LinkService<R, G> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, generator: Arc<G>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Returns the short code for a long URL, allocating one on first use.
    ///
    /// # Normalization
    ///
    /// Input without an `http://` or `https://` prefix (case-insensitive) gets
    /// `http://` prepended before lookup, so `www.google.com` and
    /// `http://www.google.com` share one code.
    ///
    /// # Idempotence
    ///
    /// Repeated calls for the same normalized URL, including concurrent ones,
    /// return the same code and allocate at most once.
    ///
    /// Any input is accepted; there is no error path.
    pub fn get_or_create_short(&self, long_url: &str) -> ShortCode {
        let long_url = LongUrl::normalize(long_url);
        self.repository
            .get_or_create(long_url, self.generator.as_ref())
            .short_code
    }

    /// Resolves a short code to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if no mapping exists for `code`,
    /// whether the code is unknown or malformed.
    pub fn resolve(&self, code: &str) -> Result<LongUrl, LookupError> {
        self.repository
            .find_by_code(code)
            .map(|mapping| mapping.long_url)
            .inspect_err(|_| debug!(code, "Short code not found"))
    }

    /// Number of mappings created so far.
    pub fn mapping_count(&self) -> usize {
        self.repository.len()
    }

    /// When the most recent short code was allocated.
    pub fn last_allocated_at(&self) -> Option<DateTime<Utc>> {
        self.repository.last_created_at()
    }
}
