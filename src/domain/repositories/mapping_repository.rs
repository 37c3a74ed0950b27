//! Repository trait for the long URL ↔ short code mapping.

use crate::domain::entities::{LongUrl, Mapping};
use chrono::{DateTime, Utc};
use crate::domain::generator::CodeGenerator;
use thiserror::Error;

/// Errors surfaced by mapping lookups.
///
/// A malformed code and an unknown code are indistinguishable: both are
/// [`LookupError::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("URL not found")]
    NotFound { code: String },
}

/// Storage contract for the bidirectional mapping.
///
/// Implementations keep the two directional views consistent: a code returned
/// for a long URL resolves back to exactly that URL, no code is shared by two
/// URLs, and a URL that already has a code never gets a second one.
///
/// All operations are synchronous and in-memory.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryMappingStore`] - lock-guarded hash maps
pub trait MappingRepository: Send + Sync {
    /// Returns the mapping for `long_url`, allocating a fresh code from
    /// `generator` if none exists.
    ///
    /// The existence check, code generation, and registration happen as one
    /// atomic step with respect to every other call on the same repository.
    fn get_or_create(&self, long_url: LongUrl, generator: &dyn CodeGenerator) -> Mapping;

    /// Finds the mapping for a short code by exact match.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if the code is not allocated.
    fn find_by_code(&self, code: &str) -> Result<Mapping, LookupError>;

    /// Finds the mapping for an already-normalized long URL without allocating.
    fn find_by_long_url(&self, long_url: &LongUrl) -> Option<Mapping>;

    /// Number of mappings currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creation time of the most recent mapping, or `None` while empty.
    fn last_created_at(&self) -> Option<DateTime<Utc>>;
}
