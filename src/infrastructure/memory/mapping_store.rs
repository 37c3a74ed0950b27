//! In-memory implementation of [`MappingRepository`].

use crate::domain::entities::{LongUrl, Mapping, ShortCode};
use crate::domain::generator::{CodeGenerator, generate_unique_code};
use crate::domain::repositories::{LookupError, MappingRepository};
use chrono::{DateTime, Utc};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::collections::{HashMap, HashSet};
use tracing::info;

/// The three collections that together describe every mapping.
///
/// Only [`Inner::register`] mutates them, and it always touches all three.
#[derive(Debug, Default)]
struct Inner {
    long_to_short: HashMap<LongUrl, ShortCode>,
    short_to_long: HashMap<ShortCode, Mapping>,
    allocated: HashSet<ShortCode>,
    last_created_at: Option<DateTime<Utc>>,
}

impl Inner {
    fn mapping_for(&self, long_url: &LongUrl) -> Option<&Mapping> {
        self.long_to_short
            .get(long_url)
            .and_then(|code| self.short_to_long.get(code))
    }

    fn register(&mut self, mapping: Mapping) {
        self.last_created_at = Some(mapping.created_at);
        self.allocated.insert(mapping.short_code.clone());
        self.long_to_short
            .insert(mapping.long_url.clone(), mapping.short_code.clone());
        self.short_to_long.insert(mapping.short_code.clone(), mapping);
    }
}

/// Process-wide mapping store backed by hash maps behind a single lock.
///
/// Creation takes an upgradable read lock, so at most one allocation runs at a
/// time while plain lookups keep proceeding; the lock is upgraded to exclusive
/// only for the short window in which a fresh code is drawn and registered.
/// Nothing inside the critical section blocks or awaits.
///
/// State is volatile and lives as long as the store.
#[derive(Debug, Default)]
pub struct InMemoryMappingStore {
    inner: RwLock<Inner>,
}

impl InMemoryMappingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` mappings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Inner {
                long_to_short: HashMap::with_capacity(capacity),
                short_to_long: HashMap::with_capacity(capacity),
                allocated: HashSet::with_capacity(capacity),
                last_created_at: None,
            }),
        }
    }
}

impl MappingRepository for InMemoryMappingStore {
    fn get_or_create(&self, long_url: LongUrl, generator: &dyn CodeGenerator) -> Mapping {
        if let Some(existing) = self.inner.read().mapping_for(&long_url) {
            return existing.clone();
        }

        let guard = self.inner.upgradable_read();

        // Another allocation may have won the race between the two locks.
        if let Some(existing) = guard.mapping_for(&long_url) {
            return existing.clone();
        }

        let code = generate_unique_code(generator, |candidate| guard.allocated.contains(candidate));
        let mapping = Mapping::new(long_url, code);

        let mut inner = RwLockUpgradableReadGuard::upgrade(guard);
        inner.register(mapping.clone());
        drop(inner);

        info!(
            code = %mapping.short_code,
            long_url = %mapping.long_url,
            created_at = %mapping.created_at,
            "Allocated short code"
        );

        mapping
    }

    fn find_by_code(&self, code: &str) -> Result<Mapping, LookupError> {
        self.inner
            .read()
            .short_to_long
            .get(code)
            .cloned()
            .ok_or_else(|| LookupError::NotFound {
                code: code.to_string(),
            })
    }

    fn find_by_long_url(&self, long_url: &LongUrl) -> Option<Mapping> {
        self.inner.read().mapping_for(long_url).cloned()
    }

    fn len(&self) -> usize {
        self.inner.read().short_to_long.len()
    }

    fn last_created_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().last_created_at
    }
}
