//! In-memory repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryMappingStore`] - Process-wide bidirectional mapping store

pub mod mapping_store;

pub use mapping_store::InMemoryMappingStore;
