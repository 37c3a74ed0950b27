//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure`.
//!
//! # Available Repositories
//!
//! - [`MappingRepository`] - Bidirectional long URL ↔ short code mapping

pub mod mapping_repository;

pub use mapping_repository::{LookupError, MappingRepository};
