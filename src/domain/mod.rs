//! Domain layer containing the mapping model and its contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Value types: long URLs, short codes, mappings
//! - [`generator`] - Candidate code generation and the uniqueness loop
//! - [`repositories`] - Storage trait for the bidirectional mapping
//!
//! # Allocation Flow
//!
//! 1. A raw long URL is normalized into a [`entities::LongUrl`]
//! 2. [`repositories::MappingRepository::get_or_create`] returns the existing
//!    mapping, or
//! 3. draws codes via [`generator::generate_unique_code`] until one is free and
//!    registers it in both directions under the same lock

pub mod entities;
pub mod generator;
pub mod repositories;
