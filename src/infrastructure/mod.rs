//! Infrastructure layer.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`memory`] - Volatile in-process storage

pub mod memory;
