//! Utility functions for code generation and URL processing.
//!
//! - [`code_generator`] - Random short code generation
//! - [`location`] - Header-safe encoding of redirect targets
//! - [`url_normalizer`] - Scheme normalization of long URLs

pub mod code_generator;
pub mod location;
pub mod url_normalizer;
