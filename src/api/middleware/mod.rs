//! HTTP middleware for request processing.
//!
//! Provides observability and CORS middleware.

pub mod cors;
pub mod tracing;
