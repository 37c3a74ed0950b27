//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into calls on
//! [`crate::application::services::LinkService`] and formats responses
//! according to the public wire contract.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and CORS layers
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
