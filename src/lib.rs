//! # linkmint
//!
//! A small in-memory URL shortener built with Axum.
//!
//! Each distinct long URL gets a random 7-character alphanumeric code. The
//! pairing is one-to-one and lasts for the life of the process.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the code generator seam, and the repository trait
//! - **Application Layer** ([`application`]) - Normalization and the create/resolve operations
//! - **Infrastructure Layer** ([`infrastructure`]) - Lock-protected in-memory mapping store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- --listen 127.0.0.1:3005
//!
//! curl -X POST localhost:3005/short -H 'content-type: application/json' \
//!      -d '{"long_url":"www.google.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables and flags via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{LongUrl, Mapping, ShortCode};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
