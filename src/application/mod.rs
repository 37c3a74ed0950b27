//! Application layer services implementing business logic.
//!
//! Services consume domain traits and provide a plain, synchronous API for
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short code allocation and resolution

pub mod services;
