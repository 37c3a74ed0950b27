//! Data Transfer Objects for API requests and responses.
//!
//! Field names follow the public wire contract (`long_url`, `short_url`).

pub mod health;
pub mod lookup;
pub mod shorten;
