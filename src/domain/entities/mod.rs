//! Core domain entities representing the data model.
//!
//! # Entity Types
//!
//! - [`LongUrl`] - A client URL after scheme normalization
//! - [`ShortCode`] - A generated 7-character alphanumeric code
//! - [`Mapping`] - The pair of the two, stored in both directions

pub mod long_url;
pub mod mapping;
pub mod short_code;

pub use long_url::LongUrl;
pub use mapping::Mapping;
pub use short_code::ShortCode;
