//! Short code value type.

use std::borrow::Borrow;
use std::fmt;

/// A short alphanumeric identifier standing in for a long URL.
///
/// Generated codes are always [`ShortCode::LENGTH`] characters drawn from
/// `[a-zA-Z0-9]`. The type itself does not re-validate its contents: codes are
/// only minted by a [`crate::domain::generator::CodeGenerator`], and lookups are
/// performed with plain `&str` through the [`Borrow`] impl, so a malformed
/// candidate simply misses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Number of characters in every generated code.
    pub const LENGTH: usize = 7;

    /// Wraps a code produced by a trusted generator.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns `true` if `code` has the shape of a generated code.
    pub fn is_well_formed(code: &str) -> bool {
        code.len() == Self::LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Borrow<str> for ShortCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
