//! Random short code generation.
//!
//! Produces fixed-length codes over the 62-symbol alphanumeric alphabet.
//! Uniqueness is not checked here; see [`crate::domain::generator`].

use crate::domain::entities::ShortCode;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Generates a random short code.
///
/// Each of the [`ShortCode::LENGTH`] characters is drawn independently and
/// uniformly from `[A-Za-z0-9]` using the thread-local RNG.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ShortCode::LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        for _ in 0..100 {
            assert_eq!(generate_code().len(), ShortCode::LENGTH);
        }
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_covers_all_character_classes() {
        let joined: String = (0..200).map(|_| generate_code()).collect();

        assert!(joined.chars().any(|c| c.is_ascii_lowercase()));
        assert!(joined.chars().any(|c| c.is_ascii_uppercase()));
        assert!(joined.chars().any(|c| c.is_ascii_digit()));
    }
}
