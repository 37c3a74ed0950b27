//! Short code generation seam.
//!
//! A [`CodeGenerator`] only proposes candidates. Uniqueness is enforced by
//! [`generate_unique_code`], which the mapping store calls while holding its
//! allocation lock so that the "is this code free" check and the registration of
//! the code cannot be interleaved with another allocation.

use crate::domain::entities::ShortCode;
use crate::utils::code_generator::generate_code;
use tracing::debug;

/// Source of candidate short codes.
///
/// Implementations must be cheap and non-blocking: they are invoked inside
/// the store's critical section.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Draws one candidate code. Candidates may repeat.
    fn generate(&self) -> ShortCode;
}

/// Production generator drawing uniform random 7-character alphanumeric codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> ShortCode {
        ShortCode::new_unchecked(generate_code())
    }
}

/// Draws candidates until one is not allocated.
///
/// There is no retry bound: with 62^7 possible codes, exhaustion is not a
/// practical concern.
pub fn generate_unique_code<G, F>(generator: &G, is_allocated: F) -> ShortCode
where
    G: CodeGenerator + ?Sized,
    F: Fn(&ShortCode) -> bool,
{
    loop {
        let candidate = generator.generate();
        if !is_allocated(&candidate) {
            return candidate;
        }
        debug!(code = %candidate, "Short code collision, drawing again");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    #[test]
    fn test_random_generator_produces_well_formed_codes() {
        let generator = RandomCodeGenerator::new();
        for _ in 0..100 {
            let c = generator.generate();
            assert!(ShortCode::is_well_formed(c.as_str()), "{c}");
        }
    }

    #[test]
    fn test_unique_code_returns_first_free_draw() {
        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|| code("free001"));

        let allocated: HashSet<ShortCode> = HashSet::new();
        let result = generate_unique_code(&generator, |c| allocated.contains(c));

        assert_eq!(result, code("free001"));
    }

    #[test]
    fn test_unique_code_skips_allocated_draws() {
        let mut draws = vec![code("taken01"), code("taken02"), code("free001")].into_iter();
        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate()
            .times(3)
            .returning(move || draws.next().unwrap());

        let allocated: HashSet<ShortCode> = [code("taken01"), code("taken02")].into();
        let result = generate_unique_code(&generator, |c| allocated.contains(c));

        assert_eq!(result, code("free001"));
    }

    #[test]
    fn test_unique_code_works_through_trait_object() {
        let generator: Box<dyn CodeGenerator> = Box::new(RandomCodeGenerator::new());
        let result = generate_unique_code(generator.as_ref(), |_| false);
        assert_eq!(result.as_str().len(), ShortCode::LENGTH);
    }

    #[test]
    fn test_generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomCodeGenerator>();
        assert_send_sync::<MockCodeGenerator>();
    }
}
