//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), never bytes, so
//! `"çağrı"` has length 5.

use crate::foundation::{Validate, ValidationError};

#[inline]
fn char_len(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { char_len(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, char_len(input)) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { char_len(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, char_len(input)) }
    fn max_length(max: usize);
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

/// Validates that a string length is within `min..=max`.
///
/// Reports the same errors as [`MinLength`] and [`MaxLength`], checked in
/// that order. With `min > max` no input can pass.
///
/// # Examples
///
/// ```
/// use formkit_validator::validators::length_range;
/// use formkit_validator::foundation::Validate;
///
/// let validator = length_range(2, 4);
/// assert!(validator.validate("abc").is_ok());
/// assert_eq!(validator.validate("a").unwrap_err().code, "min_length");
/// assert_eq!(validator.validate("abcde").unwrap_err().code, "max_length");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: usize,
}

impl LengthRange {
    /// Creates a new length range validator.
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl Validate for LengthRange {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let len = char_len(input);
        if len < self.min {
            return Err(ValidationError::min_length(self.min, len));
        }
        if len > self.max {
            return Err(ValidationError::max_length(self.max, len));
        }
        Ok(())
    }
}

/// Creates a length range validator.
#[must_use]
pub fn length_range(min: usize, max: usize) -> LengthRange {
    LengthRange::new(min, max)
}
