//! Numeric range validators
//!
//! Form numbers arrive as JSON numbers, so these validators work on `f64`.
//! Bounds are rendered with `f64`'s `Display`, which prints `100.0` as
//! `100`.

use crate::foundation::{Validate, ValidationError};

crate::validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq)]
    pub Min { min: f64 } for f64;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("Value must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(value: f64);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq)]
    pub Max { max: f64 } for f64;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("Value must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(value: f64);
}

/// Validates that a value is within an inclusive range.
///
/// The lower bound is checked first, so a value below `min` reports the
/// `min` error and a value above `max` reports the `max` error.
///
/// # Examples
///
/// ```
/// use formkit_validator::validators::in_range;
/// use formkit_validator::foundation::Validate;
///
/// let validator = in_range(0.0, 100.0);
/// assert!(validator.validate(&50.0).is_ok());
/// assert!(validator.validate(&150.0).unwrap_err().message.contains("100"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InRange {
    pub min: Min,
    pub max: Max,
}

impl InRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Min::new(min),
            max: Max::new(max),
        }
    }
}

impl Validate for InRange {
    type Input = f64;

    fn validate(&self, input: &f64) -> Result<(), ValidationError> {
        self.min.validate(input)?;
        self.max.validate(input)
    }
}

/// Creates an inclusive range validator.
#[must_use]
pub fn in_range(min: f64, max: f64) -> InRange {
    InRange::new(min, max)
}
