//! AND combinator - logical conjunction of validators
//!
//! Both validators must pass. The left validator runs first and its error
//! is returned without running the right one, which is what gives chained
//! validators their first-failure-wins behavior.
//!
//! # Examples
//!
//! ```
//! use formkit_validator::combinators::And;
//! use formkit_validator::foundation::Validate;
//! use formkit_validator::validators::{min_length, max_length};
//!
//! let validator = And::new(min_length(5), max_length(20));
//! assert!(validator.validate("hello").is_ok());
//! assert_eq!(validator.validate("hi").unwrap_err().code, "min_length");
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Errors are returned from the first failing validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
