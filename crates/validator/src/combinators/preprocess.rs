//! PREPROCESS combinator - transform input before validating
//!
//! Used for case-insensitive formats: IBANs and plates are upper-cased
//! before the pattern runs.

use std::borrow::Borrow;

use crate::foundation::{Validate, ValidationError};

/// Runs a transform on the input, then validates the transformed value.
///
/// # Examples
///
/// ```
/// use formkit_validator::combinators::Preprocess;
/// use formkit_validator::foundation::Validate;
/// use formkit_validator::validators::matches_regex;
///
/// let validator = Preprocess::new(matches_regex("^TR").unwrap(), |s: &str| s.to_uppercase());
/// assert!(validator.validate("tr33").is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Preprocess<V, F> {
    inner: V,
    transform: F,
}

impl<V, F> Preprocess<V, F> {
    /// Creates a new `Preprocess` combinator.
    pub fn new(inner: V, transform: F) -> Self {
        Self { inner, transform }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V, F> Validate for Preprocess<V, F>
where
    V: Validate,
    V::Input: ToOwned,
    F: Fn(&V::Input) -> <V::Input as ToOwned>::Owned,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let transformed = (self.transform)(input);
        self.inner.validate(transformed.borrow())
    }
}

/// Creates a `Preprocess` combinator.
pub fn preprocess<V, F>(validator: V, transform: F) -> Preprocess<V, F> {
    Preprocess::new(validator, transform)
}
