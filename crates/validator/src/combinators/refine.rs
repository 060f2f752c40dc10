//! REFINE combinator - ad-hoc predicate plus message
//!
//! The smallest unit of a refinement chain: a predicate over the input and
//! the error it produces when the predicate is false.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// A validator built from a predicate closure.
///
/// # Examples
///
/// ```
/// use formkit_validator::combinators::refine;
/// use formkit_validator::foundation::Validate;
///
/// let even = refine(|n: &f64| n % 2.0 == 0.0, "even", "Must be even");
/// assert!(even.validate(&4.0).is_ok());
/// assert_eq!(even.validate(&3.0).unwrap_err().message, "Must be even");
/// ```
pub struct Refine<F, T: ?Sized> {
    predicate: F,
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    _input: PhantomData<fn(&T)>,
}

impl<F, T: ?Sized> Refine<F, T>
where
    F: Fn(&T) -> bool,
{
    /// Creates a refinement from a predicate, error code and message.
    pub fn new(
        predicate: F,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            predicate,
            code: code.into(),
            message: message.into(),
            _input: PhantomData,
        }
    }
}

impl<F: Clone, T: ?Sized> Clone for Refine<F, T> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            code: self.code.clone(),
            message: self.message.clone(),
            _input: PhantomData,
        }
    }
}

impl<F, T: ?Sized> fmt::Debug for Refine<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refine")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<F, T: ?Sized> Validate for Refine<F, T>
where
    F: Fn(&T) -> bool,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if (self.predicate)(input) {
            Ok(())
        } else {
            Err(ValidationError::new(
                self.code.clone(),
                self.message.clone(),
            ))
        }
    }
}

/// Creates a `Refine` validator.
pub fn refine<F, T: ?Sized>(
    predicate: F,
    code: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
) -> Refine<F, T>
where
    F: Fn(&T) -> bool,
{
    Refine::new(predicate, code, message)
}
