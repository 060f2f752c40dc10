//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

use std::borrow::Borrow;

use crate::foundation::ValidationError;
use crate::foundation::validatable::AsValidatable;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Validators are generic over their input type and return
/// `Result<(), ValidationError>`. Validators hold no per-call state, so a
/// single instance can be shared across threads and reused for every call.
///
/// # Examples
///
/// ```
/// use formkit_validator::foundation::{Validate, ValidationError};
///
/// struct TenDigits;
///
/// impl Validate for TenDigits {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.len() == 10 && input.bytes().all(|b| b.is_ascii_digit()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("ten_digits", "Must be 10 digits"))
///         }
///     }
/// }
///
/// assert!(TenDigits.validate("1234567890").is_ok());
/// assert!(TenDigits.validate("12345").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Validates any type that can be converted to `Self::Input`.
    ///
    /// This is how typed validators accept raw `serde_json::Value` input:
    /// the conversion itself may fail with a `type_mismatch` error, which is
    /// returned before the validator runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::foundation::Validate;
    /// use formkit_validator::validators::TaxId;
    /// use serde_json::json;
    ///
    /// assert!(TaxId.validate_any(&json!("1234567890")).is_ok());
    /// assert!(TaxId.validate_any(&json!(1234567890)).is_err());
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<(), ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let output = value.as_validatable()?;
        self.validate(output.borrow())
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use formkit_validator::prelude::*;
///
/// let username = min_length(3).and(max_length(20));
/// assert!(username.validate("alice").is_ok());
/// assert!(username.validate("al").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure, so only the first failing
    /// validator's error is returned.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Makes a validator accept `Option<T>`; `None` passes.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Replaces the failure message.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::prelude::*;
    ///
    /// let v = min_length(8).with_message("Password is too short");
    /// assert_eq!(v.validate("abc").unwrap_err().message, "Password is too short");
    /// ```
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Runs `transform` on the input and validates the transformed value
    /// instead. The transform maps the input type onto its owned form,
    /// e.g. `&str -> String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::prelude::*;
    ///
    /// let upper = matches_regex("^[A-Z]+$").unwrap().preprocess(|s: &str| s.to_uppercase());
    /// assert!(upper.validate("abc").is_ok());
    /// ```
    fn preprocess<F>(self, transform: F) -> Preprocess<Self, F>
    where
        Self::Input: ToOwned,
        F: Fn(&Self::Input) -> <Self::Input as ToOwned>::Owned,
    {
        Preprocess::new(self, transform)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::preprocess::Preprocess;
