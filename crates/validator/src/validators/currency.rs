//! Currency amount validator

use crate::foundation::{Validate, ValidationError};

/// Relative tolerance when comparing `v * 100` with its rounded value.
const CENT_TOLERANCE: f64 = 1e-9;

/// Returns `true` if `value` has at most two decimal places, allowing for
/// binary floating-point representation error (`0.1 + 0.2` passes).
#[must_use]
pub fn has_cent_precision(value: f64) -> bool {
    let cents = value * 100.0;
    (cents.round() - cents).abs() <= CENT_TOLERANCE * cents.abs().max(1.0)
}

/// Validates a monetary amount: finite, non-negative, at most two decimals.
///
/// The sign is checked before the precision, so `-1.234` reports the
/// negative-amount error.
///
/// # Examples
///
/// ```
/// use formkit_validator::validators::Currency;
/// use formkit_validator::foundation::Validate;
///
/// assert!(Currency.validate(&19.99).is_ok());
/// assert_eq!(Currency.validate(&-5.0).unwrap_err().code, "negative_amount");
/// assert_eq!(Currency.validate(&1.005).unwrap_err().code, "currency_precision");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Currency;

impl Currency {
    /// Error for amounts below zero.
    #[must_use]
    pub fn negative_error(value: f64) -> ValidationError {
        ValidationError::new("negative_amount", "Amount cannot be negative")
            .with_param("actual", value.to_string())
    }

    /// Error for amounts with more than two decimal places.
    #[must_use]
    pub fn precision_error(value: f64) -> ValidationError {
        ValidationError::new(
            "currency_precision",
            "Amount can have at most 2 decimal places",
        )
        .with_param("actual", value.to_string())
    }
}

impl Validate for Currency {
    type Input = f64;

    fn validate(&self, input: &f64) -> Result<(), ValidationError> {
        let value = *input;
        if !value.is_finite() {
            return Err(ValidationError::type_mismatch("number", "non-finite"));
        }
        if value < 0.0 {
            return Err(Self::negative_error(value));
        }
        if !has_cent_precision(value) {
            return Err(Self::precision_error(value));
        }
        Ok(())
    }
}

#[must_use]
pub const fn currency() -> Currency {
    Currency
}
