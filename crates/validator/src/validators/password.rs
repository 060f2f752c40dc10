//! Password strength validators
//!
//! [`StrongPassword`] bundles five independent checks. Each check is also a
//! validator of its own so a schema can register them as separate steps and
//! report the first one that fails.

use crate::foundation::{Validate, ValidationError};
use crate::validators::length::MinLength;

/// Minimum number of characters in a strong password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

crate::validator! {
    /// Requires at least one ASCII uppercase letter.
    pub HasUppercase for str;
    rule(input) { input.chars().any(|c| c.is_ascii_uppercase()) }
    error(input) { ValidationError::new("password_uppercase", "Password must contain an uppercase letter") }
    fn has_uppercase();
}

crate::validator! {
    /// Requires at least one ASCII lowercase letter.
    pub HasLowercase for str;
    rule(input) { input.chars().any(|c| c.is_ascii_lowercase()) }
    error(input) { ValidationError::new("password_lowercase", "Password must contain a lowercase letter") }
    fn has_lowercase();
}

crate::validator! {
    /// Requires at least one ASCII digit.
    pub HasDigit for str;
    rule(input) { input.chars().any(|c| c.is_ascii_digit()) }
    error(input) { ValidationError::new("password_digit", "Password must contain a digit") }
    fn has_digit();
}

crate::validator! {
    /// Requires at least one character outside `[A-Za-z0-9]`.
    ///
    /// Non-ASCII letters such as `ş` count as special characters.
    pub HasSpecial for str;
    rule(input) { input.chars().any(|c| !c.is_ascii_alphanumeric()) }
    error(input) { ValidationError::new("password_special", "Password must contain a special character") }
    fn has_special();
}

/// Validates password complexity.
///
/// Checks, in order: at least [`MIN_PASSWORD_LENGTH`] characters, an
/// uppercase letter, a lowercase letter, a digit and a special character.
/// The first failing check is reported.
///
/// # Examples
///
/// ```
/// use formkit_validator::validators::StrongPassword;
/// use formkit_validator::foundation::Validate;
///
/// assert!(StrongPassword.validate("Secret1!").is_ok());
/// assert_eq!(
///     StrongPassword.validate("secret1!").unwrap_err().code,
///     "password_uppercase"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StrongPassword;

impl StrongPassword {
    /// Length check with the password-specific message.
    pub fn length_check(password: &str) -> Result<(), ValidationError> {
        MinLength::new(MIN_PASSWORD_LENGTH)
            .validate(password)
            .map_err(|e| {
                ValidationError::new(
                    "password_min_length",
                    format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
                )
                .with_nested_error(e)
            })
    }
}

impl Validate for StrongPassword {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        Self::length_check(input)?;
        HasUppercase.validate(input)?;
        HasLowercase.validate(input)?;
        HasDigit.validate(input)?;
        HasSpecial.validate(input)
    }
}

#[must_use]
pub const fn strong_password() -> StrongPassword {
    StrongPassword
}
