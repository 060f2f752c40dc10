//! Vehicle registration plate validator

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

/// Province code 01-81, 1-3 letters, 2-4 digits.
static PLATE_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^(0[1-9]|[1-7][0-9]|8[01])[A-Z]{1,3}[0-9]{2,4}$")
        .expect("plate regex literal is valid")
});

/// Validates a Turkish vehicle plate such as `34ABC123`.
///
/// The input is upper-cased before matching. Spaces are not allowed.
///
/// # Examples
///
/// ```
/// use formkit_validator::validators::Plate;
/// use formkit_validator::foundation::Validate;
///
/// assert!(Plate.validate("34ABC123").is_ok());
/// assert!(Plate.validate("06a1234").is_ok());
/// assert!(Plate.validate("82AAA11").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Plate;

impl Validate for Plate {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if PLATE_REGEX.is_match(&input.to_uppercase()) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format(
                "plate",
                "Invalid license plate",
            ))
        }
    }
}

#[must_use]
pub const fn plate() -> Plate {
    Plate
}
