//! Turkish IBAN validator

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

/// `TR` followed by 24 digits.
static TR_IBAN_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^TR[0-9]{24}$").expect("IBAN regex literal is valid"));

/// Validates the shape of a Turkish IBAN.
///
/// The input is upper-cased before matching, so `tr33...` is accepted. The
/// mod-97 check digits are not verified.
///
/// # Examples
///
/// ```
/// use formkit_validator::validators::TrIban;
/// use formkit_validator::foundation::Validate;
///
/// assert!(TrIban.validate("tr330006100519786457841326").is_ok());
/// assert!(TrIban.validate("TR12345").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TrIban;

impl TrIban {
    /// Upper-cases an IBAN the way the validator sees it.
    #[must_use]
    pub fn normalize(input: &str) -> String {
        input.to_uppercase()
    }
}

impl Validate for TrIban {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if TR_IBAN_REGEX.is_match(&Self::normalize(input)) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("iban", "Invalid IBAN")
                .with_param("length", input.chars().count().to_string()))
        }
    }
}

#[must_use]
pub const fn tr_iban() -> TrIban {
    TrIban
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive() {
        assert!(tr_iban().validate("TR330006100519786457841326").is_ok());
        assert!(tr_iban().validate("tr330006100519786457841326").is_ok());
        assert_eq!(
            TrIban::normalize("tr330006100519786457841326"),
            "TR330006100519786457841326"
        );
    }

    #[test]
    fn wrong_length_or_country() {
        assert!(tr_iban().validate("TR12345").is_err());
        assert!(tr_iban().validate("TR3300061005197864578413261").is_err());
        assert!(tr_iban().validate("DE330006100519786457841326").is_err());
        assert!(tr_iban().validate("TR33 0006 1005 1978 6457 8413 26").is_err());
    }

    #[test]
    fn only_ascii_digits() {
        assert!(tr_iban().validate("TR٣٣٠٠٠٦١٠٠٥١٩٧٨٦٤٥٧٨٤١٣٢٦").is_err());
        assert!(tr_iban().validate("tr３３０００６１００５１９７８６４５７８４１３２６").is_err());
    }
}
