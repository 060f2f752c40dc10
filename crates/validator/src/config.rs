//! Message catalog and configuration errors.
//!
//! Presets take their failure messages from a [`MessageCatalog`]. The
//! default catalog holds English messages; a JSON document can override any
//! subset of them:
//!
//! ```
//! use formkit_validator::config::MessageCatalog;
//!
//! let catalog = MessageCatalog::from_json_str(r#"{ "phone": "Geçersiz telefon numarası" }"#).unwrap();
//! assert_eq!(catalog.phone, "Geçersiz telefon numarası");
//! assert_eq!(catalog.iban, MessageCatalog::default().iban);
//! ```

use serde::{Deserialize, Serialize};

/// Errors raised while building validators from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A factory received a lower bound above its upper bound.
    #[error("invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds {
        /// The rejected lower bound.
        min: String,
        /// The rejected upper bound.
        max: String,
    },

    /// A message catalog could not be parsed.
    #[error("invalid message catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid_bounds(min: impl ToString, max: impl ToString) -> Self {
        Self::InvalidBounds {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// Failure messages used by the preset schemas.
///
/// Unknown keys in a JSON catalog are rejected so typos surface as errors
/// instead of silently keeping the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageCatalog {
    pub required: String,
    pub invalid_date: String,
    pub national_id: String,
    pub phone: String,
    pub iban: String,
    pub tax_id: String,
    pub plate: String,
    pub currency_negative: String,
    pub currency_precision: String,
    pub percentage: String,
    pub password_min_length: String,
    pub password_uppercase: String,
    pub password_lowercase: String,
    pub password_digit: String,
    pub password_special: String,
    pub date_string: String,
    pub future_date: String,
    pub past_date: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            required: "This field is required".into(),
            invalid_date: "Invalid date".into(),
            national_id: "Invalid national ID number".into(),
            phone: "Invalid phone number".into(),
            iban: "Invalid IBAN".into(),
            tax_id: "Tax ID must be exactly 10 digits".into(),
            plate: "Invalid license plate".into(),
            currency_negative: "Amount cannot be negative".into(),
            currency_precision: "Amount can have at most 2 decimal places".into(),
            percentage: "Percentage must be between 0 and 100".into(),
            password_min_length: "Password must be at least 8 characters".into(),
            password_uppercase: "Password must contain an uppercase letter".into(),
            password_lowercase: "Password must contain a lowercase letter".into(),
            password_digit: "Password must contain a digit".into(),
            password_special: "Password must contain a special character".into(),
            date_string: "Date must be in YYYY-MM-DD format".into(),
            future_date: "Date must be in the future".into(),
            past_date: "Date must be in the past".into(),
        }
    }
}

impl MessageCatalog {
    /// Parses a JSON object of message overrides.
    ///
    /// Keys that are not present keep their default message.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let catalog = serde_json::from_str(json)?;
        tracing::debug!("loaded message catalog");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let catalog = MessageCatalog::from_json_str(r#"{"iban": "IBAN hatalı"}"#).unwrap();
        assert_eq!(catalog.iban, "IBAN hatalı");
        assert_eq!(catalog.phone, "Invalid phone number");
    }

    #[test]
    fn empty_object_is_default() {
        let catalog = MessageCatalog::from_json_str("{}").unwrap();
        assert_eq!(catalog, MessageCatalog::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = MessageCatalog::from_json_str(r#"{"ibn": "typo"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Catalog(_)));
        assert!(err.to_string().starts_with("invalid message catalog"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(MessageCatalog::from_json_str("{").is_err());
    }

    #[test]
    fn invalid_bounds_display() {
        let err = ConfigError::invalid_bounds(10, 1);
        assert_eq!(err.to_string(), "invalid bounds: min 10 is greater than max 1");
    }
}
