//! Ready-made schemas for regional formats
//!
//! The free functions use the default [`MessageCatalog`]. Build a
//! [`Presets`] with a custom catalog to change the messages:
//!
//! ```
//! use formkit_validator::config::MessageCatalog;
//! use formkit_validator::schema::Presets;
//! use serde_json::json;
//!
//! let catalog = MessageCatalog {
//!     phone: "Geçersiz telefon numarası".into(),
//!     ..MessageCatalog::default()
//! };
//! let presets = Presets::new(catalog);
//! let err = presets.phone_number().validate(&json!("123")).unwrap_err();
//! assert_eq!(err.message, "Geçersiz telefon numarası");
//! ```

use chrono::Utc;

use crate::combinators::refine;
use crate::config::MessageCatalog;
use crate::foundation::ValidateExt;
use crate::schema::Schema;
use crate::validators::{
    Clock, DateString, HasDigit, HasLowercase, HasSpecial, HasUppercase, MIN_PASSWORD_LENGTH,
    MinLength, NationalId, Percentage, Plate, RelativeDate, TaxId, TrIban, TrPhone,
    has_cent_precision,
};

/// Builds preset schemas with messages from a catalog.
#[derive(Debug, Clone)]
pub struct Presets {
    catalog: MessageCatalog,
    clock: Clock,
}

impl Default for Presets {
    fn default() -> Self {
        Self::new(MessageCatalog::default())
    }
}

impl Presets {
    #[must_use]
    pub fn new(catalog: MessageCatalog) -> Self {
        Self {
            catalog,
            clock: Utc::now,
        }
    }

    /// Reads "now" for [`future_date`](Self::future_date) and
    /// [`past_date`](Self::past_date) from `clock`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    fn string(&self) -> Schema {
        Schema::string().required_message(self.catalog.required.clone())
    }

    fn number(&self) -> Schema {
        Schema::number().required_message(self.catalog.required.clone())
    }

    /// 11-digit national identity number with checksum.
    #[must_use]
    pub fn national_id(&self) -> Schema {
        self.string()
            .refine(NationalId.with_message(self.catalog.national_id.clone()))
    }

    /// Mobile number: optional `+90` or `0`, then `5` and nine digits.
    #[must_use]
    pub fn phone_number(&self) -> Schema {
        self.string()
            .refine(TrPhone.with_message(self.catalog.phone.clone()))
    }

    /// `TR` and 24 digits; parsed values are upper-cased.
    #[must_use]
    pub fn iban(&self) -> Schema {
        self.string()
            .preprocess_str(TrIban::normalize)
            .refine(TrIban.with_message(self.catalog.iban.clone()))
    }

    #[must_use]
    pub fn tax_id(&self) -> Schema {
        self.string()
            .refine(TaxId.with_message(self.catalog.tax_id.clone()))
    }

    /// Vehicle plate; parsed values are upper-cased.
    #[must_use]
    pub fn plate(&self) -> Schema {
        self.string()
            .preprocess_str(str::to_uppercase)
            .refine(Plate.with_message(self.catalog.plate.clone()))
    }

    /// Non-negative amount with at most two decimal places.
    #[must_use]
    pub fn currency(&self) -> Schema {
        self.number()
            .refine(refine(
                |v: &f64| *v >= 0.0,
                "negative_amount",
                self.catalog.currency_negative.clone(),
            ))
            .refine(refine(
                |v: &f64| has_cent_precision(*v),
                "currency_precision",
                self.catalog.currency_precision.clone(),
            ))
    }

    /// Number in `[0, 100]`.
    #[must_use]
    pub fn percentage(&self) -> Schema {
        self.number()
            .refine(Percentage.with_message(self.catalog.percentage.clone()))
    }

    /// Five separate checks: length, uppercase, lowercase, digit, special.
    #[must_use]
    pub fn strong_password(&self) -> Schema {
        let c = &self.catalog;
        self.string()
            .refine(MinLength::new(MIN_PASSWORD_LENGTH).with_message(c.password_min_length.clone()))
            .refine(HasUppercase.with_message(c.password_uppercase.clone()))
            .refine(HasLowercase.with_message(c.password_lowercase.clone()))
            .refine(HasDigit.with_message(c.password_digit.clone()))
            .refine(HasSpecial.with_message(c.password_special.clone()))
    }

    /// `YYYY-MM-DD` pattern, no calendar check.
    #[must_use]
    pub fn date_string(&self) -> Schema {
        self.string()
            .refine(DateString.with_message(self.catalog.date_string.clone()))
    }

    /// A date strictly after now. The result depends on when it is called.
    #[must_use]
    pub fn future_date(&self) -> Schema {
        Schema::date()
            .required_message(self.catalog.required.clone())
            .message(self.catalog.invalid_date.clone())
            .refine(
                RelativeDate::future()
                    .with_clock(self.clock)
                    .with_message(self.catalog.future_date.clone()),
            )
    }

    /// A date strictly before now. The result depends on when it is called.
    #[must_use]
    pub fn past_date(&self) -> Schema {
        Schema::date()
            .required_message(self.catalog.required.clone())
            .message(self.catalog.invalid_date.clone())
            .refine(
                RelativeDate::past()
                    .with_clock(self.clock)
                    .with_message(self.catalog.past_date.clone()),
            )
    }
}

// ============================================================================
// DEFAULT-CATALOG SHORTHANDS
// ============================================================================

#[must_use]
pub fn national_id() -> Schema {
    Presets::default().national_id()
}

#[must_use]
pub fn phone_number() -> Schema {
    Presets::default().phone_number()
}

#[must_use]
pub fn iban() -> Schema {
    Presets::default().iban()
}

#[must_use]
pub fn tax_id() -> Schema {
    Presets::default().tax_id()
}

#[must_use]
pub fn plate() -> Schema {
    Presets::default().plate()
}

#[must_use]
pub fn currency() -> Schema {
    Presets::default().currency()
}

#[must_use]
pub fn percentage() -> Schema {
    Presets::default().percentage()
}

#[must_use]
pub fn strong_password() -> Schema {
    Presets::default().strong_password()
}

#[must_use]
pub fn date_string() -> Schema {
    Presets::default().date_string()
}

#[must_use]
pub fn future_date() -> Schema {
    Presets::default().future_date()
}

#[must_use]
pub fn past_date() -> Schema {
    Presets::default().past_date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};
    use serde_json::{Value, json};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
    }

    fn message(schema: &Schema, value: Value) -> Option<String> {
        schema.validate(&value).err().map(|e| e.message.into_owned())
    }

    #[test]
    fn catalog_messages_reach_errors() {
        assert_eq!(
            message(&national_id(), json!("12345678951")).as_deref(),
            Some("Invalid national ID number")
        );
        assert_eq!(message(&tax_id(), json!("1")).as_deref(), Some("Tax ID must be exactly 10 digits"));
    }

    #[test]
    fn required_uses_catalog() {
        let presets = Presets::new(MessageCatalog {
            required: "Bu alan zorunludur".into(),
            ..MessageCatalog::default()
        });
        assert_eq!(message(&presets.iban(), Value::Null).as_deref(), Some("Bu alan zorunludur"));
    }

    #[test]
    fn currency_sign_before_precision() {
        let schema = currency();
        assert_eq!(message(&schema, json!(-1.234)).as_deref(), Some("Amount cannot be negative"));
        assert_eq!(
            message(&schema, json!(1.234)).as_deref(),
            Some("Amount can have at most 2 decimal places")
        );
        assert_eq!(message(&schema, json!(1.23)), None);
    }

    #[test]
    fn password_checks_are_ordered() {
        let schema = strong_password();
        assert_eq!(
            message(&schema, json!("short")).as_deref(),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(
            message(&schema, json!("alllowercase1!")).as_deref(),
            Some("Password must contain an uppercase letter")
        );
        assert_eq!(message(&schema, json!("Passw0rd!")), None);
    }

    #[test]
    fn relative_dates_with_fixed_clock() {
        let presets = Presets::default().with_clock(fixed_now);
        assert_eq!(message(&presets.future_date(), json!("2025-01-16")), None);
        assert_eq!(
            message(&presets.future_date(), json!("2025-01-15")).as_deref(),
            Some("Date must be in the future")
        );
        assert_eq!(message(&presets.past_date(), json!("2025-01-15")), None);
        assert_eq!(
            message(&presets.past_date(), json!("not a date")).as_deref(),
            Some("Invalid date")
        );
    }

    #[test]
    fn plate_parses_upper_case() {
        assert_eq!(plate().parse(&json!("34abc123")).unwrap(), json!("34ABC123"));
    }
}
