//! Turkish mobile phone number validator

use std::sync::LazyLock;

use crate::foundation::ValidationError;

/// Optional `+90` or trunk `0`, then a `5` and nine more digits.
static TR_PHONE_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^(\+90|0)?5[0-9]{9}$").expect("phone regex literal is valid")
});

crate::validator! {
    /// Validates a Turkish mobile number.
    ///
    /// Accepts `5XXXXXXXXX`, `05XXXXXXXXX` and `+905XXXXXXXXX`. Separators
    /// are not stripped; a form layer that allows spaces should remove them
    /// in a preprocessing step.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::validators::TrPhone;
    /// use formkit_validator::foundation::Validate;
    ///
    /// assert!(TrPhone.validate("+905551234567").is_ok());
    /// assert!(TrPhone.validate("05551234567").is_ok());
    /// assert!(TrPhone.validate("+904551234567").is_err());
    /// ```
    pub TrPhone for str;
    rule(input) { TR_PHONE_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("phone", "Invalid phone number") }
    fn tr_phone();
}
