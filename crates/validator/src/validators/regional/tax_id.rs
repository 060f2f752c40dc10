//! Tax identification number (Vergi Kimlik No) validator

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates a 10-digit tax identification number.
    ///
    /// Only the shape is checked; the tax office checksum is not.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::validators::TaxId;
    /// use formkit_validator::foundation::Validate;
    ///
    /// assert!(TaxId.validate("1234567890").is_ok());
    /// assert!(TaxId.validate("123456789").is_err());
    /// ```
    pub TaxId for str;
    rule(input) { input.len() == 10 && input.bytes().all(|b| b.is_ascii_digit()) }
    error(input) { ValidationError::new("tax_id", "Tax ID must be exactly 10 digits") }
    fn tax_id();
}
