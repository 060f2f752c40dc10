//! National identity number (T.C. Kimlik No) validator
//!
//! An identity number has 11 digits and never starts with `0`. The last two
//! digits are check digits computed from the first nine and ten digits.

use crate::foundation::ValidationError;

/// Number of digits in an identity number.
const LENGTH: usize = 11;

/// Verifies the two check digits of an 11-digit identity number.
///
/// Returns `false` for anything that is not exactly 11 ASCII digits or that
/// starts with `0`.
///
/// # Examples
///
/// ```
/// use formkit_validator::validators::national_id_checksum;
///
/// assert!(national_id_checksum("10000000146"));
/// assert!(!national_id_checksum("10000000147"));
/// assert!(!national_id_checksum("01234567890"));
/// ```
#[must_use]
pub fn national_id_checksum(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != LENGTH || bytes[0] == b'0' || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let mut digits = [0i32; LENGTH];
    for (slot, byte) in digits.iter_mut().zip(bytes) {
        *slot = i32::from(byte - b'0');
    }

    let odd_sum = digits[0] + digits[2] + digits[4] + digits[6] + digits[8];
    let even_sum = digits[1] + digits[3] + digits[5] + digits[7];
    // odd_sum * 7 - even_sum is negative for inputs like 19090909018
    let tenth = (odd_sum * 7 - even_sum).rem_euclid(10);
    let eleventh = digits[..10].iter().sum::<i32>().rem_euclid(10);

    digits[9] == tenth && digits[10] == eleventh
}

crate::validator! {
    /// Validates a Turkish national identity number, checksum included.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::validators::NationalId;
    /// use formkit_validator::foundation::Validate;
    ///
    /// assert!(NationalId.validate("12345678950").is_ok());
    /// assert!(NationalId.validate("12345678951").is_err());
    /// ```
    pub NationalId for str;
    rule(input) { national_id_checksum(input) }
    error(input) {
        ValidationError::new("national_id", "Invalid national ID number")
            .with_param("length", input.chars().count().to_string())
    }
    fn national_id();
}
