//! Built-in validators
//!
//! Typed validators, each implementing [`Validate`](crate::foundation::Validate)
//! over one input type.
//!
//! # Categories
//!
//! - **String**: length, regex, date pattern, password strength
//! - **Regional**: national ID, tax ID, phone, IBAN, plate
//! - **Numeric**: range, currency, percentage
//! - **Collection**: element count
//! - **Value**: allowed-value sets, equality with a provided value
//! - **File**: size and MIME type
//! - **Time**: future / past relative to now
//!
//! # Examples
//!
//! ```
//! use formkit_validator::prelude::*;
//!
//! let username = min_length(3).and(max_length(20));
//! assert!(username.validate("alice").is_ok());
//!
//! assert!(NationalId.validate("10000000146").is_ok());
//! assert!(Currency.validate(&12.5).is_ok());
//! ```

// String validators
pub mod length;
pub mod password;
pub mod pattern;

// Regional formats
pub mod regional;

// Numeric validators
pub mod currency;
pub mod percentage;
pub mod range;

// Collection validators
pub mod size;

// Value validators
pub mod equals;
pub mod one_of;

// File validators
pub mod file;

// Time validators
pub mod date;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use length::{LengthRange, MaxLength, MinLength, length_range, max_length, min_length};
pub use password::{
    HasDigit, HasLowercase, HasSpecial, HasUppercase, MIN_PASSWORD_LENGTH, StrongPassword,
    has_digit, has_lowercase, has_special, has_uppercase, strong_password,
};
pub use pattern::{MatchesRegex, matches_regex};

pub use regional::{
    NationalId, Plate, TaxId, TrIban, TrPhone, national_id, national_id_checksum, plate,
    tax_id, tr_iban, tr_phone,
};

pub use currency::{Currency, currency, has_cent_precision};
pub use percentage::{Percentage, percentage};
pub use range::{InRange, Max, Min, in_range, max, min};

pub use size::{SizeRange, size_range};

pub use equals::{Equals, equals_value};
pub use one_of::{OneOf, one_of};

pub use file::{FileMeta, FileType, MaxFileSize, file_type, max_file_size};

pub use date::{
    Clock, DateString, Direction, FutureDate, PastDate, RelativeDate, date_string, future_date,
    past_date,
};
