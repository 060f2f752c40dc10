//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`AsValidatable`]
//! - **Errors**: [`ValidationError`]
//!
//! Typed validators implement [`Validate`] over one input type and compose
//! with the combinators on [`ValidateExt`]. [`Schema`](crate::schema::Schema)
//! lifts them onto raw `serde_json::Value` input through [`AsValidatable`].
//!
//! # Examples
//!
//! ```
//! use formkit_validator::foundation::{Validate, ValidateExt};
//! use formkit_validator::validators::{min_length, max_length};
//!
//! let validator = min_length(5).and(max_length(20));
//! assert!(validator.validate("hello").is_ok());
//! assert!(validator.validate("hi").is_err());
//! ```

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
pub use validatable::{AsValidatable, coerce_datetime, json_kind};
