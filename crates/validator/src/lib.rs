//! # formkit-validator
//!
//! A framework-free validation core for form fields carrying Turkish
//! regional formats: national ID numbers, tax IDs, phone numbers, IBANs,
//! plates, currency amounts, percentages, passwords and dates.
//!
//! ## Quick Start
//!
//! ```
//! use formkit_validator::prelude::*;
//! use serde_json::json;
//!
//! // Ready-made schemas
//! let validate = to_validator(&presets::iban());
//! assert_eq!(validate(&json!("tr330006100519786457841326")), None);
//! assert_eq!(validate(&json!("TR12345")).as_deref(), Some("Invalid IBAN"));
//!
//! // Factories
//! let age = to_validator(&factories::range(18.0, 120.0));
//! assert_eq!(age(&json!(17)).as_deref(), Some("Value must be at least 18"));
//!
//! // Typed validators compose with .and()
//! let username = min_length(3).and(max_length(20));
//! assert!(username.validate("alice").is_ok());
//! ```
//!
//! ## Layers
//!
//! - [`validators`]: typed checkers implementing [`Validate`](foundation::Validate)
//! - [`combinators`]: `and`, `optional`, `with_message`, `preprocess`, `refine`
//! - [`schema`]: [`Schema`](schema::Schema) over raw `serde_json::Value`,
//!   plus [`presets`](schema::presets) and [`factories`](schema::factories)
//! - [`adapter`]: [`to_validator`](adapter::to_validator), the boundary to form layers
//! - [`form`]: multi-field validation with cross-field rules
//!
//! Use the [`validator!`] macro for new typed validators, or implement
//! [`Validate`](foundation::Validate) by hand.

// ValidationError is the error type of every validation call; boxing it
// would add an allocation to each failure.
#![allow(clippy::result_large_err)]
// Nested combinators (And<WithMessage<..>, ..>) produce long types.
#![allow(clippy::type_complexity)]

#[macro_use]
mod macros;

pub mod adapter;
pub mod combinators;
pub mod config;
pub mod form;
pub mod foundation;
pub mod prelude;
pub mod schema;
pub mod validators;
