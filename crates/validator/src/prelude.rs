//! Prelude module for convenient imports.
//!
//! Provides a single `use formkit_validator::prelude::*;` import that brings
//! in the traits, validators, combinators and the schema surface.
//!
//! Preset and factory functions stay behind their module names
//! (`presets::iban()`, `factories::range(..)`) because several share a name
//! with a typed validator factory.

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{AsValidatable, Validate, ValidateExt, ValidationError};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, Optional, Preprocess, Refine, WithMessage, and, optional, preprocess, refine,
    with_message,
};

// ============================================================================
// SCHEMA: Dynamic values, presets, factories, adapter
// ============================================================================

pub use crate::adapter::{ValidationOutcome, to_validator};
pub use crate::config::{ConfigError, MessageCatalog};
pub use crate::form::Form;
pub use crate::schema::{Presets, Schema, SchemaKind, factories, presets};
