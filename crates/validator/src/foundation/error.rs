//! Error types for validation failures
//!
//! A [`ValidationError`] is an expected, representable outcome: invalid
//! input never panics and never becomes a configuration error. All string
//! fields use `Cow<'static, str>` so static codes and messages do not
//! allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// The adapter layer only surfaces [`message`](Self::message); `code` and
/// `params` are kept for callers that want to branch on the failure kind
/// or re-render the message themselves.
///
/// # Examples
///
/// ```
/// use formkit_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min", "Value must be at least 0")
///     .with_param("min", "0")
///     .with_param("actual", "-1");
///
/// assert_eq!(error.param("min"), Some("0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "national_id", "min", "type_mismatch"
    pub code: Cow<'static, str>,

    /// Human-readable message shown to the end user.
    pub message: Cow<'static, str>,

    /// Field name, set by [`Form`](crate::form::Form) validation.
    pub field: Option<Cow<'static, str>>,

    /// Message parameters as ordered key-value pairs (typically 0-3).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Errors this one replaced or wraps, e.g. under a custom message.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Replaces the message, keeping code and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// Creates a "min_length" error. Lengths are character counts.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error. Lengths are character counts.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error with a caller-supplied message.
    pub fn invalid_format(
        expected: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("invalid_format", message).with_param("expected", expected)
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        let expected = expected.into();
        Self::new("type_mismatch", format!("Expected {expected}"))
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_field_and_params() {
        let error = ValidationError::new("min", "too small")
            .with_field("age")
            .with_param("min", "18");
        assert_eq!(error.to_string(), "[age] min: too small (params: [min=18])");
    }

    #[test]
    fn type_mismatch_names_expected_kind() {
        let error = ValidationError::type_mismatch("string", "number");
        assert_eq!(error.code, "type_mismatch");
        assert_eq!(error.message, "Expected string");
        assert_eq!(error.param("actual"), Some("number"));
    }

    #[test]
    fn with_message_keeps_code() {
        let error = ValidationError::min_length(8, 3).with_message("Password is too short");
        assert_eq!(error.code, "min_length");
        assert_eq!(error.message, "Password is too short");
        assert_eq!(error.param("actual"), Some("3"));
    }
}
