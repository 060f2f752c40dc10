//! Allowed-value set validators

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

/// Renders a JSON value for a message: strings without quotes, everything
/// else in JSON notation.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Validates that a value equals one of a fixed set of literals.
///
/// A set with a single literal is an equality check. An empty set accepts
/// nothing.
///
/// # Examples
///
/// ```
/// use formkit_validator::validators::OneOf;
/// use formkit_validator::foundation::Validate;
/// use serde_json::json;
///
/// let role = OneOf::new(vec![json!("admin"), json!("editor")]);
/// assert!(role.validate(&json!("admin")).is_ok());
/// assert_eq!(
///     role.validate(&json!("guest")).unwrap_err().message,
///     "Value must be one of: admin, editor"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    allowed: Vec<Value>,
    message: Option<String>,
}

impl OneOf {
    /// Creates a validator over `allowed` with the default message.
    #[must_use]
    pub fn new(allowed: Vec<Value>) -> Self {
        Self {
            allowed,
            message: None,
        }
    }

    /// Uses `message` instead of the default listing of allowed values.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The allowed literals, in registration order.
    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }

    fn default_message(&self) -> String {
        let listed: Vec<String> = self.allowed.iter().map(display_value).collect();
        format!("Value must be one of: {}", listed.join(", "))
    }
}

impl Validate for OneOf {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if self.allowed.contains(input) {
            return Ok(());
        }
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| self.default_message());
        Err(ValidationError::new("one_of", message).with_param("actual", display_value(input)))
    }
}

/// Creates a [`OneOf`] validator from anything convertible to JSON values.
#[must_use]
pub fn one_of<I, T>(allowed: I) -> OneOf
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    OneOf::new(allowed.into_iter().map(Into::into).collect())
}
