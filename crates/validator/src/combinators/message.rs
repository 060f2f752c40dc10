//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a validator.
///
/// The original error is kept as a nested error so its code and params are
/// still reachable. Presets use this to apply messages from a
/// [`MessageCatalog`](crate::config::MessageCatalog).
///
/// # Examples
///
/// ```
/// use formkit_validator::combinators::WithMessage;
/// use formkit_validator::foundation::Validate;
/// use formkit_validator::validators::TaxId;
///
/// let validator = WithMessage::new(TaxId, "Vergi numarası 10 haneli olmalıdır");
/// let error = validator.validate("123").unwrap_err();
/// assert_eq!(error.message, "Vergi numarası 10 haneli olmalıdır");
/// assert_eq!(error.code, "tax_id");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
    code: Option<String>,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let code = self
                .code
                .clone()
                .map_or_else(|| original.code.clone(), Cow::Owned);

            ValidationError {
                code,
                message: Cow::Owned(self.message.clone()),
                field: original.field.clone(),
                params: original.params.clone(),
                nested: Vec::new(),
            }
            .with_nested_error(original)
        })
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::min_length;

    #[test]
    fn test_with_message_success() {
        let validator = WithMessage::new(min_length(3), "Custom message");
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn test_with_message_replaces_message() {
        let error = WithMessage::new(min_length(10), "Password too short")
            .validate("short")
            .unwrap_err();

        assert_eq!(error.message, "Password too short");
        assert_eq!(error.code, "min_length");
        assert_eq!(error.param("min"), Some("10"));
    }

    #[test]
    fn test_with_message_and_code() {
        let error = with_message(min_length(10), "Password too short")
            .with_code("password_length")
            .validate("short")
            .unwrap_err();

        assert_eq!(error.code, "password_length");
    }

    #[test]
    fn test_nested_error_preserved() {
        let error = WithMessage::new(min_length(10), "Custom")
            .validate("short")
            .unwrap_err();

        assert_eq!(error.nested.len(), 1);
        assert_eq!(error.nested[0].code, "min_length");
    }
}
