//! Equality against a value supplied at validation time.
//!
//! Password confirmation compares against whatever the other field holds
//! *now*, not when the schema was built. [`Equals`] therefore stores a
//! provider closure and calls it on every validation.

use std::fmt;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

/// Validates that the input equals the value returned by a provider.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, RwLock};
/// use formkit_validator::validators::Equals;
/// use formkit_validator::foundation::Validate;
/// use serde_json::{json, Value};
///
/// let password = Arc::new(RwLock::new(json!("Secret1!")));
/// let source = Arc::clone(&password);
/// let confirm = Equals::new(
///     move || source.read().map(|v| v.clone()).unwrap_or(Value::Null),
///     "Passwords do not match",
/// );
///
/// assert!(confirm.validate(&json!("Secret1!")).is_ok());
/// *password.write().unwrap() = json!("Changed2?");
/// assert!(confirm.validate(&json!("Secret1!")).is_err());
/// ```
#[derive(Clone)]
pub struct Equals<P> {
    provider: P,
    message: String,
}

impl<P> Equals<P>
where
    P: Fn() -> Value,
{
    /// Creates a validator comparing against `provider()` on each call.
    pub fn new(provider: P, message: impl Into<String>) -> Self {
        Self {
            provider,
            message: message.into(),
        }
    }
}

impl<P> fmt::Debug for Equals<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Equals")
            .field("provider", &"<function>")
            .field("message", &self.message)
            .finish()
    }
}

impl<P> Validate for Equals<P>
where
    P: Fn() -> Value,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if *input == (self.provider)() {
            Ok(())
        } else {
            Err(ValidationError::new("mismatch", self.message.clone()))
        }
    }
}

/// Creates an [`Equals`] validator against a fixed value.
pub fn equals_value(
    expected: Value,
    message: impl Into<String>,
) -> Equals<impl Fn() -> Value + Clone + Send + Sync + 'static> {
    Equals::new(move || expected.clone(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[test]
    fn fixed_value() {
        let validator = equals_value(json!("abc"), "Must match");
        assert!(validator.validate(&json!("abc")).is_ok());
        let err = validator.validate(&json!("abd")).unwrap_err();
        assert_eq!(err.code, "mismatch");
        assert_eq!(err.message, "Must match");
    }

    #[test]
    fn provider_is_read_per_call() {
        let counter = Arc::new(AtomicU64::new(0));
        let source = Arc::clone(&counter);
        let validator = Equals::new(move || json!(source.load(Ordering::SeqCst)), "stale");

        assert!(validator.validate(&json!(0)).is_ok());
        counter.store(7, Ordering::SeqCst);
        assert!(validator.validate(&json!(0)).is_err());
        assert!(validator.validate(&json!(7)).is_ok());
    }
}
