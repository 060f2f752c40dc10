//! Schema to form-validator adapter
//!
//! Form layers want one callable per field that takes the raw value and
//! returns the message to display, or nothing. [`to_validator`] is that
//! boundary.
//!
//! ```
//! use formkit_validator::adapter::to_validator;
//! use formkit_validator::schema::presets;
//! use serde_json::json;
//!
//! let validate = to_validator(&presets::phone_number());
//! assert_eq!(validate(&json!("05551234567")), None);
//! assert_eq!(validate(&json!("555")).as_deref(), Some("Invalid phone number"));
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::foundation::ValidationError;
use crate::schema::Schema;

/// Result of validating one value: valid, or exactly one message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    Invalid(String),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }

    pub fn into_message(self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

impl From<Result<(), ValidationError>> for ValidationOutcome {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(error) => Self::Invalid(error.message.into_owned()),
        }
    }
}

impl From<ValidationOutcome> for Option<String> {
    fn from(outcome: ValidationOutcome) -> Self {
        outcome.into_message()
    }
}

/// Turns a schema into a `value -> message` function.
///
/// The returned closure owns a clone of the schema, runs preprocessing, the
/// kind check and the refinements in order, and returns `None` on success
/// or the message of the first failing step.
pub fn to_validator(
    schema: &Schema,
) -> impl Fn(&Value) -> Option<String> + Clone + Send + Sync + 'static + use<> {
    let schema = schema.clone();
    move |value: &Value| {
        schema
            .validate(value)
            .err()
            .map(|error| error.message.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn outcome_from_result() {
        assert_eq!(ValidationOutcome::from(Ok(())), ValidationOutcome::Valid);
        let outcome = ValidationOutcome::from(Err(ValidationError::new("x", "broken")));
        assert_eq!(outcome.message(), Some("broken"));
        assert!(!outcome.is_valid());
        assert_eq!(Option::<String>::from(outcome), Some("broken".to_string()));
    }

    #[test]
    fn outcome_serializes_tagged() {
        let json = serde_json::to_value(ValidationOutcome::Invalid("bad".into())).unwrap();
        assert_eq!(json, json!({"status": "invalid", "message": "bad"}));
        let json = serde_json::to_value(ValidationOutcome::Valid).unwrap();
        assert_eq!(json, json!({"status": "valid"}));
    }

    #[test]
    fn validator_outlives_schema() {
        let validate = {
            let schema = Schema::string().check(|v| v != "", "Empty");
            to_validator(&schema)
        };
        assert_eq!(validate(&json!("")).as_deref(), Some("Empty"));
        assert_eq!(validate(&json!("x")), None);
    }

    #[test]
    fn validator_is_shareable_across_threads() {
        let schema = Schema::number().check(|v| v.as_f64() < Some(10.0), "Too big");
        let validate = to_validator(&schema);
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let validate = validate.clone();
                std::thread::spawn(move || validate(&json!(i * 5)))
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![None, None, Some("Too big".into()), Some("Too big".into())]);
    }
}
