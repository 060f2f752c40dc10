//! Multi-field form validation
//!
//! A [`Form`] validates a JSON object field by field and collects the first
//! message per field. Cross-field rules compare one field with another
//! field's value from the same submission, which is how password
//! confirmation is expressed without shared state.
//!
//! ```
//! use formkit_validator::form::Form;
//! use formkit_validator::schema::presets;
//! use serde_json::json;
//!
//! let form = Form::new()
//!     .field("password", presets::strong_password())
//!     .field_matches("password_confirm", "password", "Passwords do not match");
//!
//! let errors = form.validate(&json!({
//!     "password": "Secret1!",
//!     "password_confirm": "Secret2!",
//! }));
//! assert_eq!(errors["password_confirm"], "Passwords do not match");
//! assert!(!errors.contains_key("password"));
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::Value;

use crate::foundation::ValidationError;
use crate::schema::Schema;

#[derive(Debug, Clone)]
struct MatchRule {
    field: String,
    other: String,
    message: Cow<'static, str>,
}

/// Named field schemas plus cross-field equality rules.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<(String, Schema)>,
    rules: Vec<MatchRule>,
}

impl Form {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field. Fields are validated in registration order.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.fields.push((name.into(), schema));
        self
    }

    /// Requires `field` to equal `other` in the same submission.
    ///
    /// Runs after the field's own schema and only if that passed.
    #[must_use = "builder methods must be chained or built"]
    pub fn field_matches(
        mut self,
        field: impl Into<String>,
        other: impl Into<String>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.rules.push(MatchRule {
            field: field.into(),
            other: other.into(),
            message: message.into(),
        });
        self
    }

    /// Field names in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Validates a submission and returns `field -> message` for every
    /// failing field. A missing field is validated as `null`; a submission
    /// that is not an object has every field missing.
    pub fn validate(&self, values: &Value) -> BTreeMap<String, String> {
        self.errors(values)
            .into_iter()
            .filter_map(|error| {
                let field = error.field?.into_owned();
                Some((field, error.message.into_owned()))
            })
            .collect()
    }

    /// Like [`validate`](Self::validate), but keeps the full errors with
    /// [`field`](ValidationError::field) set, in registration order.
    pub fn errors(&self, values: &Value) -> Vec<ValidationError> {
        let mut errors: Vec<ValidationError> = Vec::new();

        for (name, schema) in &self.fields {
            if let Err(error) = schema.validate(lookup(values, name)) {
                tracing::debug!(field = %name, code = %error.code, "form field failed");
                errors.push(error.with_field(name.clone()));
            }
        }

        for rule in &self.rules {
            let failed = errors
                .iter()
                .any(|e| e.field.as_deref() == Some(rule.field.as_str()));
            if failed {
                continue;
            }
            if lookup(values, &rule.field) != lookup(values, &rule.other) {
                tracing::debug!(field = %rule.field, other = %rule.other, "form fields differ");
                errors.push(
                    ValidationError::new("mismatch", rule.message.clone())
                        .with_field(rule.field.clone())
                        .with_param("other", rule.other.clone()),
                );
            }
        }

        errors
    }

    pub fn is_valid(&self, values: &Value) -> bool {
        self.validate(values).is_empty()
    }
}

static NULL: Value = Value::Null;

fn lookup<'v>(values: &'v Value, name: &str) -> &'v Value {
    values.get(name).unwrap_or(&NULL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{factories, presets};
    use serde_json::json;

    fn signup() -> Form {
        Form::new()
            .field("national_id", presets::national_id())
            .field("age", factories::range(18.0, 120.0))
            .field("password", presets::strong_password())
            .field_matches("password_confirm", "password", "Passwords do not match")
    }

    #[test]
    fn valid_submission() {
        let values = json!({
            "national_id": "10000000146",
            "age": 30,
            "password": "Secret1!",
            "password_confirm": "Secret1!",
        });
        assert!(signup().is_valid(&values));
    }

    #[test]
    fn collects_one_message_per_field() {
        let errors = signup().validate(&json!({
            "national_id": "10000000147",
            "age": 12,
            "password": "Secret1!",
        }));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors["national_id"], "Invalid national ID number");
        assert_eq!(errors["age"], "Value must be at least 18");
        assert_eq!(errors["password_confirm"], "Passwords do not match");
    }

    #[test]
    fn missing_fields_are_null() {
        let errors = signup().validate(&json!([]));
        assert_eq!(errors["national_id"], "This field is required");
        assert_eq!(errors["age"], "This field is required");
        // both sides missing: equal
        assert!(!errors.contains_key("password_confirm"));
    }

    #[test]
    fn match_rule_skipped_when_field_already_failed() {
        let form = Form::new()
            .field("confirm", Schema::string())
            .field_matches("confirm", "password", "Mismatch");
        let errors = form.validate(&json!({ "confirm": 1, "password": "x" }));
        assert_eq!(errors["confirm"], "Expected string");
    }

    #[test]
    fn detailed_errors_carry_field_names() {
        let errors = signup().errors(&json!({ "age": 5 }));
        let fields: Vec<_> = errors.iter().filter_map(|e| e.field.as_deref()).collect();
        assert_eq!(fields, ["national_id", "age", "password"]);
        assert_eq!(errors[1].code, "min");
    }

    #[test]
    fn field_names_in_order() {
        let form = signup();
        let names: Vec<_> = form.field_names().collect();
        assert_eq!(names, ["national_id", "age", "password"]);
    }
}
