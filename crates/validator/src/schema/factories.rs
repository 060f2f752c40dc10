//! Parametrized schema factories
//!
//! Each factory captures its parameters when called and returns a
//! [`Schema`]. Factories are total: bounds with `min > max` give a schema
//! that never validates. The `try_*` variants reject such bounds with
//! [`ConfigError::InvalidBounds`] instead.
//!
//! # Examples
//!
//! ```
//! use formkit_validator::schema::factories;
//! use formkit_validator::adapter::to_validator;
//! use serde_json::json;
//!
//! let validate = to_validator(&factories::range(0.0, 100.0));
//! assert_eq!(validate(&json!(50)), None);
//! assert_eq!(validate(&json!(150)).as_deref(), Some("Value must be at most 100"));
//! ```

use serde_json::Value;

use crate::config::ConfigError;
use crate::schema::Schema;
use crate::validators::{Equals, FileType, InRange, LengthRange, MaxFileSize, size_range};

/// Number in `min..=max`.
///
/// Fails below `min` with "Value must be at least {min}" and above `max`
/// with "Value must be at most {max}".
#[must_use]
pub fn range(min: f64, max: f64) -> Schema {
    Schema::number().refine(InRange::new(min, max))
}

/// Like [`range`], but rejects `min > max` and NaN bounds.
pub fn try_range(min: f64, max: f64) -> Result<Schema, ConfigError> {
    // partial_cmp is None for NaN
    if min.partial_cmp(&max).is_none_or(|ord| ord.is_gt()) {
        tracing::warn!(min, max, "rejected numeric range bounds");
        return Err(ConfigError::invalid_bounds(min, max));
    }
    Ok(range(min, max))
}

/// String whose character count is in `min..=max`.
#[must_use]
pub fn length_range(min: usize, max: usize) -> Schema {
    Schema::string().refine(LengthRange::new(min, max))
}

/// Like [`length_range`], but rejects `min > max`.
pub fn try_length_range(min: usize, max: usize) -> Result<Schema, ConfigError> {
    if min > max {
        tracing::warn!(min, max, "rejected length range bounds");
        return Err(ConfigError::invalid_bounds(min, max));
    }
    Ok(length_range(min, max))
}

/// Value equal to one of `values`.
///
/// Without `message` the error lists the allowed values.
#[must_use]
pub fn one_of<I, T>(values: I, message: Option<&str>) -> Schema
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let schema = Schema::union_of(values);
    match message {
        Some(message) => schema.message(message.to_owned()),
        None => schema,
    }
}

/// Array with at least `min` elements and, if given, at most `max`.
#[must_use]
pub fn array_length(min: usize, max: Option<usize>) -> Schema {
    Schema::array().refine(size_range::<Value>(min, max))
}

/// Like [`array_length`], but rejects `min > max`.
pub fn try_array_length(min: usize, max: Option<usize>) -> Result<Schema, ConfigError> {
    if let Some(max) = max.filter(|&max| min > max) {
        tracing::warn!(min, max, "rejected array length bounds");
        return Err(ConfigError::invalid_bounds(min, max));
    }
    Ok(array_length(min, max))
}

/// Value equal to whatever `provider` returns at validation time.
///
/// For password confirmation, pass an accessor for the other field's
/// current value.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, RwLock};
/// use formkit_validator::schema::factories::matches;
/// use serde_json::{json, Value};
///
/// let password = Arc::new(RwLock::new(Value::Null));
/// let current = Arc::clone(&password);
/// let confirm = matches(
///     move || current.read().map(|v| v.clone()).unwrap_or(Value::Null),
///     "Passwords do not match",
/// );
///
/// *password.write().unwrap() = json!("Secret1!");
/// assert!(confirm.validate(&json!("Secret1!")).is_ok());
/// assert!(confirm.validate(&json!("Secret2!")).is_err());
/// ```
#[must_use]
pub fn matches<P>(provider: P, message: impl Into<String>) -> Schema
where
    P: Fn() -> Value + Send + Sync + 'static,
{
    Schema::any().refine(Equals::new(provider, message))
}

/// Value equal to `expected`, fixed at construction.
#[must_use]
pub fn matches_value(expected: impl Into<Value>, message: impl Into<String>) -> Schema {
    let expected = expected.into();
    matches(move || expected.clone(), message)
}

/// File no larger than `max_bytes`; the message reports the limit in MB.
#[must_use]
pub fn file_size(max_bytes: u64) -> Schema {
    Schema::file().refine(MaxFileSize::new(max_bytes))
}

/// File whose MIME type is one of `allowed`.
#[must_use]
pub fn file_type<I, S>(allowed: I) -> Schema
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Schema::file().refine(FileType::new(allowed.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(schema: &Schema, value: Value) -> Option<String> {
        schema.validate(&value).err().map(|e| e.message.into_owned())
    }

    #[test]
    fn inverted_range_never_validates() {
        let schema = range(10.0, 1.0);
        for n in [0, 1, 5, 10, 11] {
            assert!(message(&schema, json!(n)).is_some(), "{n}");
        }
    }

    #[test]
    fn try_variants_reject_inverted_bounds() {
        assert!(matches!(
            try_range(10.0, 1.0),
            Err(ConfigError::InvalidBounds { .. })
        ));
        assert!(try_range(f64::NAN, 1.0).is_err());
        assert!(try_range(1.0, 1.0).is_ok());
        assert!(try_length_range(5, 2).is_err());
        assert!(try_array_length(3, Some(2)).is_err());
        assert!(try_array_length(3, None).is_ok());
    }

    #[test]
    fn length_counts_characters() {
        let schema = length_range(2, 3);
        assert_eq!(message(&schema, json!("çğü")), None);
        assert_eq!(
            message(&schema, json!("çğüö")).as_deref(),
            Some("Must be at most 3 characters")
        );
    }

    #[test]
    fn one_of_messages() {
        let schema = one_of(["draft", "published"], None);
        assert_eq!(
            message(&schema, json!("archived")).as_deref(),
            Some("Value must be one of: draft, published")
        );
        let schema = one_of(["draft"], Some("Only drafts"));
        assert_eq!(message(&schema, json!("x")).as_deref(), Some("Only drafts"));
        assert_eq!(message(&schema, json!("draft")), None);
    }

    #[test]
    fn array_length_bounds() {
        let schema = array_length(1, Some(2));
        assert_eq!(
            message(&schema, json!([])).as_deref(),
            Some("Must contain at least 1 items")
        );
        assert_eq!(message(&schema, json!([1, 2])), None);
        assert!(message(&schema, json!([1, 2, 3])).is_some());
        assert!(message(&array_length(0, None), json!(vec![0; 500])).is_none());
    }

    #[test]
    fn matches_value_literal() {
        let schema = matches_value("abc", "Must match");
        assert_eq!(message(&schema, json!("abc")), None);
        assert_eq!(message(&schema, json!("abd")).as_deref(), Some("Must match"));
    }

    #[test]
    fn file_factories() {
        let size = file_size(2 * 1024 * 1024);
        assert_eq!(message(&size, json!({"size": 1024, "type": "image/png"})), None);
        assert_eq!(
            message(&size, json!({"size": 3_000_000, "type": "image/png"})).as_deref(),
            Some("File size must not exceed 2 MB")
        );
        assert_eq!(
            message(&size, json!("photo.png")).as_deref(),
            Some("Expected file")
        );

        let kind = file_type(["application/pdf"]);
        assert_eq!(message(&kind, json!({"size": 1, "type": "application/pdf"})), None);
        assert!(message(&kind, json!({"size": 1, "type": "text/plain"})).is_some());
    }
}
