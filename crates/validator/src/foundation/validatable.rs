//! AsValidatable trait with GAT for universal type conversion
//!
//! Validators declare one `Input` type. `AsValidatable` lets a validator run
//! against anything convertible to that input, most importantly the raw
//! `serde_json::Value` handed to schemas by form layers. Conversions that do
//! not apply (a number where a string is expected, an unparsable date)
//! return a `type_mismatch` / `invalid_date` error instead of panicking.

use std::borrow::Borrow;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::foundation::ValidationError;
use crate::validators::file::FileMeta;

// ============================================================================
// CORE TRAIT: AsValidatable with GAT
// ============================================================================

/// Trait for types that can be converted for validation.
///
/// Uses a GAT so the conversion can return either a borrowed reference or
/// an owned value, unified through `Borrow`.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

// ============================================================================
// REFLEXIVE IMPLEMENTATIONS
// ============================================================================

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<f64> for f64 {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        Ok(*self)
    }
}

impl<T> AsValidatable<[T]> for Vec<T> {
    type Output<'a>
        = &'a [T]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[T], ValidationError> {
        Ok(self.as_slice())
    }
}

impl AsValidatable<DateTime<Utc>> for DateTime<Utc> {
    type Output<'a> = DateTime<Utc>;

    #[inline]
    fn as_validatable(&self) -> Result<DateTime<Utc>, ValidationError> {
        Ok(*self)
    }
}

impl AsValidatable<FileMeta> for FileMeta {
    type Output<'a> = &'a FileMeta;

    #[inline]
    fn as_validatable(&self) -> Result<&FileMeta, ValidationError> {
        Ok(self)
    }
}

// ============================================================================
// JSON CONVERSIONS
// ============================================================================

/// Returns the JSON type name used in `type_mismatch` errors.
#[must_use]
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl AsValidatable<Value> for Value {
    type Output<'a> = &'a Value;

    #[inline]
    fn as_validatable(&self) -> Result<&Value, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for Value {
    type Output<'a> = &'a str;

    fn as_validatable(&self) -> Result<&str, ValidationError> {
        self.as_str()
            .ok_or_else(|| ValidationError::type_mismatch("string", json_kind(self)))
    }
}

impl AsValidatable<f64> for Value {
    type Output<'a> = f64;

    fn as_validatable(&self) -> Result<f64, ValidationError> {
        self.as_f64()
            .filter(|n| n.is_finite())
            .ok_or_else(|| ValidationError::type_mismatch("number", json_kind(self)))
    }
}

impl AsValidatable<[Value]> for Value {
    type Output<'a> = &'a [Value];

    fn as_validatable(&self) -> Result<&[Value], ValidationError> {
        self.as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| ValidationError::type_mismatch("array", json_kind(self)))
    }
}

impl AsValidatable<FileMeta> for Value {
    type Output<'a> = FileMeta;

    fn as_validatable(&self) -> Result<FileMeta, ValidationError> {
        let size = self.get("size").and_then(Value::as_u64);
        let mime = self.get("type").and_then(Value::as_str);
        match (size, mime) {
            (Some(size), Some(mime)) => Ok(FileMeta::new(size, mime)),
            _ => Err(ValidationError::type_mismatch("file", json_kind(self))),
        }
    }
}

impl AsValidatable<DateTime<Utc>> for Value {
    type Output<'a> = DateTime<Utc>;

    fn as_validatable(&self) -> Result<DateTime<Utc>, ValidationError> {
        coerce_datetime(self).ok_or_else(|| {
            ValidationError::new("invalid_date", "Invalid date")
                .with_param("actual", json_kind(self))
        })
    }
}

/// Largest absolute epoch offset in milliseconds a date may carry (100 million days).
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Coerces a raw value into a UTC timestamp.
///
/// Accepts RFC 3339 strings, `YYYY-MM-DD` strings (midnight UTC) and
/// numbers as Unix epoch milliseconds. Fractional milliseconds are truncated
/// toward zero; offsets beyond ±8.64e15 ms are rejected.
#[must_use]
pub fn coerce_datetime(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_date_str(s.trim()),
        Value::Number(n) => epoch_millis(n)
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

fn epoch_millis(n: &serde_json::Number) -> Option<i64> {
    if let Some(millis) = n.as_i64() {
        return (millis.unsigned_abs() as f64 <= MAX_EPOCH_MILLIS).then_some(millis);
    }
    n.as_f64()
        .filter(|millis| millis.is_finite() && millis.abs() <= MAX_EPOCH_MILLIS)
        .map(|millis| millis.trunc() as i64)
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
