//! Schemas over raw values
//!
//! A [`Schema`] validates a `serde_json::Value`, the shape in which form
//! layers hand over field values. It is an immutable list of steps:
//!
//! 1. preprocessing transforms, in registration order
//! 2. the optional short-circuit: `null` passes an optional schema
//! 3. the kind check (string, number, date, ...)
//! 4. refinements, in registration order
//!
//! Evaluation stops at the first failure. Every builder method returns a new
//! schema; refinements are shared through `Arc`, so extending a schema never
//! changes the one it was built from.
//!
//! # Examples
//!
//! ```
//! use formkit_validator::schema::Schema;
//! use formkit_validator::validators::{min_length, NationalId};
//! use serde_json::json;
//!
//! let id = Schema::string().refine(NationalId);
//! assert!(id.validate(&json!("10000000146")).is_ok());
//! assert!(id.validate(&json!(10000000146_u64)).is_err());
//!
//! let name = Schema::string()
//!     .preprocess_str(|s| s.trim().to_string())
//!     .refine(min_length(2));
//! assert_eq!(name.parse(&json!("  Ada ")).unwrap(), json!("Ada"));
//! ```

pub mod factories;
pub mod presets;

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::adapter::ValidationOutcome;
use crate::foundation::{AsValidatable, Validate, ValidationError, coerce_datetime, json_kind};
use crate::validators::{FileMeta, OneOf};

pub use presets::Presets;

/// One refinement step over a raw value.
pub type Step = Arc<dyn Fn(&Value) -> Result<(), ValidationError> + Send + Sync>;

/// A preprocessing transform over a raw value.
pub type Transform = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// The primitive kind a schema expects after preprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    /// A JSON string.
    String,
    /// A finite JSON number.
    Number,
    /// Anything [`coerce_datetime`] accepts.
    Date,
    /// A file metadata object with `size` and `type`.
    File,
    /// A JSON array.
    Array,
    /// One of a fixed set of literals.
    Union,
    /// Any value, including `null`.
    Any,
}

impl SchemaKind {
    /// Name used in `type_mismatch` errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Date => "date",
            Self::File => "file",
            Self::Array => "array",
            Self::Union => "union",
            Self::Any => "any",
        }
    }

    fn accepts_null(self) -> bool {
        matches!(self, Self::Union | Self::Any)
    }

    fn check(self, value: &Value) -> Result<(), ValidationError> {
        let ok = match self {
            Self::String => value.is_string(),
            Self::Number => value.as_f64().is_some_and(f64::is_finite),
            Self::Date => coerce_datetime(value).is_some(),
            Self::File => AsValidatable::<FileMeta>::as_validatable(value).is_ok(),
            Self::Array => value.is_array(),
            Self::Union | Self::Any => true,
        };
        if ok {
            Ok(())
        } else if self == Self::Date {
            Err(ValidationError::new("invalid_date", "Invalid date")
                .with_param("actual", json_kind(value)))
        } else {
            Err(ValidationError::type_mismatch(self.name(), json_kind(value)))
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// An immutable validation rule over raw values.
///
/// Cloning is cheap: steps and transforms are reference counted.
#[derive(Clone)]
pub struct Schema {
    kind: SchemaKind,
    optional: bool,
    transforms: Vec<Transform>,
    steps: Vec<Step>,
    kind_message: Option<Cow<'static, str>>,
    required_message: Option<Cow<'static, str>>,
}

impl Schema {
    /// Creates an empty schema of the given kind.
    #[must_use]
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            optional: false,
            transforms: Vec::new(),
            steps: Vec::new(),
            kind_message: None,
            required_message: None,
        }
    }

    #[must_use]
    pub fn string() -> Self {
        Self::new(SchemaKind::String)
    }

    #[must_use]
    pub fn number() -> Self {
        Self::new(SchemaKind::Number)
    }

    /// A schema whose values must coerce to a date: RFC 3339 or
    /// `YYYY-MM-DD` strings, or epoch milliseconds.
    #[must_use]
    pub fn date() -> Self {
        Self::new(SchemaKind::Date)
    }

    /// A schema over file metadata (`{"size": .., "type": ..}`).
    #[must_use]
    pub fn file() -> Self {
        Self::new(SchemaKind::File)
    }

    #[must_use]
    pub fn array() -> Self {
        Self::new(SchemaKind::Array)
    }

    /// A schema that accepts every value until refined.
    #[must_use]
    pub fn any() -> Self {
        Self::new(SchemaKind::Any)
    }

    /// A union of literals: the value must equal one of `values`.
    ///
    /// A single literal gives an equality schema; an empty set accepts
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::schema::Schema;
    /// use serde_json::json;
    ///
    /// let currency = Schema::union_of(["TRY"]);
    /// assert!(currency.validate(&json!("TRY")).is_ok());
    /// assert!(currency.validate(&json!("EUR")).is_err());
    /// ```
    #[must_use]
    pub fn union_of<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let allowed = values.into_iter().map(Into::into).collect();
        Self::new(SchemaKind::Union).refine(OneOf::new(allowed))
    }

    /// The kind checked before refinements run.
    pub fn kind(&self) -> SchemaKind {
        self.kind
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Number of registered refinements.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    // ------------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------------

    /// Appends a typed validator.
    ///
    /// The raw value is converted to the validator's input type first; a
    /// value that cannot be converted fails with `type_mismatch`.
    #[must_use = "builder methods return a new schema"]
    pub fn refine<V>(self, validator: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
        Value: AsValidatable<V::Input>,
        for<'a> <Value as AsValidatable<V::Input>>::Output<'a>: Borrow<V::Input>,
    {
        self.step(Arc::new(move |value: &Value| validator.validate_any(value)))
    }

    /// Appends a predicate over the raw value with a failure message.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::schema::Schema;
    /// use serde_json::json;
    ///
    /// let even = Schema::number().check(|v| v.as_i64().is_some_and(|n| n % 2 == 0), "Must be even");
    /// assert_eq!(even.validate(&json!(3)).unwrap_err().message, "Must be even");
    /// ```
    #[must_use = "builder methods return a new schema"]
    pub fn check<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.step(Arc::new(move |value: &Value| {
            if predicate(value) {
                Ok(())
            } else {
                Err(ValidationError::custom(message.clone()))
            }
        }))
    }

    /// Appends a raw refinement step.
    #[must_use = "builder methods return a new schema"]
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Adds a transform applied before the kind check and all refinements.
    ///
    /// Transforms run in registration order, each on the previous output.
    #[must_use = "builder methods return a new schema"]
    pub fn preprocess<F>(mut self, transform: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.transforms.push(Arc::new(transform));
        self
    }

    /// Adds a transform over string values; other values pass through.
    #[must_use = "builder methods return a new schema"]
    pub fn preprocess_str<F>(self, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.preprocess(move |value: &Value| match value {
            Value::String(s) => Value::String(transform(s)),
            other => other.clone(),
        })
    }

    /// Lets `null` pass without running the kind check or refinements.
    #[must_use = "builder methods return a new schema"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Overrides the message of the most recently registered refinement.
    ///
    /// Without refinements, overrides the kind-check message instead. The
    /// error code and params are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::schema::Schema;
    /// use formkit_validator::validators::min_length;
    /// use serde_json::json;
    ///
    /// let name = Schema::string()
    ///     .message("Name must be text")
    ///     .refine(min_length(2))
    ///     .message("Name is too short");
    /// assert_eq!(name.validate(&json!(1)).unwrap_err().message, "Name must be text");
    /// assert_eq!(name.validate(&json!("A")).unwrap_err().message, "Name is too short");
    /// ```
    #[must_use = "builder methods return a new schema"]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        match self.steps.pop() {
            Some(inner) => {
                self.steps.push(Arc::new(move |value: &Value| {
                    inner(value).map_err(|e| e.with_message(message.clone()))
                }));
            }
            None => self.kind_message = Some(message),
        }
        self
    }

    /// Message reported when a required value is `null`.
    ///
    /// Defaults to "This field is required".
    #[must_use = "builder methods return a new schema"]
    pub fn required_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.required_message = Some(message.into());
        self
    }

    // ------------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------------

    /// Applies the preprocessing transforms without validating.
    pub fn prepare<'v>(&self, value: &'v Value) -> Cow<'v, Value> {
        self.transforms
            .iter()
            .fold(Cow::Borrowed(value), |acc, transform| {
                Cow::Owned(transform(&*acc))
            })
    }

    /// Validates a value and returns it after preprocessing.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error.
    pub fn parse(&self, value: &Value) -> Result<Value, ValidationError> {
        let prepared = self.prepare(value);
        self.run(&prepared)?;
        Ok(prepared.into_owned())
    }

    /// Validates a value: preprocessing, then every step in order.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.run(&self.prepare(value))
    }

    /// Validates a value and reduces the result to an outcome.
    pub fn outcome(&self, value: &Value) -> ValidationOutcome {
        ValidationOutcome::from(self.validate(value))
    }

    fn run(&self, value: &Value) -> Result<(), ValidationError> {
        tracing::trace!(kind = %self.kind, steps = self.steps.len(), "validating value");

        if value.is_null() {
            if self.optional {
                return Ok(());
            }
            if !self.kind.accepts_null() {
                let message = self
                    .required_message
                    .clone()
                    .unwrap_or(Cow::Borrowed("This field is required"));
                return Err(ValidationError::required().with_message(message));
            }
        }

        self.kind.check(value).map_err(|err| {
            tracing::debug!(code = %err.code, kind = %self.kind, "kind check failed");
            match &self.kind_message {
                Some(message) => err.with_message(message.clone()),
                None => err,
            }
        })?;

        for (index, step) in self.steps.iter().enumerate() {
            step(value).inspect_err(|err| {
                tracing::debug!(code = %err.code, kind = %self.kind, index, "refinement failed");
            })?;
        }
        Ok(())
    }
}

impl Validate for Schema {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        Schema::validate(self, input)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("kind", &self.kind)
            .field("optional", &self.optional)
            .field("transforms", &self.transforms.len())
            .field("steps", &self.steps.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::refine;
    use crate::validators::{NationalId, TrIban, min_length};
    use serde_json::json;

    #[test]
    fn kind_mismatch_is_reported_before_refinements() {
        let schema = Schema::string().refine(min_length(3));
        let err = schema.validate(&json!(12)).unwrap_err();
        assert_eq!(err.code, "type_mismatch");
        assert_eq!(err.message, "Expected string");
    }

    #[test]
    fn null_is_required_unless_optional() {
        let schema = Schema::string().refine(min_length(3));
        assert_eq!(schema.validate(&Value::Null).unwrap_err().code, "required");
        assert!(schema.clone().optional().validate(&Value::Null).is_ok());
        assert!(schema.optional().validate(&json!("ab")).is_err());
    }

    #[test]
    fn preprocess_runs_before_null_check() {
        let blank_to_null = |v: &Value| match v.as_str().map(str::trim) {
            Some("") => Value::Null,
            _ => v.clone(),
        };
        let schema = Schema::string().refine(min_length(3)).preprocess(blank_to_null);
        assert_eq!(schema.validate(&json!("   ")).unwrap_err().code, "required");
        assert!(schema.clone().optional().validate(&json!("   ")).is_ok());
        assert!(schema.optional().validate(&json!("abc")).is_ok());
    }

    #[test]
    fn required_message_override() {
        let schema = Schema::number().required_message("Zorunlu alan");
        assert_eq!(schema.validate(&Value::Null).unwrap_err().message, "Zorunlu alan");
    }

    #[test]
    fn first_failure_wins() {
        let schema = Schema::string()
            .check(|_| false, "first")
            .check(|_| false, "second");
        assert_eq!(schema.validate(&json!("x")).unwrap_err().message, "first");
    }

    #[test]
    fn extending_does_not_change_the_base() {
        let base = Schema::string().refine(min_length(2));
        let extended = base.clone().check(|v| v != "no", "not no");
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert!(base.validate(&json!("no")).is_ok());
        assert!(extended.validate(&json!("no")).is_err());
    }

    #[test]
    fn preprocess_runs_before_kind_check() {
        let schema = Schema::string().preprocess(|v| match v {
            Value::Number(n) => Value::String(n.to_string()),
            other => other.clone(),
        });
        assert_eq!(schema.parse(&json!(42)).unwrap(), json!("42"));
    }

    #[test]
    fn preprocess_composes_in_order() {
        let schema = Schema::string()
            .preprocess_str(|s| s.trim().to_string())
            .preprocess_str(str::to_uppercase)
            .refine(TrIban);
        assert_eq!(
            schema.parse(&json!(" tr330006100519786457841326 ")).unwrap(),
            json!("TR330006100519786457841326")
        );
    }

    #[test]
    fn message_overrides_last_step_only() {
        let schema = Schema::string()
            .refine(min_length(2))
            .refine(NationalId)
            .message("Bad ID");
        assert_eq!(
            schema.validate(&json!("1")).unwrap_err().message,
            "Must be at least 2 characters"
        );
        let err = schema.validate(&json!("12")).unwrap_err();
        assert_eq!(err.message, "Bad ID");
        assert_eq!(err.code, "national_id");
    }

    #[test]
    fn typed_refinement_over_numbers() {
        let schema =
            Schema::number().refine(refine(|n: &f64| *n > 0.0, "positive", "Must be positive"));
        assert!(schema.validate(&json!(0.5)).is_ok());
        assert_eq!(schema.validate(&json!(-1)).unwrap_err().code, "positive");
    }

    #[test]
    fn date_kind_uses_coercion() {
        let schema = Schema::date();
        assert!(schema.validate(&json!("2024-02-29")).is_ok());
        assert!(schema.validate(&json!(1_700_000_000_000_i64)).is_ok());
        let err = schema.validate(&json!("yesterday")).unwrap_err();
        assert_eq!(err.code, "invalid_date");
    }

    #[test]
    fn union_of_single_literal() {
        let schema = Schema::union_of([json!(1)]);
        assert!(schema.validate(&json!(1)).is_ok());
        assert!(schema.validate(&Value::Null).is_err());
    }

    #[test]
    fn schemas_nest_as_validators() {
        let inner = Schema::string().refine(min_length(3));
        let outer = Schema::any().refine(inner);
        assert!(outer.validate(&json!("abc")).is_ok());
        assert!(outer.validate(&json!("ab")).is_err());
    }

    #[test]
    fn schema_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema>();
    }
}
