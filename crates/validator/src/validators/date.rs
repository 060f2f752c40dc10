//! Date validators
//!
//! [`DateString`] checks the textual `YYYY-MM-DD` shape. [`FutureDate`] and
//! [`PastDate`] compare a timestamp against the current time; their result
//! changes as time passes, which is the point of them.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};

use crate::foundation::{Validate, ValidationError};

static DATE_STRING_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date regex literal is valid")
});

/// Source of "now" for relative date checks.
pub type Clock = fn() -> DateTime<Utc>;

crate::validator! {
    /// Validates the `YYYY-MM-DD` digit pattern.
    ///
    /// Calendar validity is not checked: `2024-13-45` matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::validators::DateString;
    /// use formkit_validator::foundation::Validate;
    ///
    /// assert!(DateString.validate("2024-05-01").is_ok());
    /// assert!(DateString.validate("01.05.2024").is_err());
    /// ```
    pub DateString for str;
    rule(input) { DATE_STRING_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("YYYY-MM-DD", "Date must be in YYYY-MM-DD format") }
    fn date_string();
}

/// Which side of "now" a [`RelativeDate`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Future,
    Past,
}

/// Validates that a timestamp is strictly after or strictly before now.
///
/// Use the [`FutureDate`] and [`PastDate`] aliases.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use formkit_validator::validators::{FutureDate, PastDate};
/// use formkit_validator::foundation::Validate;
///
/// let tomorrow = Utc::now() + Duration::days(1);
/// assert!(FutureDate::future().validate(&tomorrow).is_ok());
/// assert!(PastDate::past().validate(&tomorrow).is_err());
/// ```
#[derive(Clone, Copy)]
pub struct RelativeDate {
    direction: Direction,
    clock: Clock,
}

/// A [`RelativeDate`] accepting only future timestamps.
pub type FutureDate = RelativeDate;
/// A [`RelativeDate`] accepting only past timestamps.
pub type PastDate = RelativeDate;

impl RelativeDate {
    /// Accepts timestamps strictly after now.
    #[must_use]
    pub fn future() -> Self {
        Self {
            direction: Direction::Future,
            clock: Utc::now,
        }
    }

    /// Accepts timestamps strictly before now.
    #[must_use]
    pub fn past() -> Self {
        Self {
            direction: Direction::Past,
            clock: Utc::now,
        }
    }

    /// Reads "now" from `clock` instead of the system time.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Debug for RelativeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelativeDate")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

impl Validate for RelativeDate {
    type Input = DateTime<Utc>;

    fn validate(&self, input: &DateTime<Utc>) -> Result<(), ValidationError> {
        let now = (self.clock)();
        match self.direction {
            Direction::Future if *input > now => Ok(()),
            Direction::Past if *input < now => Ok(()),
            Direction::Future => Err(ValidationError::new("future_date", "Date must be in the future")
                .with_param("actual", input.to_rfc3339())),
            Direction::Past => Err(ValidationError::new("past_date", "Date must be in the past")
                .with_param("actual", input.to_rfc3339())),
        }
    }
}

#[must_use]
pub fn future_date() -> FutureDate {
    RelativeDate::future()
}

#[must_use]
pub fn past_date() -> PastDate {
    RelativeDate::past()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn date_string_pattern_only() {
        assert!(date_string().validate("2024-13-45").is_ok());
        assert!(date_string().validate("2024-1-5").is_err());
        assert!(date_string().validate("2024-01-05T00:00:00Z").is_err());
    }

    #[test]
    fn date_string_only_ascii_digits() {
        assert!(date_string().validate("２０２４-０５-０１").is_err());
        assert!(date_string().validate("٢٠٢٤-٠٥-٠١").is_err());
    }

    #[test]
    fn future_is_strict() {
        let validator = future_date().with_clock(fixed_now);
        assert!(validator.validate(&(fixed_now() + chrono::Duration::seconds(1))).is_ok());
        let err = validator.validate(&fixed_now()).unwrap_err();
        assert_eq!(err.code, "future_date");
    }

    #[test]
    fn past_is_strict() {
        let validator = past_date().with_clock(fixed_now);
        assert!(validator.validate(&(fixed_now() - chrono::Duration::seconds(1))).is_ok());
        assert_eq!(validator.validate(&fixed_now()).unwrap_err().code, "past_date");
    }
}
