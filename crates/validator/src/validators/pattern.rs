//! Regular-expression validator

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// Compilation happens once, in the constructor; an invalid pattern is
    /// a construction error, not a validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::validators::matches_regex;
    /// use formkit_validator::foundation::Validate;
    ///
    /// let zip = matches_regex(r"^\d{5}$").unwrap();
    /// assert!(zip.validate("34000").is_ok());
    /// assert!(zip.validate("3400").is_err());
    /// assert!(matches_regex("(unclosed").is_err());
    /// ```
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("regex", "Invalid format")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

impl MatchesRegex {
    /// Wraps an already compiled regex.
    #[must_use]
    pub fn from_regex(pattern: regex::Regex) -> Self {
        Self { pattern }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn reports_pattern_param() {
        let validator = matches_regex("^a+$").unwrap();
        let err = validator.validate("b").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("pattern"), Some("^a+$"));
    }

    #[test]
    fn from_compiled_regex() {
        let validator = MatchesRegex::from_regex(regex::Regex::new("^x").unwrap());
        assert!(validator.validate("xyz").is_ok());
    }
}
