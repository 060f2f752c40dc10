//! Percentage validator

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates a percentage in `[0, 100]`, bounds included.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::validators::Percentage;
    /// use formkit_validator::foundation::Validate;
    ///
    /// assert!(Percentage.validate(&0.0).is_ok());
    /// assert!(Percentage.validate(&100.0).is_ok());
    /// assert!(Percentage.validate(&100.1).is_err());
    /// ```
    pub Percentage for f64;
    rule(input) { (0.0..=100.0).contains(input) }
    error(input) {
        ValidationError::new("percentage", "Percentage must be between 0 and 100")
            .with_param("actual", input.to_string())
    }
    fn percentage();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn bounds() {
        assert!(percentage().validate(&-0.0001).is_err());
        assert!(percentage().validate(&42.5).is_ok());
        assert!(percentage().validate(&f64::NAN).is_err());
    }
}
