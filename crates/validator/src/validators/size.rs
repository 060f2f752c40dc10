//! Collection size validators

use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Validates the element count of a sequence.
///
/// `max` is optional; without it the count is unbounded above. The lower
/// bound is checked first.
///
/// # Examples
///
/// ```
/// use formkit_validator::validators::size_range;
/// use formkit_validator::foundation::Validate;
///
/// let tags = size_range::<&str>(1, Some(3));
/// assert!(tags.validate(&["a", "b"]).is_ok());
/// assert!(tags.validate(&[]).is_err());
///
/// let at_least_two = size_range::<i32>(2, None);
/// assert!(at_least_two.validate(&[1, 2, 3, 4, 5]).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeRange<T> {
    min: usize,
    max: Option<usize>,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> SizeRange<T> {
    /// Minimum element count (inclusive).
    pub fn min(&self) -> usize {
        self.min
    }

    /// Maximum element count (inclusive), if bounded.
    pub fn max(&self) -> Option<usize> {
        self.max
    }
}

impl<T> Validate for SizeRange<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let size = input.len();
        if size < self.min {
            return Err(ValidationError::new(
                "min_size",
                format!("Must contain at least {} items", self.min),
            )
            .with_param("min", self.min.to_string())
            .with_param("actual", size.to_string()));
        }
        if let Some(max) = self.max.filter(|&max| size > max) {
            return Err(ValidationError::new(
                "max_size",
                format!("Must contain at most {max} items"),
            )
            .with_param("max", max.to_string())
            .with_param("actual", size.to_string()));
        }
        Ok(())
    }
}

/// Creates a validator for the element count of a sequence.
#[must_use]
pub fn size_range<T>(min: usize, max: Option<usize>) -> SizeRange<T> {
    SizeRange {
        min,
        max,
        _phantom: PhantomData,
    }
}
