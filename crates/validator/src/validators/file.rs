//! File metadata validators
//!
//! Only metadata is inspected: the byte size and the declared MIME type.
//! File contents never reach the validation core.

use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

/// Size and declared type of an uploaded file.
///
/// Deserializes from the shape browsers report for a `File`:
/// `{"size": 1024, "type": "image/png"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileMeta {
    /// Size in bytes.
    pub size: u64,
    /// Declared MIME type, e.g. `application/pdf`.
    #[serde(rename = "type")]
    pub mime: String,
}

impl FileMeta {
    pub fn new(size: u64, mime: impl Into<String>) -> Self {
        Self {
            size,
            mime: mime.into(),
        }
    }
}

/// Converts a byte limit to whole mebibytes for messages.
fn mebibytes(bytes: u64) -> u64 {
    (bytes as f64 / 1024.0 / 1024.0).round() as u64
}

crate::validator! {
    /// Validates that a file is at most `max_bytes` large.
    ///
    /// The message reports the limit in MB, rounded to the nearest whole
    /// mebibyte.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::validators::{FileMeta, max_file_size};
    /// use formkit_validator::foundation::Validate;
    ///
    /// let validator = max_file_size(5 * 1024 * 1024);
    /// assert!(validator.validate(&FileMeta::new(1024, "image/png")).is_ok());
    /// let err = validator.validate(&FileMeta::new(6 * 1024 * 1024, "image/png")).unwrap_err();
    /// assert_eq!(err.message, "File size must not exceed 5 MB");
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxFileSize { max_bytes: u64 } for FileMeta;
    rule(self, input) { input.size <= self.max_bytes }
    error(self, input) {
        ValidationError::new(
            "file_size",
            format!("File size must not exceed {} MB", mebibytes(self.max_bytes)),
        )
        .with_param("max_bytes", self.max_bytes.to_string())
        .with_param("actual", input.size.to_string())
    }
    fn max_file_size(max_bytes: u64);
}

crate::validator! {
    /// Validates that a file's MIME type is one of `allowed`.
    ///
    /// Comparison is exact; `image/*` style wildcards are not expanded.
    #[derive(PartialEq, Eq)]
    pub FileType { allowed: Vec<String> } for FileMeta;
    rule(self, input) { self.allowed.iter().any(|mime| *mime == input.mime) }
    error(self, input) {
        ValidationError::new(
            "file_type",
            format!("File type must be one of: {}", self.allowed.join(", ")),
        )
        .with_param("actual", input.mime.clone())
    }
    fn file_type(allowed: Vec<String>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn size_limit_is_inclusive() {
        let validator = max_file_size(1024);
        assert!(validator.validate(&FileMeta::new(1024, "text/plain")).is_ok());
        assert!(validator.validate(&FileMeta::new(1025, "text/plain")).is_err());
    }

    #[test]
    fn message_rounds_mebibytes() {
        // 1.6 MiB rounds to 2
        let validator = max_file_size(1_677_722);
        let err = validator
            .validate(&FileMeta::new(2_000_000, "text/plain"))
            .unwrap_err();
        assert_eq!(err.message, "File size must not exceed 2 MB");
    }

    #[test]
    fn mime_membership() {
        let validator = file_type(vec!["image/png".into(), "image/jpeg".into()]);
        assert!(validator.validate(&FileMeta::new(1, "image/jpeg")).is_ok());
        let err = validator.validate(&FileMeta::new(1, "image/gif")).unwrap_err();
        assert_eq!(err.message, "File type must be one of: image/png, image/jpeg");
        assert_eq!(err.param("actual"), Some("image/gif"));
    }

    #[test]
    fn deserializes_browser_shape() {
        let meta: FileMeta =
            serde_json::from_str(r#"{"size": 10, "type": "application/pdf"}"#).unwrap();
        assert_eq!(meta, FileMeta::new(10, "application/pdf"));
    }
}
