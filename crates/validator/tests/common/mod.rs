//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::Once;

use formkit_validator::foundation::Validate;
use formkit_validator::schema::Schema;
use serde_json::Value;

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once per test binary.
///
/// Filter with `RUST_LOG=formkit_validator=debug` to see refinement
/// failures next to test output.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The message a schema reports for `value`, if any.
pub fn message(schema: &Schema, value: &Value) -> Option<String> {
    schema.validate(value).err().map(|e| e.message.into_owned())
}
