//! Validates a signup submission and prints the message for each field.
//!
//! Run with `RUST_LOG=formkit_validator=debug` to see which refinement
//! failed for each field.

use formkit_validator::prelude::*;
use serde_json::json;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let form = Form::new()
        .field("national_id", presets::national_id())
        .field("phone", presets::phone_number().optional())
        .field("iban", presets::iban())
        .field("plate", presets::plate().optional())
        .field("password", presets::strong_password())
        .field_matches("password_confirm", "password", "Passwords do not match");

    let submission = json!({
        "national_id": "10000000147",
        "phone": "05551234567",
        "iban": "tr330006100519786457841326",
        "plate": "82AAA11",
        "password": "Secret1!",
        "password_confirm": "Secret1?",
    });

    let errors = form.validate(&submission);
    if errors.is_empty() {
        println!("submission is valid");
    }
    for (field, message) in &errors {
        println!("{field}: {message}");
    }
}
