//! Benchmarks for the adapter hot path: one call per field per keystroke.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use formkit_validator::prelude::*;
use serde_json::json;

// ============================================================================
// Checksum
// ============================================================================

fn bench_national_id_checksum(c: &mut Criterion) {
    c.bench_function("national_id_checksum_valid", |b| {
        b.iter(|| national_id_checksum(black_box("12345678950")));
    });

    c.bench_function("national_id_checksum_short", |b| {
        b.iter(|| national_id_checksum(black_box("1234")));
    });
}

// ============================================================================
// Presets through the adapter
// ============================================================================

fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("preset_adapter");
    let cases = [
        ("national_id", presets::national_id(), json!("12345678950")),
        ("phone_number", presets::phone_number(), json!("+905551234567")),
        ("iban", presets::iban(), json!("tr330006100519786457841326")),
        ("plate", presets::plate(), json!("34ABC123")),
        ("strong_password", presets::strong_password(), json!("Secret1!")),
        ("currency", presets::currency(), json!(1249.99)),
    ];

    for (name, schema, value) in cases {
        let validate = to_validator(&schema);
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, value| {
            b.iter(|| validate(black_box(value)));
        });
    }
    group.finish();
}

// ============================================================================
// First-failure short-circuit
// ============================================================================

fn bench_short_circuit(c: &mut Criterion) {
    let schema = (0..16).fold(Schema::string().check(|_| false, "first"), |schema, _| {
        schema.check(|_| true, "never")
    });
    let validate = to_validator(&schema);
    let value = json!("x");

    c.bench_function("short_circuit_17_steps", |b| {
        b.iter(|| validate(black_box(&value)));
    });
}

// ============================================================================
// Forms
// ============================================================================

fn bench_form(c: &mut Criterion) {
    let form = Form::new()
        .field("national_id", presets::national_id())
        .field("phone", presets::phone_number())
        .field("iban", presets::iban())
        .field("password", presets::strong_password())
        .field_matches("password_confirm", "password", "Passwords do not match");
    let values = json!({
        "national_id": "12345678950",
        "phone": "05551234567",
        "iban": "TR330006100519786457841326",
        "password": "Secret1!",
        "password_confirm": "Secret1!",
    });

    c.bench_function("signup_form_valid", |b| {
        b.iter(|| form.validate(black_box(&values)));
    });
}

criterion_group!(
    benches,
    bench_national_id_checksum,
    bench_presets,
    bench_short_circuit,
    bench_form
);
criterion_main!(benches);
