//! Normalization and extraction benchmarks.
//!
//! Folding runs over every field of every record when the catalog is built,
//! and over the query on every keystroke.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `normalize` | Folding ASCII, accented and long text |
//! | `to_text` | Flattening flat, nested and wide JSON values |
//! | `haystack` | Building one haystack per record shape |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench normalization_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scent_core::extract::to_text;
use scent_core::haystack::build_haystack;
use scent_core::normalizer::{normalize, tokenize};
use scent_core::Record;
use serde_json::{json, Value};
use std::hint::black_box;

// ---------------------------------------------------------------------------
// normalize
// ---------------------------------------------------------------------------

fn normalize_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let long = "Crème Brûlée, Fougère, Néroli, Sándalo; ".repeat(25);
    let inputs = [
        ("ascii", "Bleu de Chanel Eau de Parfum".to_string()),
        ("accented", "Santal Lumière — Crème de Fougère".to_string()),
        ("long", long),
    ];

    for (label, text) in &inputs {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(label), text, |b, t| {
            b.iter(|| normalize(black_box(t)))
        });
    }

    group.bench_function("tokenize_query", |b| {
        b.iter(|| tokenize(black_box("  Dupes of BLEU   de Chanel ")))
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// to_text
// ---------------------------------------------------------------------------

fn to_text_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_text");

    let wide = Value::Array((0..200).map(|i| Value::from(format!("Note {i}"))).collect());
    let values = [
        ("scalar", json!("Grapefruit")),
        ("pyramid", json!({ "top": ["Grapefruit", "Ginger"], "heart": "Incense", "base": ["Cedar"] })),
        ("nested", json!([[["a", ["b", null]], { "k": ["c", 1, true] }], []])),
        ("wide", wide),
    ];

    for (label, value) in &values {
        group.bench_with_input(BenchmarkId::from_parameter(label), value, |b, v| {
            b.iter(|| to_text(black_box(v)))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// haystack
// ---------------------------------------------------------------------------

fn haystack_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("haystack");

    let records = [
        (
            "camel_case",
            Record::new(json!({
                "id": "de-001", "name": "Bleu Nocturne", "house": "Dilettante",
                "family": "Aromatic Fougère", "isDupe": true, "inspiredBy": "Bleu de Chanel",
                "notes": { "top": ["Grapefruit", "Ginger"], "heart": "Incense", "base": ["Cedar"] },
                "private": { "builtFrom": ["Accord B-7", "Hedione"] }
            })),
        ),
        (
            "spreadsheet",
            Record::new(json!({
                "Name": "Santal Lumière", "Brand": "Dilettante", "Olfactive Family": "Woody",
                "Is Dupe": "Yes", "Inspired By": "Santal 33",
                "Notes": "Sandalwood; Cardamom; Iris; Leather"
            })),
        ),
        ("empty", Record::new(json!({}))),
    ];

    for (label, record) in &records {
        group.bench_with_input(BenchmarkId::from_parameter(label), record, |b, r| {
            b.iter(|| build_haystack(black_box(r)))
        });
    }
    group.finish();
}

criterion_group!(benches, normalize_bench, to_text_bench, haystack_bench);
criterion_main!(benches);
