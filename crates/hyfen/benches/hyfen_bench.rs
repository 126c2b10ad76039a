// Criterion benchmarks for hyfen.
//
// Uses the words of the golden test file, so no external data is needed.
//
// Run:
//   cargo bench -p hyfen

use std::hint::black_box;
use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};
use hyfen::Registry;

// ---------------------------------------------------------------------------
// Test data
// ---------------------------------------------------------------------------

fn load_words(tag: &str) -> Vec<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/hyphenation.json");
    let contents = std::fs::read_to_string(&path).unwrap_or_default();
    let golden: serde_json::Value = serde_json::from_str(&contents).unwrap_or_default();
    golden["words"][tag]
        .as_array()
        .map(|cases| {
            cases
                .iter()
                .filter_map(|case| case["word"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Decode every built-in table.
fn bench_load(c: &mut Criterion) {
    c.bench_function("load_builtin_languages", |b| {
        b.iter(|| black_box(Registry::with_builtin_languages().expect("built-in tables")));
    });
}

/// Hyphenate the golden words of each built-in language.
fn bench_hyphenate_words(c: &mut Criterion) {
    let registry = Registry::with_builtin_languages().expect("built-in tables");
    for tag in registry.tags() {
        let words = load_words(tag);
        c.bench_function(&format!("hyphenate_words_{tag}"), |b| {
            b.iter(|| {
                for word in &words {
                    black_box(registry.hyphenate(tag, word).ok());
                }
            });
        });
    }
}

/// Hyphenate a paragraph of running text.
fn bench_hyphenate_text(c: &mut Criterion) {
    let registry = Registry::with_builtin_languages().expect("built-in tables");
    let text = load_words("cs").join(" ").repeat(20);
    c.bench_function("hyphenate_text_cs", |b| {
        b.iter(|| black_box(registry.hyphenate_text("cs", &text, "\u{00AD}").ok()));
    });
}

criterion_group!(
    benches,
    bench_load,
    bench_hyphenate_words,
    bench_hyphenate_text
);
criterion_main!(benches);
