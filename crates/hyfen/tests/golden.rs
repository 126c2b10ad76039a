//! Golden tests: compare against hyphenations computed independently from
//! the packed tables.
//!
//! The golden file lists, per language, words with their break offsets and
//! hyphenated form, and short texts with their hyphenated rendering.
//!
//! Run: cargo test -p hyfen --test golden

use std::collections::BTreeMap;
use std::path::PathBuf;

use hyfen::Registry;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoldenFile {
    words: BTreeMap<String, Vec<WordCase>>,
    texts: BTreeMap<String, Vec<TextCase>>,
}

#[derive(Debug, Deserialize)]
struct WordCase {
    word: String,
    breaks: Vec<usize>,
    hyphenated: String,
}

#[derive(Debug, Deserialize)]
struct TextCase {
    text: String,
    hyphenated: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_golden() -> GoldenFile {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/hyphenation.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn registry() -> Registry {
    Registry::with_builtin_languages().expect("built-in tables decode")
}

/// Convert a hyphenation pattern (e.g. `"  -   "` for `"kärlek"`) into the
/// golden hyphenated form (`"kär-lek"`).
fn pattern_to_hyphenated(word: &str, pattern: &str) -> String {
    let pattern_chars: Vec<char> = pattern.chars().collect();
    let mut result = String::with_capacity(word.len() + 10);
    for (i, ch) in word.chars().enumerate() {
        if pattern_chars.get(i) == Some(&'-') {
            result.push('-');
        }
        result.push(ch);
    }
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_covers_builtin_languages() {
    let golden = load_golden();
    let registry = registry();
    for tag in registry.tags() {
        assert!(golden.words.contains_key(tag), "no golden words for {tag}");
    }
}

#[test]
fn golden_break_offsets() {
    let golden = load_golden();
    let registry = registry();
    let mut checked = 0;
    let mut failures = Vec::new();

    for (tag, cases) in &golden.words {
        if !registry.supports(tag) {
            continue;
        }
        for case in cases {
            let breaks = registry.hyphenate(tag, &case.word).unwrap();
            if breaks != case.breaks {
                failures.push(format!(
                    "[{tag}] {:?}: expected {:?}, got {:?}",
                    case.word, case.breaks, breaks
                ));
            }
            checked += 1;
        }
    }

    assert!(checked > 0, "no golden words checked");
    assert!(
        failures.is_empty(),
        "{} mismatches:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn golden_hyphenated_forms() {
    let golden = load_golden();
    let registry = registry();

    for (tag, cases) in &golden.words {
        if !registry.supports(tag) {
            continue;
        }
        for case in cases {
            let rendered = registry.insert_hyphens(tag, &case.word, "-").unwrap();
            assert_eq!(rendered, case.hyphenated, "[{tag}] insert_hyphens");

            let pattern = registry.hyphenation_pattern(tag, &case.word).unwrap();
            assert_eq!(pattern.chars().count(), case.word.chars().count());
            assert_eq!(
                pattern_to_hyphenated(&case.word, &pattern),
                case.hyphenated,
                "[{tag}] hyphenation_pattern {pattern:?}"
            );
        }
    }
}

#[test]
fn golden_texts() {
    let golden = load_golden();
    let registry = registry();

    for (tag, cases) in &golden.texts {
        if !registry.supports(tag) {
            continue;
        }
        for case in cases {
            let rendered = registry.hyphenate_text(tag, &case.text, "-").unwrap();
            assert_eq!(rendered, case.hyphenated, "[{tag}] {:?}", case.text);
        }
    }
}

#[test]
fn regional_tags_resolve_to_builtin_language() {
    let registry = registry();
    for tag in registry.tags() {
        let regional = format!("{}-XX", tag.to_uppercase());
        assert_eq!(registry.language(&regional).unwrap().tag(), tag);
    }
}

#[test]
fn unsupported_language() {
    let registry = registry();
    assert!(matches!(
        registry.hyphenate("xx", "word"),
        Err(hyfen::HyphenError::UnsupportedLanguage(ref tag)) if tag == "xx"
    ));
}

#[cfg(all(feature = "cs", feature = "sv"))]
#[test]
fn default_build_has_czech_and_swedish() {
    assert_eq!(registry().tags(), vec!["cs", "sv"]);
}

#[cfg(feature = "cs")]
#[test]
fn czech_elided_segment_keeps_start_patterns() {
    let registry = registry();
    assert_eq!(registry.hyphenate("cs", "odrážka").unwrap(), vec![2, 5]);
    assert_eq!(registry.hyphenate("cs", "d'odrážka").unwrap(), vec![4, 7]);
    let hyphenated = registry.insert_hyphens("cs", "d'odrážka", "-").unwrap();
    assert_eq!(hyphenated, "d'od-ráž-ka");
}

#[test]
fn registry_shared_across_threads() {
    let golden = load_golden();
    let registry = registry();

    std::thread::scope(|s| {
        for (tag, cases) in &golden.words {
            if !registry.supports(tag) {
                continue;
            }
            let registry = &registry;
            s.spawn(move || {
                for case in cases {
                    assert_eq!(registry.hyphenate(tag, &case.word).unwrap(), case.breaks);
                }
            });
        }
    });
}
