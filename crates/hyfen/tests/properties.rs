//! Property tests for the hyphenator and text hyphenation.
//!
//! Run: cargo test -p hyfen --test properties

use std::sync::LazyLock;

use hyfen::{Language, LanguageProfile, PackedTable, Registry};
use proptest::prelude::*;

static REGISTRY: LazyLock<Registry> =
    LazyLock::new(|| Registry::with_builtin_languages().expect("built-in tables decode"));

const CZECH_WORD: &str = "[a-zěščřžýáíéúůťďňó]{0,30}";
const SWEDISH_WORD: &str = "[a-zåäöé]{0,30}";

fn check_bounds(breaks: &[usize], len: usize) -> Result<(), TestCaseError> {
    let sorted = breaks.windows(2).all(|w| w[0] < w[1]);
    prop_assert!(sorted, "unsorted: {:?}", breaks);
    for &b in breaks {
        let inside = b >= 2 && b + 2 <= len;
        prop_assert!(inside, "break {} outside margins of {}", b, len);
    }
    Ok(())
}

proptest! {
    #[test]
    fn czech_breaks_respect_margins(word in CZECH_WORD) {
        let breaks = REGISTRY.hyphenate("cs", &word).unwrap();
        check_bounds(&breaks, word.chars().count())?;
    }

    #[test]
    fn swedish_breaks_respect_margins(word in SWEDISH_WORD) {
        let breaks = REGISTRY.hyphenate("sv", &word).unwrap();
        check_bounds(&breaks, word.chars().count())?;
    }

    #[test]
    fn arbitrary_input_breaks_respect_margins(s in ".{0,60}") {
        for tag in ["cs", "sv"] {
            let breaks = REGISTRY.hyphenate(tag, &s).unwrap();
            check_bounds(&breaks, s.chars().count())?;
        }
    }

    #[test]
    fn short_words_have_no_breaks(word in "[a-zěščřžýáíéúůťďňó]{0,3}") {
        prop_assert!(REGISTRY.hyphenate("cs", &word).unwrap().is_empty());
    }

    #[test]
    fn hyphenation_is_deterministic(word in CZECH_WORD) {
        let first = REGISTRY.hyphenate("cs", &word).unwrap();
        let second = REGISTRY.hyphenate("cs", &word).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn hyphenation_ignores_case(word in SWEDISH_WORD) {
        let upper = word.to_uppercase();
        prop_assert_eq!(
            REGISTRY.hyphenate("sv", &word).unwrap(),
            REGISTRY.hyphenate("sv", &upper).unwrap()
        );
    }

    #[test]
    fn removing_separators_restores_word(word in CZECH_WORD) {
        let hyphenated = REGISTRY.insert_hyphens("cs", &word, "\u{00AD}").unwrap();
        let breaks = REGISTRY.hyphenate("cs", &word).unwrap();
        prop_assert_eq!(hyphenated.matches('\u{00AD}').count(), breaks.len());
        prop_assert_eq!(hyphenated.replace('\u{00AD}', ""), word);
    }

    #[test]
    fn removing_separators_restores_text(s in ".{0,200}") {
        prop_assume!(!s.contains('\u{00AD}'));
        for tag in ["cs", "sv"] {
            let hyphenated = REGISTRY.hyphenate_text(tag, &s, "\u{00AD}").unwrap();
            prop_assert_eq!(hyphenated.replace('\u{00AD}', ""), s.as_str());
        }
    }

    #[test]
    fn highest_weight_wins_in_any_order(w1 in 1u8..=9, w2 in 1u8..=9) {
        let first = format!("a{w1}ba{w2}b");
        let second = format!("a{w2}ba{w1}b");
        let expected: Vec<usize> = if w1.max(w2) % 2 == 1 { vec![3] } else { vec![] };
        for packed in [first, second] {
            let buckets = [(3, packed.as_str())];
            let profile = LanguageProfile::new("xx", 2, 2, 1, 3, "");
            let language = Language::load(profile, &PackedTable::new(&buckets)).unwrap();
            let mut registry = Registry::new();
            registry.register_language(language);
            let breaks = registry.hyphenate("xx", "xxabxx").unwrap();
            prop_assert_eq!(breaks, expected.clone());
        }
    }
}
