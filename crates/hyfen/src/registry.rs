// Registry: explicit owner of every loaded language.
//
// Languages are loaded once and then only read. The registry is handed to
// callers by reference instead of living in a global, so several registries
// (with different options or exception lists) can coexist.
//
// Design notes:
// - Each query creates a lightweight `LiangHyphenator` that borrows the
//   language and copies the registry's options.
// - Nothing is mutated after setup, so `&Registry` can be shared across
//   threads without locking.

use hashbrown::HashMap;

use hyfen_patterns::{LanguageProfile, PackedTable};

use crate::HyphenError;
use crate::hyphenator::{Hyphenator, HyphenatorOptions, LiangHyphenator};
use crate::languages::{self, Language};
use crate::tokenizer;

/// Language-keyed collection of loaded hyphenation dictionaries.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    languages: HashMap<String, Language>,
    options: HyphenatorOptions,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every language compiled into this build.
    pub fn with_builtin_languages() -> Result<Self, HyphenError> {
        let mut registry = Self::new();
        for &tag in languages::BUILTIN_TAGS {
            match languages::builtin(tag) {
                Some(Ok(language)) => {
                    registry.register_language(language);
                }
                Some(Err(source)) => {
                    log::warn!("built-in table for {tag:?} failed to load: {source}");
                    return Err(HyphenError::MalformedPattern {
                        tag: tag.to_string(),
                        source,
                    });
                }
                None => {}
            }
        }
        Ok(registry)
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Decode `table` under `profile` and register the result.
    ///
    /// A malformed table leaves the registry unchanged.
    pub fn register(
        &mut self,
        profile: LanguageProfile,
        table: &PackedTable<'_>,
    ) -> Result<(), HyphenError> {
        let tag = profile.tag.clone();
        match Language::load(profile, table) {
            Ok(language) => {
                self.register_language(language);
                Ok(())
            }
            Err(source) => {
                log::warn!("pattern table for {tag:?} rejected: {source}");
                Err(HyphenError::MalformedPattern { tag, source })
            }
        }
    }

    /// Register an already loaded language, replacing any language with the
    /// same tag. Returns the replaced language.
    pub fn register_language(&mut self, language: Language) -> Option<Language> {
        let profile = language.profile();
        log::debug!(
            "registered {:?}: {} patterns, leftmin {}, rightmin {}, pattern lengths {}..={}",
            profile.tag,
            language.dictionary().len(),
            profile.left_min,
            profile.right_min,
            profile.shortest_pattern,
            profile.longest_pattern
        );
        self.languages.insert(profile.tag.clone(), language)
    }

    /// Add comma-separated exceptions (`"ta-ble, hy-phen-ation"`) to a
    /// language. Returns the number of entries accepted; invalid entries are
    /// skipped.
    pub fn add_exceptions(&mut self, tag: &str, list: &str) -> Result<usize, HyphenError> {
        let key = self.resolve_key(tag)?;
        let Some(language) = self.languages.get_mut(&key) else {
            return Err(HyphenError::UnsupportedLanguage(tag.to_string()));
        };
        let mut added = 0;
        for entry in list.split(',').filter(|e| !e.trim().is_empty()) {
            if language.add_exception(entry) {
                added += 1;
            } else {
                log::warn!("ignoring invalid {key:?} hyphenation exception {entry:?}");
            }
        }
        Ok(added)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Find the language for `tag`.
    ///
    /// Tags match case-insensitively, `_` and `-` are interchangeable, and a
    /// regional tag such as `sv-SE` resolves to its primary language `sv`.
    /// There is no fallback to any other language.
    pub fn language(&self, tag: &str) -> Result<&Language, HyphenError> {
        let key = self.resolve_key(tag)?;
        self.languages
            .get(&key)
            .ok_or_else(|| HyphenError::UnsupportedLanguage(tag.to_string()))
    }

    /// Whether a language for `tag` is registered.
    pub fn supports(&self, tag: &str) -> bool {
        self.resolve_key(tag).is_ok()
    }

    /// Registered language tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    fn resolve_key(&self, tag: &str) -> Result<String, HyphenError> {
        let normalized = tag.trim().to_ascii_lowercase().replace('_', "-");
        if self.languages.contains_key(&normalized) {
            return Ok(normalized);
        }
        if let Some((primary, _)) = normalized.split_once('-') {
            if self.languages.contains_key(primary) {
                return Ok(primary.to_string());
            }
        }
        Err(HyphenError::UnsupportedLanguage(tag.to_string()))
    }

    // =========================================================================
    // Options
    // =========================================================================

    pub fn options(&self) -> &HyphenatorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: HyphenatorOptions) {
        self.options = options;
    }

    /// Override every language's left margin (`None` restores the profiles').
    pub fn set_left_min(&mut self, value: Option<usize>) {
        self.options.left_min = value;
    }

    /// Override every language's right margin (`None` restores the profiles').
    pub fn set_right_min(&mut self, value: Option<usize>) {
        self.options.right_min = value;
    }

    /// Set the minimum word length for hyphenation.
    pub fn set_min_word_length(&mut self, value: usize) {
        self.options.min_word_length = value;
    }

    // =========================================================================
    // Hyphenation
    // =========================================================================

    /// A hyphenator for `tag` using the registry's options.
    pub fn hyphenator(&self, tag: &str) -> Result<LiangHyphenator<'_>, HyphenError> {
        Ok(LiangHyphenator::new(self.language(tag)?, self.options))
    }

    /// Permitted break offsets of `word`, as character offsets.
    pub fn hyphenate(&self, tag: &str, word: &str) -> Result<Vec<usize>, HyphenError> {
        let word_chars: Vec<char> = word.chars().collect();
        Ok(self.hyphenator(tag)?.break_points(&word_chars))
    }

    /// Hyphenation pattern of `word`: `'-'` before each break, `' '` elsewhere.
    pub fn hyphenation_pattern(&self, tag: &str, word: &str) -> Result<String, HyphenError> {
        let word_chars: Vec<char> = word.chars().collect();
        Ok(self.hyphenator(tag)?.hyphenation_pattern(&word_chars))
    }

    /// Render `word` with `separator` inserted at every break.
    pub fn insert_hyphens(
        &self,
        tag: &str,
        word: &str,
        separator: &str,
    ) -> Result<String, HyphenError> {
        let word_chars: Vec<char> = word.chars().collect();
        Ok(self.hyphenator(tag)?.insert_hyphens(&word_chars, separator))
    }

    /// Hyphenate every word of running text. URLs, e-mail addresses,
    /// whitespace and punctuation are copied unchanged.
    pub fn hyphenate_text(
        &self,
        tag: &str,
        text: &str,
        separator: &str,
    ) -> Result<String, HyphenError> {
        let language = self.language(tag)?;
        let hyphenator = LiangHyphenator::new(language, self.options);
        let mut result = String::with_capacity(text.len());
        for token in tokenizer::tokenize(text, |c| language.is_word_char(c)) {
            if token.is_word() {
                let word_chars: Vec<char> = token.text.chars().collect();
                result.push_str(&hyphenator.insert_hyphens(&word_chars, separator));
            } else {
                result.push_str(&token.text);
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_profile(tag: &str) -> LanguageProfile {
        LanguageProfile::new(tag, 2, 2, 1, 4, "")
    }

    fn tiny() -> Registry {
        let mut registry = Registry::new();
        let table = PackedTable::new(&[(4, "a1ti"), (3, "i1o")]);
        registry.register(tiny_profile("xx"), &table).unwrap();
        registry
    }

    #[test]
    fn unknown_language_is_an_error() {
        let registry = tiny();
        assert_eq!(
            registry.hyphenate("yy", "station"),
            Err(HyphenError::UnsupportedLanguage("yy".to_string()))
        );
        assert!(!registry.supports("yy"));
    }

    #[test]
    fn empty_registry_supports_nothing() {
        let registry = Registry::new();
        assert!(registry.tags().is_empty());
        assert!(registry.language("xx").is_err());
    }

    #[test]
    fn tag_resolution() {
        let registry = tiny();
        assert!(registry.supports("xx"));
        assert!(registry.supports("XX"));
        assert!(registry.supports("xx-YY"));
        assert!(registry.supports("xx_yy"));
        assert!(!registry.supports("x"));
        assert!(!registry.supports("xxx"));
        assert_eq!(registry.language("xx-YY").unwrap().tag(), "xx");
    }

    #[test]
    fn malformed_table_is_rejected() {
        let mut registry = tiny();
        let err = registry
            .register(tiny_profile("zz"), &PackedTable::new(&[(4, "1c½0")]))
            .unwrap_err();
        assert!(matches!(
            err,
            HyphenError::MalformedPattern { ref tag, .. } if tag == "zz"
        ));
        assert!(!registry.supports("zz"));
        assert_eq!(registry.tags(), vec!["xx"]);
    }

    #[test]
    fn register_replaces_same_tag() {
        let mut registry = tiny();
        let language =
            Language::load(tiny_profile("xx"), &PackedTable::new(&[(4, "a2ti")])).unwrap();
        assert!(registry.register_language(language).is_some());
        assert_eq!(registry.hyphenate("xx", "station").unwrap(), vec![]);
    }

    #[test]
    fn hyphenate_word() {
        let registry = tiny();
        assert_eq!(registry.hyphenate("xx", "station").unwrap(), vec![3, 5]);
        let pattern = registry.hyphenation_pattern("xx", "station").unwrap();
        assert_eq!(pattern, "   - - ");
        let hyphenated = registry.insert_hyphens("xx", "Station", "=").unwrap();
        assert_eq!(hyphenated, "Sta=ti=on");
    }

    #[test]
    fn options_apply_to_every_query() {
        let mut registry = tiny();
        registry.set_right_min(Some(3));
        assert_eq!(registry.hyphenate("xx", "station").unwrap(), vec![3]);
        registry.set_right_min(None);
        registry.set_min_word_length(8);
        assert!(registry.hyphenate("xx", "station").unwrap().is_empty());
        registry.set_options(HyphenatorOptions::default());
        assert_eq!(registry.options(), &HyphenatorOptions::default());
        registry.set_left_min(Some(4));
        assert_eq!(registry.hyphenate("xx", "station").unwrap(), vec![5]);
    }

    #[test]
    fn exceptions() {
        let mut registry = tiny();
        let added = registry.add_exceptions("xx", "stat-ion, -bad, , na-tion");
        assert_eq!(added.unwrap(), 2);
        let render = |word| registry.insert_hyphens("xx", word, "-").unwrap();
        assert_eq!(render("station"), "stat-ion");
        assert_eq!(render("NATION"), "NA-TION");
        assert!(registry.add_exceptions("yy", "a-b").is_err());
    }

    #[test]
    fn hyphenate_text_keeps_non_words() {
        let registry = tiny();
        let text = "The station, see www.station.example or station@example.org!";
        assert_eq!(
            registry.hyphenate_text("xx", text, "-").unwrap(),
            "The sta-ti-on, see www.station.example or station@example.org!"
        );
    }

    #[test]
    fn hyphenate_text_unknown_language() {
        assert!(tiny().hyphenate_text("yy", "station", "-").is_err());
    }

    #[test]
    fn registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
