// Languages: a profile, its decoded dictionary and per-language exceptions.
//
// Built-in tables are compiled in behind the `cs` and `sv` features and
// decoded on demand; nothing is loaded from storage.

#[cfg(feature = "cs")]
mod cs;
#[cfg(feature = "sv")]
mod sv;

use hashbrown::HashMap;
use hyfen_core::character::{lower_word, simple_lower};
use hyfen_patterns::{LanguageProfile, PackedTable, PatternDictionary, PatternError};

/// Tags of the languages compiled into this build.
pub const BUILTIN_TAGS: &[&str] = &[
    #[cfg(feature = "cs")]
    cs::TAG,
    #[cfg(feature = "sv")]
    sv::TAG,
];

/// Decode the built-in table for `tag`. Returns `None` when no table for
/// that tag is compiled in.
pub fn builtin(tag: &str) -> Option<Result<Language, PatternError>> {
    let (profile, table): (LanguageProfile, &PackedTable<'static>) = match tag {
        #[cfg(feature = "cs")]
        cs::TAG => (cs::profile(), &cs::PATTERNS),
        #[cfg(feature = "sv")]
        sv::TAG => (sv::profile(), &sv::PATTERNS),
        _ => return None,
    };
    Some(Language::load(profile, table))
}

/// A loaded language: immutable profile and dictionary plus an exception
/// list of explicitly hyphenated words.
#[derive(Debug, Clone)]
pub struct Language {
    profile: LanguageProfile,
    dictionary: PatternDictionary,
    exceptions: HashMap<Box<[char]>, Box<[usize]>>,
}

impl Language {
    /// Decode `table` under `profile`.
    pub fn load(profile: LanguageProfile, table: &PackedTable<'_>) -> Result<Self, PatternError> {
        let dictionary = PatternDictionary::load(table, &profile)?;
        Ok(Self {
            profile,
            dictionary,
            exceptions: HashMap::new(),
        })
    }

    pub fn tag(&self) -> &str {
        &self.profile.tag
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    pub fn dictionary(&self) -> &PatternDictionary {
        &self.dictionary
    }

    /// Whether `c` can be part of a word of this language: an ASCII letter,
    /// one of the profile's special letters, or a letter some pattern uses.
    pub fn is_word_char(&self, c: char) -> bool {
        c.is_ascii_alphabetic()
            || self.profile.is_special_char(c)
            || self.dictionary.has_letter(simple_lower(c))
    }

    /// Add one exception in `hy-phen-at-ed` form. Returns `false` (and adds
    /// nothing) for an entry with no letters, a leading, trailing or doubled
    /// hyphen, or a character that is not a word character.
    pub fn add_exception(&mut self, entry: &str) -> bool {
        match parse_exception(entry, |c| self.is_word_char(c)) {
            Some((word, offsets)) => {
                self.exceptions.insert(word, offsets);
                true
            }
            None => false,
        }
    }

    /// Explicit break offsets for `word`, matched case-insensitively.
    pub fn exception(&self, word: &[char]) -> Option<&[usize]> {
        if self.exceptions.is_empty() {
            return None;
        }
        self.exceptions
            .get(&*lower_word(word))
            .map(|offsets| &**offsets)
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }
}

fn parse_exception(
    entry: &str,
    is_word_char: impl Fn(char) -> bool,
) -> Option<(Box<[char]>, Box<[usize]>)> {
    let mut letters = Vec::with_capacity(entry.len());
    let mut offsets: Vec<usize> = Vec::new();
    for c in entry.trim().chars() {
        if c == '-' {
            let at = letters.len();
            if at == 0 || offsets.last() == Some(&at) {
                return None;
            }
            offsets.push(at);
        } else if is_word_char(c) {
            letters.push(simple_lower(c));
        } else {
            return None;
        }
    }
    if letters.is_empty() || offsets.last() == Some(&letters.len()) {
        return None;
    }
    Some((letters.into_boxed_slice(), offsets.into_boxed_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn tiny() -> Language {
        let profile = LanguageProfile::new("xx", 2, 2, 1, 4, "ø");
        Language::load(profile, &PackedTable::new(&[(2, "1ñ"), (4, "n1at")])).unwrap()
    }

    #[test]
    fn word_chars_come_from_profile_and_patterns() {
        let lang = tiny();
        assert!(lang.is_word_char('a'));
        assert!(lang.is_word_char('Z'));
        assert!(lang.is_word_char('ø'));
        assert!(lang.is_word_char('Ø'));
        assert!(lang.is_word_char('ñ'));
        assert!(lang.is_word_char('Ñ'));
        assert!(!lang.is_word_char('ß'));
        assert!(!lang.is_word_char('-'));
        assert!(!lang.is_word_char('_'));
        assert!(!lang.is_word_char('7'));
    }

    #[test]
    fn parse_exception_offsets() {
        let (word, offsets) = parse_exception("ta-ble-top", |c| c.is_alphabetic()).unwrap();
        assert_eq!(&*word, &chars("tabletop")[..]);
        assert_eq!(&*offsets, &[2, 5]);
    }

    #[test]
    fn parse_exception_rejects_bad_hyphens() {
        let alpha = |c: char| c.is_alphabetic();
        assert!(parse_exception("-table", alpha).is_none());
        assert!(parse_exception("table-", alpha).is_none());
        assert!(parse_exception("ta--ble", alpha).is_none());
        assert!(parse_exception("", alpha).is_none());
        assert!(parse_exception("ta-b1e", alpha).is_none());
    }

    #[test]
    fn exception_without_hyphens_forbids_breaks() {
        let (_, offsets) = parse_exception("table", |c| c.is_alphabetic()).unwrap();
        assert!(offsets.is_empty());
    }

    #[test]
    fn exceptions_match_any_case() {
        let mut lang = tiny();
        assert!(lang.add_exception(" Ta-ble "));
        assert!(!lang.add_exception("ta-ble-"));
        assert_eq!(lang.exception_count(), 1);
        assert_eq!(lang.exception(&chars("TABLE")), Some(&[2][..]));
        assert_eq!(lang.exception(&chars("tables")), None);
    }

    #[test]
    fn builtin_unknown_tag() {
        assert!(builtin("xx").is_none());
    }

    #[cfg(feature = "cs")]
    #[test]
    fn builtin_czech_decodes() {
        let lang = builtin("cs").unwrap().unwrap();
        assert_eq!(lang.tag(), "cs");
        assert_eq!(lang.dictionary().len(), 3636);
        assert_eq!(lang.dictionary().longest(), Some(6));
        // ň is used by patterns but missing from the profile's letters
        assert!(!lang.profile().is_special_char('ň'));
        assert!(lang.is_word_char('ň'));
    }

    #[cfg(feature = "sv")]
    #[test]
    fn builtin_swedish_decodes() {
        let lang = builtin("sv").unwrap().unwrap();
        assert_eq!(lang.tag(), "sv");
        assert_eq!(lang.dictionary().len(), 4693);
        assert_eq!(lang.dictionary().longest(), Some(8));
        assert!(lang.is_word_char('Å'));
    }
}
