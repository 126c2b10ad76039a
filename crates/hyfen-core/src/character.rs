// Character classification and case folding shared by the table decoder,
// the hyphenator and the text tokenizer.

// ---------------------------------------------------------------------------
// Boundary markers
// ---------------------------------------------------------------------------

/// Marker padded around every word before matching. In a pattern table it
/// anchors a pattern to the start (leading) or end (trailing) of a word.
pub const BOUNDARY_MARKER: char = '_';

/// Marker that starts a word segment following an elision apostrophe
/// (`l'homme`). Only valid as the first letter of a pattern.
pub const ELISION_MARKER: char = '\'';

/// Check whether a character is an apostrophe that can separate an elided
/// prefix from the rest of a word.
pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

/// Check whether a character is one of the two pattern boundary markers.
pub fn is_marker(c: char) -> bool {
    c == BOUNDARY_MARKER || c == ELISION_MARKER
}

/// Return the numeric value of a pattern weight digit (`0`-`9`).
pub fn weight_digit(c: char) -> Option<u8> {
    c.to_digit(10).map(|d| d as u8)
}

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification used by the text tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Letters are anything Unicode considers alphabetic; whether a letter may
/// appear inside a hyphenatable word is decided per language, not here.
pub fn get_char_type(c: char) -> CharType {
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    if c.is_ascii_digit() {
        return CharType::Digit;
    }
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | '-'
            | '!'
            | '?'
            | ':'
            | '\''
            | '"'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '/'
            | '&'
            | '\u{00AB}' // «
            | '\u{00AD}' // SOFT HYPHEN
            | '\u{00BB}' // »
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2013}' // EN DASH
            | '\u{2014}' // EM DASH
            | '\u{2018}'
            | '\u{2019}'
            | '\u{201A}' // ‚ (Czech low quote)
            | '\u{201C}'
            | '\u{201D}'
            | '\u{201E}' // „
            | '\u{2026}' // HORIZONTAL ELLIPSIS
    )
}

/// Check whether a character is a whitespace character.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// Hyphenation offsets are character offsets into the caller's word, so case
// folding must stay one-to-one. `char::to_lowercase` may expand a character
// (U+0130 -> "i\u{307}"); only the first character of the expansion is kept.
// ---------------------------------------------------------------------------

/// Convert a character to its simple (one-to-one) lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Lowercase a word character by character, preserving its length.
pub fn lower_word(word: &[char]) -> Vec<char> {
    word.iter().map(|&c| simple_lower(c)).collect()
}
