// Tokenizer for text hyphenation
//
// Splits running text into word, URL, whitespace, punctuation and unknown
// tokens. Only word tokens are handed to the hyphenator; everything else is
// copied through unchanged.

use hyfen_core::character::{CharType, get_char_type, is_apostrophe};
use hyfen_core::token::{Token, TokenType};

// ============================================================================
// URL / Email detection
// ============================================================================

/// Characters outside the letter/digit/whitespace/punctuation classes that
/// may appear in an e-mail address.
fn is_email_unknown_char(c: char) -> bool {
    matches!(
        c,
        '#' | '$' | '%' | '*' | '+' | '=' | '^' | '_' | '`' | '|' | '~'
    )
}

/// Punctuation allowed in e-mail addresses.
fn is_email_punctuation_char(c: char) -> bool {
    matches!(c, '!' | '&' | '\'' | '-' | '/' | '?' | '{' | '}' | '.')
}

/// "Unknown" characters allowed in URLs.
fn is_url_unknown_char(c: char) -> bool {
    matches!(c, '=' | '#' | '%' | '~' | '_' | '+' | '@')
}

fn is_space_or_end(text: &[char], i: usize) -> bool {
    text.get(i)
        .is_none_or(|&c| get_char_type(c) == CharType::Whitespace)
}

/// Try to find a URL (`http://`, `https://`, `www.`) at the start of `text`.
///
/// Returns `None` when `text` has no URL prefix, otherwise the URL length
/// (0 for a bare prefix).
fn find_url(text: &[char]) -> Option<usize> {
    let start = if starts_with_chars(text, &['h', 't', 't', 'p', 's', ':', '/', '/']) {
        8
    } else if starts_with_chars(text, &['h', 't', 't', 'p', ':', '/', '/']) {
        7
    } else if starts_with_chars(text, &['w', 'w', 'w', '.']) {
        4
    } else {
        return None;
    };

    if text.len() <= start {
        return Some(0);
    }

    for (i, &c) in text.iter().enumerate().skip(start) {
        let inside = match get_char_type(c) {
            CharType::Whitespace => false,
            CharType::Unknown => is_url_unknown_char(c),
            CharType::Digit | CharType::Letter => true,
            // Sentence punctuation directly followed by whitespace or end of
            // text is not part of the URL.
            CharType::Punctuation => {
                !(matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | ')')
                    && is_space_or_end(text, i + 1))
            }
        };
        if !inside {
            return Some(i);
        }
    }
    Some(text.len())
}

/// Outcome of scanning for an e-mail address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EmailScan {
    /// Length of the address, 0 if there is none.
    len: usize,
    /// When `len` is 0: no address can start anywhere before this offset
    /// either. That is the first `@`, or where the scan stopped if it found
    /// none, since every later start reaches that point in the same state.
    barren: usize,
}

/// Scan for an e-mail address at the start of `text`: one `@`, at least one
/// inner `.` after it, and only address characters.
fn find_email(text: &[char]) -> EmailScan {
    let mut at = None;
    let mut found_dot = false;
    let mut end = text.len();

    for (i, &c) in text.iter().enumerate() {
        let inside = match get_char_type(c) {
            CharType::Digit | CharType::Letter => true,
            CharType::Whitespace => false,
            CharType::Unknown if c == '@' => {
                if let Some(first) = at {
                    return EmailScan {
                        len: 0,
                        barren: first,
                    };
                }
                at = Some(i);
                true
            }
            CharType::Unknown => is_email_unknown_char(c),
            CharType::Punctuation if c == '.' && at.is_some() => {
                // a dot right before whitespace ends the sentence, not the
                // domain
                let inner = !is_space_or_end(text, i + 1);
                found_dot |= inner;
                inner
            }
            CharType::Punctuation => is_email_punctuation_char(c),
        };
        if !inside {
            end = i;
            break;
        }
    }

    let len = if at.is_some() && found_dot && text.len() >= 6 {
        end
    } else {
        0
    };
    EmailScan {
        len,
        barren: at.unwrap_or(end),
    }
}

/// Check whether `text` starts with exactly the characters in `prefix`.
fn starts_with_chars(text: &[char], prefix: &[char]) -> bool {
    text.len() >= prefix.len() && text[..prefix.len()] == *prefix
}

// ============================================================================
// Word length detection
// ============================================================================

/// Length of the word starting at `text[0]`: a run of word characters in
/// which a single apostrophe may join two runs (`l'homme`, `rock'n'roll`).
fn word_length(text: &[char], is_word_char: &dyn Fn(char) -> bool) -> usize {
    let mut wlen = 0;
    while wlen < text.len() {
        let c = text[wlen];
        let joins = is_apostrophe(c) && text.get(wlen + 1).is_some_and(|&n| is_word_char(n));
        if is_word_char(c) || joins {
            wlen += 1;
        } else {
            break;
        }
    }
    wlen
}

// ============================================================================
// Token scanner
// ============================================================================

/// Tokenizer state over one text.
///
/// Remembers how far a failed e-mail scan has proven that no address can
/// start, so a long run without whitespace is scanned once rather than once
/// per word in it.
struct Scanner<'a> {
    text: &'a [char],
    is_word_char: &'a dyn Fn(char) -> bool,
    email_barrier: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a [char], is_word_char: &'a dyn Fn(char) -> bool) -> Self {
        Self {
            text,
            is_word_char,
            email_barrier: 0,
        }
    }

    /// Length of a URL or e-mail address starting at `pos`, or 0.
    fn url_or_email(&mut self, pos: usize) -> usize {
        let slice = &self.text[pos..];
        if let Some(len) = find_url(slice) {
            return len;
        }
        if pos < self.email_barrier {
            return 0;
        }
        let scan = find_email(slice);
        if scan.len == 0 {
            self.email_barrier = pos + scan.barren;
        }
        scan.len
    }

    fn next_token(&mut self, pos: usize) -> (TokenType, usize) {
        if pos >= self.text.len() {
            return (TokenType::Unknown, 0);
        }
        let is_word_char = self.is_word_char;
        let first = self.text[pos];
        let char_type = get_char_type(first);

        if matches!(char_type, CharType::Letter | CharType::Digit) {
            let url_length = self.url_or_email(pos);
            if url_length != 0 {
                return (TokenType::Url, url_length);
            }
        }

        let slice = &self.text[pos..];
        if is_word_char(first) {
            return (TokenType::Word, word_length(slice, is_word_char));
        }

        match char_type {
            CharType::Whitespace => {
                let len = slice
                    .iter()
                    .take_while(|&&c| get_char_type(c) == CharType::Whitespace)
                    .count();
                (TokenType::Whitespace, len)
            }
            CharType::Punctuation => (TokenType::Punctuation, 1),
            _ => {
                // Digits, symbols and letters foreign to the language run up
                // to the next word, whitespace or punctuation character.
                let len = 1 + slice[1..]
                    .iter()
                    .take_while(|&&c| {
                        !is_word_char(c)
                            && !matches!(
                                get_char_type(c),
                                CharType::Whitespace | CharType::Punctuation
                            )
                    })
                    .count();
                (TokenType::Unknown, len)
            }
        }
    }
}

// ============================================================================
// Public tokenizer API
// ============================================================================

/// Find the next token starting at position `pos` in the text.
///
/// Returns `(TokenType, token_length)`; the length is 0 only at end of text.
/// Use [`tokenize`] to split a whole text.
pub fn next_token(
    text: &[char],
    pos: usize,
    is_word_char: &dyn Fn(char) -> bool,
) -> (TokenType, usize) {
    Scanner::new(text, is_word_char).next_token(pos)
}

/// Split `text` into tokens. Concatenating the token texts reproduces
/// `text` exactly.
pub fn tokenize(text: &str, is_word_char: impl Fn(char) -> bool) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut scanner = Scanner::new(&chars, &is_word_char);
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        let (token_type, len) = scanner.next_token(pos);
        let text: String = chars[pos..pos + len].iter().collect();
        tokens.push(Token::new(token_type, text, pos));
        pos += len;
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn czech_letter(c: char) -> bool {
        c.is_ascii_alphabetic() || "ěščřžýáíéúůťďňóĚŠČŘŽÝÁÍÉÚŮŤĎŇÓ".contains(c)
    }

    fn url_or_email(text: &str) -> usize {
        let text = chars(text);
        Scanner::new(&text, &czech_letter).url_or_email(0)
    }

    fn kinds(text: &str) -> Vec<(TokenType, String)> {
        tokenize(text, czech_letter)
            .into_iter()
            .map(|t| (t.token_type, t.text))
            .collect()
    }

    // -- URL / email --

    #[test]
    fn url_http() {
        let text = "http://www.example.com/page";
        assert_eq!(url_or_email(text), text.len());
    }

    #[test]
    fn url_www_stops_at_trailing_dot() {
        assert_eq!(url_or_email("www.seznam.cz. Další"), 13);
    }

    #[test]
    fn url_bare_prefix() {
        assert_eq!(url_or_email("www."), 0);
        assert_eq!(find_url(&chars("www.")), Some(0));
        assert_eq!(find_url(&chars("wwwx")), None);
    }

    #[test]
    fn email_simple() {
        let text = "jan.novak@example.cz";
        assert_eq!(url_or_email(text), text.len());
    }

    #[test]
    fn email_stops_at_sentence_end() {
        assert_eq!(url_or_email("info@example.se. Tack"), 15);
        assert_eq!(url_or_email("info@example.cz, díky"), 15);
    }

    #[test]
    fn email_needs_dot_after_at() {
        assert_eq!(url_or_email("user@localhost"), 0);
    }

    #[test]
    fn email_rejects_second_at() {
        let scan = find_email(&chars("a@b.cz@d.cz"));
        assert_eq!(scan, EmailScan { len: 0, barren: 1 });
    }

    #[test]
    fn plain_word_is_not_email() {
        assert_eq!(url_or_email("dokumentace, "), 0);
    }

    #[test]
    fn failed_email_scan_covers_the_run() {
        let scan = find_email(&chars("ab-cd-ef gh"));
        assert_eq!(scan, EmailScan { len: 0, barren: 8 });
        let scan = find_email(&chars("ab-cd@ef gh"));
        assert_eq!(scan, EmailScan { len: 0, barren: 5 });
    }

    #[test]
    fn email_after_failed_scan_is_still_found() {
        // the scan from "ab" fails at the second '@', "cd@ex.cz" starts past it
        assert_eq!(
            kinds("ab@x@cd@ex.cz"),
            vec![
                (TokenType::Word, "ab".to_string()),
                (TokenType::Unknown, "@".to_string()),
                (TokenType::Word, "x".to_string()),
                (TokenType::Unknown, "@".to_string()),
                (TokenType::Url, "cd@ex.cz".to_string()),
            ]
        );
    }

    // -- word length --

    #[test]
    fn word_length_stops_at_non_word() {
        assert_eq!(word_length(&chars("počítač, myš"), &czech_letter), 7);
    }

    #[test]
    fn word_length_keeps_inner_apostrophe() {
        assert_eq!(word_length(&chars("l'homme"), &czech_letter), 7);
        assert_eq!(word_length(&chars("l\u{2019}homme"), &czech_letter), 7);
        assert_eq!(word_length(&chars("dogs' "), &czech_letter), 4);
    }

    // -- tokenize --

    #[test]
    fn tokenize_sentence() {
        assert_eq!(
            kinds("Dobrý den, světe!"),
            vec![
                (TokenType::Word, "Dobrý".to_string()),
                (TokenType::Whitespace, " ".to_string()),
                (TokenType::Word, "den".to_string()),
                (TokenType::Punctuation, ",".to_string()),
                (TokenType::Whitespace, " ".to_string()),
                (TokenType::Word, "světe".to_string()),
                (TokenType::Punctuation, "!".to_string()),
            ]
        );
    }

    #[test]
    fn tokenize_url_and_email() {
        assert_eq!(
            kinds("viz https://example.cz/dokumentace nebo info@example.cz"),
            vec![
                (TokenType::Word, "viz".to_string()),
                (TokenType::Whitespace, " ".to_string()),
                (TokenType::Url, "https://example.cz/dokumentace".to_string()),
                (TokenType::Whitespace, " ".to_string()),
                (TokenType::Word, "nebo".to_string()),
                (TokenType::Whitespace, " ".to_string()),
                (TokenType::Url, "info@example.cz".to_string()),
            ]
        );
    }

    #[test]
    fn tokenize_digits_and_foreign_letters() {
        assert_eq!(
            kinds("abc123def Straße"),
            vec![
                (TokenType::Word, "abc".to_string()),
                (TokenType::Unknown, "123".to_string()),
                (TokenType::Word, "def".to_string()),
                (TokenType::Whitespace, " ".to_string()),
                (TokenType::Word, "Stra".to_string()),
                (TokenType::Unknown, "ß".to_string()),
                (TokenType::Word, "e".to_string()),
            ]
        );
    }

    #[test]
    fn tokenize_positions_are_char_offsets() {
        let tokens = tokenize("řeč a", czech_letter);
        let positions: Vec<usize> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![0, 3, 4]);
    }

    #[test]
    fn tokenize_reproduces_text() {
        let text = "„Příliš žluťoučký kůň“ — úpěl 3× (www.kun.cz)…";
        let joined: String = tokenize(text, czech_letter)
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn tokenize_long_run_in_linear_time() {
        let text = "ab-".repeat(20_000);
        let started = std::time::Instant::now();
        let tokens = tokenize(&text, czech_letter);
        assert_eq!(tokens.len(), 40_000);
        let mut words = tokens.iter().step_by(2);
        assert!(words.all(|t| t.is_word() && t.text == "ab"));
        assert!(
            started.elapsed() < std::time::Duration::from_secs(2),
            "tokenizing {} chars took {:?}",
            text.len(),
            started.elapsed()
        );
    }

    #[test]
    fn tokenize_empty() {
        assert!(tokenize("", czech_letter).is_empty());
        assert_eq!(next_token(&[], 0, &czech_letter), (TokenType::Unknown, 0));
    }
}
