// Text token types produced by the text tokenizer.

/// Token types for text tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// A run of word characters of the active language; may be hyphenated.
    Word,
    /// A URL or e-mail address; never hyphenated.
    Url,
    /// Whitespace run.
    Whitespace,
    /// Punctuation run.
    Punctuation,
    /// Anything else: digits, symbols, letters foreign to the language.
    Unknown,
}

/// A text token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of this token.
    pub token_type: TokenType,

    /// The text content of this token.
    pub text: String,

    /// Position of this token within the text (character offset).
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(token_type: TokenType, text: impl Into<String>, pos: usize) -> Self {
        Self {
            token_type,
            text: text.into(),
            pos,
        }
    }

    /// Whether the hyphenator should look at this token.
    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_token() {
        let t = Token::new(TokenType::Word, "přednáška", 4);
        assert_eq!(t.text, "přednáška");
        assert_eq!(t.pos, 4);
        assert!(t.is_word());
    }

    #[test]
    fn non_word_tokens() {
        assert!(!Token::new(TokenType::Url, "www.seznam.cz", 0).is_word());
        assert!(!Token::new(TokenType::Whitespace, " ", 0).is_word());
    }
}
