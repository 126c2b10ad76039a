// Per-language hyphenation metadata.

use hyfen_core::character::simple_lower;

use crate::PatternError;

/// Metadata that travels with a language's pattern table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Language identifier, lowercase (e.g. `"cs"`, `"sv"`).
    pub tag: String,

    /// Minimum number of letters before the first break.
    pub left_min: usize,

    /// Minimum number of letters after the last break.
    pub right_min: usize,

    /// Shortest pattern, in letters, the matcher tries.
    pub shortest_pattern: usize,

    /// Longest pattern, in letters, the matcher tries.
    pub longest_pattern: usize,

    /// Non-ASCII letters that belong to words of this language.
    pub special_chars: Vec<char>,
}

impl LanguageProfile {
    pub fn new(
        tag: &str,
        left_min: usize,
        right_min: usize,
        shortest_pattern: usize,
        longest_pattern: usize,
        special_chars: &str,
    ) -> Self {
        let mut special: Vec<char> = special_chars.chars().map(simple_lower).collect();
        special.sort_unstable();
        special.dedup();
        Self {
            tag: tag.to_ascii_lowercase(),
            left_min,
            right_min,
            shortest_pattern,
            longest_pattern,
            special_chars: special,
        }
    }

    /// Check the profile invariants: both margins and the shortest pattern
    /// are at least 1, and shortest <= longest.
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.tag.is_empty() {
            return Err(PatternError::InvalidProfile("empty language tag".into()));
        }
        if self.left_min < 1 || self.right_min < 1 {
            return Err(PatternError::InvalidProfile(format!(
                "{}: leftmin and rightmin must be at least 1 (got {} and {})",
                self.tag, self.left_min, self.right_min
            )));
        }
        if self.shortest_pattern < 1 || self.shortest_pattern > self.longest_pattern {
            return Err(PatternError::InvalidProfile(format!(
                "{}: pattern bounds {}..={} are empty",
                self.tag, self.shortest_pattern, self.longest_pattern
            )));
        }
        Ok(())
    }

    /// Whether `c` (any case) is one of the profile's special letters.
    pub fn is_special_char(&self, c: char) -> bool {
        self.special_chars.binary_search(&simple_lower(c)).is_ok()
    }
}
