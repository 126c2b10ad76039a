// Hyphenation module -- Liang pattern-matching hyphenation
//
// The hyphenator works by:
// 1. Splitting the word into segments of word characters of the language
// 2. Padding each lowercased segment with boundary markers and scoring every
//    gap with the maximum weight of all patterns matching around it
// 3. Keeping the odd-weighted gaps that respect the left/right margins

use hyfen_core::character::{BOUNDARY_MARKER, ELISION_MARKER, is_apostrophe, lower_word};
use hyfen_patterns::{LanguageProfile, PatternDictionary};

use crate::languages::Language;

// ---------------------------------------------------------------------------
// Hyphenation options
// ---------------------------------------------------------------------------

/// Configuration options for the pattern hyphenator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HyphenatorOptions {
    /// Overrides the profile's minimum number of letters before a break.
    /// Values below 1 are treated as 1.
    pub left_min: Option<usize>,

    /// Overrides the profile's minimum number of letters after a break.
    /// Values below 1 are treated as 1.
    pub right_min: Option<usize>,

    /// Word segments shorter than this get no hyphenation points.
    /// The default of 0 leaves the decision to the margins alone.
    pub min_word_length: usize,
}

// ---------------------------------------------------------------------------
// Hyphenator trait
// ---------------------------------------------------------------------------

/// Trait for hyphenation backends.
pub trait Hyphenator {
    /// Return the permitted break offsets of `word`, sorted and unique.
    ///
    /// Offset `i` means a hyphen may be inserted before `word[i]`.
    fn break_points(&self, word: &[char]) -> Vec<usize>;

    /// Return a string with one character per character of `word`:
    ///   `'-'` = hyphenation point before this character
    ///   `' '` = no hyphenation point
    fn hyphenation_pattern(&self, word: &[char]) -> String {
        let breaks = self.break_points(word);
        (0..word.len())
            .map(|i| {
                if breaks.binary_search(&i).is_ok() {
                    '-'
                } else {
                    ' '
                }
            })
            .collect()
    }

    /// Render `word` with `separator` inserted at every break point.
    fn insert_hyphens(&self, word: &[char], separator: &str) -> String {
        let breaks = self.break_points(word);
        let capacity = word.len() + breaks.len() * separator.len();
        let mut result = String::with_capacity(capacity);
        let mut next = breaks.iter().peekable();
        for (i, &c) in word.iter().enumerate() {
            if next.next_if(|&&b| b == i).is_some() {
                result.push_str(separator);
            }
            result.push(c);
        }
        result
    }
}

// ---------------------------------------------------------------------------
// LiangHyphenator
// ---------------------------------------------------------------------------

/// Pattern hyphenator for one language.
///
/// Cheap to construct: it borrows the language and copies the options, so
/// callers create one per request.
pub struct LiangHyphenator<'a> {
    language: &'a Language,
    options: HyphenatorOptions,
}

impl<'a> LiangHyphenator<'a> {
    pub fn new(language: &'a Language, options: HyphenatorOptions) -> Self {
        Self { language, options }
    }

    /// Effective left margin.
    pub fn left_min(&self) -> usize {
        self.options
            .left_min
            .unwrap_or(self.language.profile().left_min)
            .max(1)
    }

    /// Effective right margin.
    pub fn right_min(&self) -> usize {
        self.options
            .right_min
            .unwrap_or(self.language.profile().right_min)
            .max(1)
    }

    /// Breaks of one lowercased segment, relative to the segment start.
    fn segment_breaks(&self, segment: &[char], start_marker: char) -> Vec<usize> {
        let len = segment.len();
        let left = self.left_min();
        let right = self.right_min();
        if len < self.options.min_word_length || len < left + right {
            return Vec::new();
        }

        let mut padded = Vec::with_capacity(len + 2);
        padded.push(start_marker);
        padded.extend_from_slice(segment);
        padded.push(BOUNDARY_MARKER);

        let weights = score(self.language.dictionary(), self.language.profile(), &padded);
        (left..=len - right)
            .filter(|&gap| weights.permits_break(gap))
            .collect()
    }

    /// Keep only the offsets that respect both margins of a `len`-letter word.
    fn within_margins(&self, offsets: &[usize], len: usize) -> Vec<usize> {
        let left = self.left_min();
        let right = self.right_min();
        offsets
            .iter()
            .copied()
            .filter(|&o| o >= left && o + right <= len)
            .collect()
    }
}

impl Hyphenator for LiangHyphenator<'_> {
    fn break_points(&self, word: &[char]) -> Vec<usize> {
        if word.is_empty() {
            return Vec::new();
        }

        if word.len() < self.options.min_word_length {
            return Vec::new();
        }

        let lower = lower_word(word);

        if let Some(offsets) = self.language.exception(&lower) {
            log::trace!("exception hit for {:?}", word.iter().collect::<String>());
            return self.within_margins(offsets, word.len());
        }

        // Characters outside the language's alphabet are hard boundaries:
        // each run of word characters is hyphenated on its own.
        let mut breaks = Vec::new();
        let mut i = 0;
        while i < word.len() {
            if !self.language.is_word_char(word[i]) {
                i += 1;
                continue;
            }
            let start = i;
            while i < word.len() && self.language.is_word_char(word[i]) {
                i += 1;
            }
            // Segments after an apostrophe are padded with the elision marker
            // only for tables that carry `'`-anchored patterns; otherwise the
            // apostrophe is a plain word boundary.
            let marker = if start > 0
                && is_apostrophe(word[start - 1])
                && self.language.dictionary().has_elision_patterns()
            {
                ELISION_MARKER
            } else {
                BOUNDARY_MARKER
            };
            breaks.extend(
                self.segment_breaks(&lower[start..i], marker)
                    .into_iter()
                    .map(|b| b + start),
            );
        }
        breaks
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Per-word gap weights. Gap `i` lies between `padded[i]` and
/// `padded[i + 1]`; a padded word of `n + 2` characters has `n + 1` gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WeightVector {
    weights: Vec<u8>,
}

impl WeightVector {
    fn new(letters: usize) -> Self {
        Self {
            weights: vec![0; letters + 1],
        }
    }

    /// Raise gap `gap` to `weight` if that is higher. Gaps past the end of
    /// the padded word are ignored.
    fn raise(&mut self, gap: usize, weight: u8) {
        if let Some(slot) = self.weights.get_mut(gap) {
            *slot = (*slot).max(weight);
        }
    }

    pub(crate) fn permits_break(&self, gap: usize) -> bool {
        self.weights.get(gap).is_some_and(|w| w % 2 == 1)
    }

    #[cfg(test)]
    fn as_slice(&self) -> &[u8] {
        &self.weights
    }
}

/// Score every gap of `padded` (a segment with its two markers).
///
/// Each substring whose length lies within the profile's pattern bounds is
/// looked up exactly. Weight slot `j` of a pattern matched at `start` sits
/// in front of `padded[start + j]`, i.e. on gap `start + j - 1`; the slot in
/// front of the leading marker has no gap and is dropped.
pub(crate) fn score(
    dictionary: &PatternDictionary,
    profile: &LanguageProfile,
    padded: &[char],
) -> WeightVector {
    let mut weights = WeightVector::new(padded.len().saturating_sub(2));

    for start in 0..padded.len() {
        let longest = profile.longest_pattern.min(padded.len() - start);
        for len in profile.shortest_pattern..=longest {
            let Some(pattern) = dictionary.lookup(&padded[start..start + len]) else {
                continue;
            };
            for (slot, &weight) in pattern.iter().enumerate() {
                if let Some(gap) = (start + slot).checked_sub(1) {
                    weights.raise(gap, weight);
                }
            }
        }
    }
    weights
}
