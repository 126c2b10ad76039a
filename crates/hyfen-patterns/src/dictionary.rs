// Decoded pattern dictionary: exact letters-to-weights lookup.

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use hyfen_core::character::{ELISION_MARKER, is_marker};

use crate::PatternError;
use crate::format::{PackedTable, decode_chunk};
use crate::profile::LanguageProfile;

/// Immutable mapping from pattern letters (digits stripped) to weight slots.
///
/// Patterns are grouped by letter count so a lookup only hashes into the
/// bucket of the substring's length. Each weight slice has one entry more
/// than its pattern has letters (see [`crate::format::DecodedPattern`]).
///
/// The dictionary is built once and never mutated afterwards; it is
/// `Send + Sync` and can be shared between any number of readers.
#[derive(Debug, Clone)]
pub struct PatternDictionary {
    by_length: Vec<HashMap<Box<[char]>, Box<[u8]>>>,
    alphabet: Vec<char>,
    count: usize,
    elision: bool,
}

impl PatternDictionary {
    /// Decode a packed table under the bounds of `profile`.
    ///
    /// Every pattern must have between `shortest_pattern` and
    /// `longest_pattern` letters; a pattern outside those bounds could never
    /// be matched and is reported as malformed. A pattern listed twice keeps
    /// the larger weight in every slot.
    pub fn load(
        table: &PackedTable<'_>,
        profile: &LanguageProfile,
    ) -> Result<Self, PatternError> {
        profile.validate()?;

        let mut by_length: Vec<HashMap<Box<[char]>, Box<[u8]>>> =
            (0..=profile.longest_pattern).map(|_| HashMap::new()).collect();
        let mut alphabet = Vec::new();
        let mut count = 0;
        let mut elision = false;

        for chunk in table.chunks()? {
            let decoded = decode_chunk(chunk)?;
            let n = decoded.letters.len();
            if n < profile.shortest_pattern || n > profile.longest_pattern {
                return Err(PatternError::malformed(
                    chunk,
                    "pattern length outside the profile bounds",
                ));
            }

            elision |= decoded.letters.first() == Some(&ELISION_MARKER);
            alphabet.extend(decoded.letters.iter().copied().filter(|&c| !is_marker(c)));

            match by_length[n].entry(decoded.letters.into_boxed_slice()) {
                Entry::Occupied(mut entry) => {
                    for (old, new) in entry.get_mut().iter_mut().zip(decoded.weights) {
                        *old = (*old).max(new);
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(decoded.weights.into_boxed_slice());
                    count += 1;
                }
            }
        }

        alphabet.sort_unstable();
        alphabet.dedup();

        log::debug!(
            "decoded {} patterns for {:?} ({} letters in alphabet)",
            count,
            profile.tag,
            alphabet.len()
        );

        Ok(Self {
            by_length,
            alphabet,
            count,
            elision,
        })
    }

    /// Weight slots of the pattern whose letters are exactly `letters`.
    pub fn lookup(&self, letters: &[char]) -> Option<&[u8]> {
        self.by_length
            .get(letters.len())?
            .get(letters)
            .map(|weights| &**weights)
    }

    /// All patterns with exactly `n` letters, in unspecified order.
    pub fn patterns_of_length(&self, n: usize) -> impl Iterator<Item = (&[char], &[u8])> + '_ {
        self.by_length
            .get(n)
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (&**k, &**v)))
    }

    /// Number of distinct patterns.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Letter count of the shortest pattern actually present.
    pub fn shortest(&self) -> Option<usize> {
        self.by_length.iter().position(|bucket| !bucket.is_empty())
    }

    /// Letter count of the longest pattern actually present.
    pub fn longest(&self) -> Option<usize> {
        self.by_length.iter().rposition(|bucket| !bucket.is_empty())
    }

    /// Every letter used by some pattern, boundary markers excluded. Sorted.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Whether some pattern is anchored to the start of an elided segment
    /// (first letter `'`).
    pub fn has_elision_patterns(&self) -> bool {
        self.elision
    }

    /// Whether `c` occurs in some pattern.
    pub fn has_letter(&self, c: char) -> bool {
        self.alphabet.binary_search(&c).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn profile(longest: usize) -> LanguageProfile {
        LanguageProfile::new("xx", 2, 2, 1, longest, "")
    }

    fn load(
        buckets: &[(usize, &str)],
        longest: usize,
    ) -> Result<PatternDictionary, PatternError> {
        PatternDictionary::load(&PackedTable::new(buckets), &profile(longest))
    }

    #[test]
    fn load_and_lookup() {
        let dict = load(&[(2, "a11f"), (5, "tio2n"), (4, "n1at")], 4).unwrap();
        assert_eq!(dict.len(), 4);
        assert_eq!(dict.lookup(&chars("a")), Some(&[0, 1][..]));
        assert_eq!(dict.lookup(&chars("f")), Some(&[1, 0][..]));
        assert_eq!(dict.lookup(&chars("tion")), Some(&[0, 0, 0, 2, 0][..]));
        assert_eq!(dict.lookup(&chars("nat")), Some(&[0, 1, 0, 0][..]));
        assert_eq!(dict.lookup(&chars("tio")), None);
        assert_eq!(dict.lookup(&chars("nationalities")), None);
    }

    #[test]
    fn duplicates_keep_maximum() {
        let dict = load(&[(5, "a1b2c"), (5, "a3bc0")], 3).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.lookup(&chars("abc")), Some(&[0, 3, 2, 0][..]));

        let reversed = load(&[(5, "a3bc0"), (5, "a1b2c")], 3).unwrap();
        assert_eq!(reversed.lookup(&chars("abc")), dict.lookup(&chars("abc")));
    }

    #[test]
    fn patterns_of_length_filters() {
        let dict = load(&[(2, "a11f"), (3, "_b4")], 4).unwrap();
        let mut one: Vec<String> = dict
            .patterns_of_length(1)
            .map(|(k, _)| k.iter().collect())
            .collect();
        one.sort();
        assert_eq!(one, vec!["a", "f"]);
        assert_eq!(dict.patterns_of_length(2).count(), 1);
        assert_eq!(dict.patterns_of_length(3).count(), 0);
        assert_eq!(dict.patterns_of_length(99).count(), 0);
    }

    #[test]
    fn observed_bounds_and_alphabet() {
        let dict = load(&[(3, "_b4"), (5, "a1b2c")], 6).unwrap();
        assert_eq!(dict.shortest(), Some(2));
        assert_eq!(dict.longest(), Some(3));
        assert_eq!(dict.alphabet(), &['a', 'b', 'c']);
        assert!(dict.has_letter('b'));
        assert!(!dict.has_letter('_'));
    }

    #[test]
    fn elision_patterns_are_flagged() {
        assert!(load(&[(4, "'a4b")], 4).unwrap().has_elision_patterns());
        assert!(!load(&[(4, "_a4b")], 4).unwrap().has_elision_patterns());
    }

    #[test]
    fn empty_table() {
        let dict = load(&[], 4).unwrap();
        assert!(dict.is_empty());
        assert_eq!(dict.shortest(), None);
        assert_eq!(dict.lookup(&chars("a")), None);
    }

    #[test]
    fn reject_pattern_longer_than_profile() {
        let err = load(&[(7, "abc1def")], 5).unwrap_err();
        assert!(matches!(
            err,
            PatternError::Malformed {
                reason: "pattern length outside the profile bounds",
                ..
            }
        ));
    }

    #[test]
    fn reject_pattern_shorter_than_profile() {
        let p = LanguageProfile::new("xx", 2, 2, 2, 5, "");
        let err = PatternDictionary::load(&PackedTable::new(&[(2, "a1")]), &p).unwrap_err();
        assert!(matches!(err, PatternError::Malformed { .. }));
    }

    #[test]
    fn reject_invalid_profile_before_decoding() {
        let p = LanguageProfile::new("xx", 0, 2, 1, 5, "");
        let err = PatternDictionary::load(&PackedTable::new(&[(2, "a1")]), &p).unwrap_err();
        assert!(matches!(err, PatternError::InvalidProfile(_)));
    }

    #[test]
    fn reject_ragged_bucket() {
        assert!(matches!(
            load(&[(3, "_b4_d")], 4).unwrap_err(),
            PatternError::RaggedBucket { .. }
        ));
    }

    #[test]
    fn dictionary_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatternDictionary>();
    }
}
