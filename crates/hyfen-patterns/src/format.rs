// Packed pattern table format: bucket splitting and chunk decoding.
//
// A table is a list of buckets. Each bucket declares a chunk length `n` and
// holds the concatenation of chunks of exactly `n` characters, digits
// included. Bucket 2 of the Swedish table, "c21df21hx12y", is the six
// chunks "c2", "1d", "f2", "1h", "x1", "2y".

use hyfen_core::character::{BOUNDARY_MARKER, ELISION_MARKER, is_marker, weight_digit};

use crate::PatternError;

/// Pattern table in its packed, bucketed text form.
///
/// The table borrows its text so the built-in tables can stay in static
/// data; decoding happens once in [`crate::PatternDictionary::load`].
#[derive(Debug, Clone, Copy)]
pub struct PackedTable<'a> {
    buckets: &'a [(usize, &'a str)],
}

impl<'a> PackedTable<'a> {
    /// Wrap `(chunk_length, bucket_text)` pairs.
    pub const fn new(buckets: &'a [(usize, &'a str)]) -> Self {
        Self { buckets }
    }

    /// Iterate over every chunk of every bucket.
    ///
    /// Fails on the first bucket whose text cannot be cut into chunks of
    /// its declared length.
    pub fn chunks(&self) -> Result<Vec<&'a str>, PatternError> {
        let mut chunks = Vec::new();
        for &(length, text) in self.buckets {
            chunks.extend(split_bucket(length, text)?);
        }
        Ok(chunks)
    }
}

/// Cut one bucket into chunks of `length` characters.
pub fn split_bucket(length: usize, text: &str) -> Result<Vec<&str>, PatternError> {
    if length == 0 {
        return Err(PatternError::ZeroLengthBucket);
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, c) in text.char_indices() {
        count += 1;
        if count == length {
            let end = idx + c.len_utf8();
            chunks.push(&text[start..end]);
            start = end;
            count = 0;
        }
    }

    if count != 0 {
        return Err(PatternError::RaggedBucket {
            length,
            actual: text.chars().count(),
        });
    }
    Ok(chunks)
}

/// A chunk split into its letters and its weight slots.
///
/// `weights` has `letters.len() + 1` entries: slot `j` is the gap before
/// letter `j`, the last slot the gap after the final letter. Slots without
/// a digit in the chunk are 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPattern {
    pub letters: Vec<char>,
    pub weights: Vec<u8>,
}

/// Decode a single packed chunk such as `"_ex3"` or `"a1ti"`.
pub fn decode_chunk(chunk: &str) -> Result<DecodedPattern, PatternError> {
    let mut letters = Vec::with_capacity(chunk.len());
    let mut weights = vec![0u8];
    let mut prev_digit = false;
    let mut has_weight = false;

    for c in chunk.chars() {
        if let Some(w) = weight_digit(c) {
            if prev_digit {
                return Err(PatternError::malformed(chunk, "adjacent weight digits"));
            }
            // weights always holds letters.len() + 1 slots
            if let Some(slot) = weights.last_mut() {
                *slot = w;
            }
            prev_digit = true;
            has_weight = true;
        } else if is_marker(c) || c.is_alphabetic() {
            if c.is_uppercase() {
                return Err(PatternError::malformed(chunk, "uppercase letter"));
            }
            letters.push(c);
            weights.push(0);
            prev_digit = false;
        } else {
            return Err(PatternError::malformed(
                chunk,
                "character is neither a letter nor a weight digit",
            ));
        }
    }

    if letters.is_empty() {
        return Err(PatternError::malformed(chunk, "weight digits without letters"));
    }
    if letters.iter().all(|&c| is_marker(c)) {
        return Err(PatternError::malformed(chunk, "pattern has only boundary markers"));
    }
    if !has_weight {
        return Err(PatternError::malformed(chunk, "pattern carries no weight"));
    }

    let last = letters.len() - 1;
    for (i, &c) in letters.iter().enumerate() {
        if c == BOUNDARY_MARKER && i != 0 && i != last {
            return Err(PatternError::malformed(
                chunk,
                "word boundary marker inside pattern",
            ));
        }
        if c == ELISION_MARKER && i != 0 {
            return Err(PatternError::malformed(
                chunk,
                "elision marker not at pattern start",
            ));
        }
    }

    Ok(DecodedPattern { letters, weights })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(chunk: &str) -> (String, Vec<u8>) {
        let d = decode_chunk(chunk).unwrap();
        (d.letters.into_iter().collect(), d.weights)
    }

    #[test]
    fn split_swedish_pairs() {
        let chunks = split_bucket(2, "c21df21hx12y").unwrap();
        assert_eq!(chunks, vec!["c2", "1d", "f2", "1h", "x1", "2y"]);
    }

    #[test]
    fn split_counts_characters_not_bytes() {
        // "é1" and "1ň" are two characters but three bytes each
        let chunks = split_bucket(2, "é11ň").unwrap();
        assert_eq!(chunks, vec!["é1", "1ň"]);
    }

    #[test]
    fn split_empty_bucket() {
        assert!(split_bucket(3, "").unwrap().is_empty());
    }

    #[test]
    fn split_rejects_ragged_bucket() {
        let err = split_bucket(3, "_b4_d").unwrap_err();
        assert_eq!(
            err,
            PatternError::RaggedBucket {
                length: 3,
                actual: 5
            }
        );
    }

    #[test]
    fn split_rejects_zero_length() {
        let err = split_bucket(0, "a1").unwrap_err();
        assert_eq!(err, PatternError::ZeroLengthBucket);
    }

    #[test]
    fn decode_interior_weights() {
        assert_eq!(decoded("a1b2c"), ("abc".to_string(), vec![0, 1, 2, 0]));
    }

    #[test]
    fn decode_edge_weights() {
        assert_eq!(decoded("1d"), ("d".to_string(), vec![1, 0]));
        assert_eq!(decoded("a1"), ("a".to_string(), vec![0, 1]));
        assert_eq!(decoded("2b_"), ("b_".to_string(), vec![2, 0, 0]));
    }

    #[test]
    fn decode_anchored() {
        assert_eq!(decoded("_ex3"), ("_ex".to_string(), vec![0, 0, 0, 3]));
        assert_eq!(decoded("'a4"), ("'a".to_string(), vec![0, 0, 4]));
        assert_eq!(
            decoded("équiva4lent_"),
            ("équivalent_".to_string(), vec![0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0])
        );
    }

    #[test]
    fn decode_zero_weight_counts_as_weight() {
        assert_eq!(decoded("a0b"), ("ab".to_string(), vec![0, 0, 0]));
    }

    #[test]
    fn reject_adjacent_digits() {
        let err = decode_chunk("a12b").unwrap_err();
        assert!(matches!(
            err,
            PatternError::Malformed {
                reason: "adjacent weight digits",
                ..
            }
        ));
    }

    #[test]
    fn reject_digits_only() {
        assert!(matches!(
            decode_chunk("4").unwrap_err(),
            PatternError::Malformed {
                reason: "weight digits without letters",
                ..
            }
        ));
    }

    #[test]
    fn reject_corrupted_bytes() {
        // The French table in circulation carries mojibake such as "1c½0".
        let err = decode_chunk("1c½0").unwrap_err();
        assert_eq!(
            err,
            PatternError::Malformed {
                pattern: "1c½0".to_string(),
                reason: "character is neither a letter nor a weight digit",
            }
        );
    }

    #[test]
    fn reject_uppercase() {
        assert!(decode_chunk("A1b").is_err());
    }

    #[test]
    fn reject_missing_weight() {
        assert!(matches!(
            decode_chunk("abc").unwrap_err(),
            PatternError::Malformed {
                reason: "pattern carries no weight",
                ..
            }
        ));
    }

    #[test]
    fn reject_misplaced_markers() {
        assert!(decode_chunk("a_1b").is_err());
        assert!(decode_chunk("a'1b").is_err());
        assert!(decode_chunk("_1_").is_err());
    }

    #[test]
    fn packed_table_chunks() {
        let buckets = [(2, "a11f"), (3, "_b4")];
        let table = PackedTable::new(&buckets);
        assert_eq!(table.chunks().unwrap(), vec!["a1", "1f", "_b4"]);
    }
}
