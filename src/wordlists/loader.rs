//! Word list conversion utilities

use crate::core::Word;

/// Convert a string slice to Words of the given length
///
/// Entries that are not valid words of `length` letters are skipped.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS, 5);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s.trim(), length).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"], 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_respects_length() {
        let words = words_from_slice(&["pear", "crane", "plum"], 4);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["pear", "plum"]);
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[], 5).is_empty());
    }
}
