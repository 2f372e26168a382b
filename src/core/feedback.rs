//! Guess evaluation
//!
//! Compares a guess against the secret and classifies every letter:
//! - Correct: same letter at the same position
//! - Misplaced: letter is in the secret but somewhere else
//! - Absent: letter is not in the secret, or all its occurrences are used up

use super::Word;

/// Feedback for a single letter
///
/// Variants are declared in rank order so `Ord` gives
/// `Absent < Misplaced < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Misplaced,
    Correct,
}

impl LetterStatus {
    /// Emoji square for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    marks: Vec<(u8, LetterStatus)>,
}

impl GuessResult {
    /// Evaluate `guess` against `secret`
    ///
    /// Duplicate letters are handled with an availability count built from the
    /// secret, so a letter is never credited more often than it occurs there.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the pool
    /// 2. Second pass, left to right: mark Misplaced while the pool still has
    ///    the letter, otherwise Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessResult, LetterStatus, Word};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Word::new("angle").unwrap();
    /// let result = GuessResult::evaluate(&guess, &secret);
    ///
    /// use LetterStatus::{Absent, Correct};
    /// assert_eq!(
    ///     result.statuses().collect::<Vec<_>>(),
    ///     [Correct, Absent, Absent, Correct, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

        let guess_chars = guess.chars();
        let secret_chars = secret.chars();
        let mut statuses = vec![LetterStatus::Absent; guess_chars.len()];
        let mut available = secret.char_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess_chars.iter().zip(secret_chars).enumerate() {
            if g == s {
                statuses[i] = LetterStatus::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: letters present elsewhere, while occurrences remain
        for (i, &g) in guess_chars.iter().enumerate() {
            if statuses[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                statuses[i] = LetterStatus::Misplaced;
                *count -= 1;
            }
        }

        Self {
            marks: guess_chars.iter().copied().zip(statuses).collect(),
        }
    }

    /// Letter and status for every position, in guess order
    #[must_use]
    pub fn marks(&self) -> &[(u8, LetterStatus)] {
        &self.marks
    }

    /// Statuses in guess order
    pub fn statuses(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.marks.iter().map(|&(_, status)| status)
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.statuses().all(|status| status == LetterStatus::Correct)
    }

    /// Number of positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.statuses().filter(|&s| s == status).count()
    }

    /// Emoji row like "🟩⬜⬜🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses().map(LetterStatus::emoji).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Misplaced};

    fn evaluate(guess: &str, secret: &str) -> Vec<LetterStatus> {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        GuessResult::evaluate(&guess, &secret).statuses().collect()
    }

    #[test]
    fn status_rank_order() {
        assert!(Correct > Misplaced);
        assert!(Misplaced > Absent);
        assert_eq!(Correct.max(Absent), Correct);
    }

    #[test]
    fn exact_guess_is_all_correct() {
        for word in ["crane", "apple", "aaaaa", "mango"] {
            let w = Word::new(word).unwrap();
            let result = GuessResult::evaluate(&w, &w);
            assert!(result.is_solved());
            assert_eq!(result.count(Correct), 5);
        }
    }

    #[test]
    fn disjoint_guess_is_all_absent() {
        assert_eq!(evaluate("fghij", "abcde"), [Absent; 5]);
        assert!(!GuessResult::evaluate(
            &Word::new("fghij").unwrap(),
            &Word::new("abcde").unwrap()
        )
        .is_solved());
    }

    #[test]
    fn apple_angle() {
        assert_eq!(
            evaluate("angle", "apple"),
            [Correct, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn mango_ocean() {
        // o, a and n are all in MANGO but none line up
        assert_eq!(
            evaluate("ocean", "mango"),
            [Misplaced, Absent, Absent, Misplaced, Misplaced]
        );
    }

    #[test]
    fn duplicate_guess_letters_limited_by_secret() {
        // SPEED vs ERASE: both E's misplaced, ERASE has two
        assert_eq!(
            evaluate("speed", "erase"),
            [Misplaced, Absent, Misplaced, Misplaced, Absent]
        );
        // Only one L and one A in ANGLE: the repeats come back absent
        assert_eq!(
            evaluate("llama", "angle"),
            [Misplaced, Absent, Misplaced, Absent, Absent]
        );
    }

    #[test]
    fn correct_consumes_before_misplaced() {
        // ROBOT vs FLOOR: second O is exact, first O takes the remaining one
        assert_eq!(
            evaluate("robot", "floor"),
            [Misplaced, Misplaced, Absent, Correct, Absent]
        );
        // Both P's in APPLE are matched exactly, none left for the rest
        assert_eq!(
            evaluate("ppppp", "apple"),
            [Absent, Correct, Correct, Absent, Absent]
        );
    }

    #[test]
    fn marks_never_exceed_secret_occurrences() {
        let words = ["apple", "speed", "erase", "llama", "aaaaa", "eerie", "robot", "floor"];
        for secret in words {
            let secret_word = Word::new(secret).unwrap();
            let counts = secret_word.char_counts();
            for guess in words {
                let result = GuessResult::evaluate(&Word::new(guess).unwrap(), &secret_word);
                for letter in b'a'..=b'z' {
                    let credited = result
                        .marks()
                        .iter()
                        .filter(|&&(l, s)| l == letter && s != Absent)
                        .count();
                    let available = usize::from(counts.get(&letter).copied().unwrap_or(0));
                    assert!(
                        credited <= available,
                        "{guess} vs {secret}: '{}' credited {credited} times",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn marks_preserve_guess_letters() {
        let result =
            GuessResult::evaluate(&Word::new("angle").unwrap(), &Word::new("apple").unwrap());
        let letters: Vec<u8> = result.marks().iter().map(|&(l, _)| l).collect();
        assert_eq!(letters, b"angle");
    }

    #[test]
    fn emoji_row() {
        let result =
            GuessResult::evaluate(&Word::new("ocean").unwrap(), &Word::new("mango").unwrap());
        assert_eq!(result.to_emoji(), "🟨⬜⬜🟨🟨");
    }
}
