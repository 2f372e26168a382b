//! Game configuration
//!
//! Word length, attempt limit and vocabulary are passed to each session
//! explicitly rather than read from globals.

use crate::core::{WORD_LENGTH, Word};
use crate::wordlists::{WORDS, loader::words_from_slice};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Default number of attempts per game
pub const MAX_ATTEMPTS: usize = 6;

/// Settings shared by every game in a series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    max_attempts: usize,
    vocabulary: Vec<Word>,
}

/// Error type for unusable configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroAttempts,
    EmptyVocabulary { word_length: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroAttempts => write!(f, "At least one attempt per game is required"),
            Self::EmptyVocabulary { word_length } => {
                write!(f, "Vocabulary has no valid {word_length}-letter words")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Build a configuration from a word list
    ///
    /// Words that are not `word_length` letters are dropped.
    ///
    /// # Errors
    /// Returns `ConfigError` if `max_attempts` is zero or no usable words remain.
    pub fn from_words(
        words: &[&str],
        word_length: usize,
        max_attempts: usize,
    ) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        let vocabulary = words_from_slice(words, word_length);
        if vocabulary.is_empty() {
            return Err(ConfigError::EmptyVocabulary { word_length });
        }

        Ok(Self {
            word_length,
            max_attempts,
            vocabulary,
        })
    }

    /// Embedded vocabulary with a custom attempt limit
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroAttempts` if `max_attempts` is zero.
    pub fn with_max_attempts(max_attempts: usize) -> Result<Self, ConfigError> {
        Self::from_words(WORDS, WORD_LENGTH, max_attempts)
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    /// Pick a secret word uniformly from the vocabulary
    ///
    /// Returns `None` only if the vocabulary is empty.
    #[must_use]
    pub fn choose_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.vocabulary.choose(rng)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_attempts: MAX_ATTEMPTS,
            vocabulary: words_from_slice(WORDS, WORD_LENGTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.word_length(), 5);
        assert_eq!(config.max_attempts(), 6);
        assert_eq!(config.vocabulary().len(), WORDS.len());
    }

    #[test]
    fn from_words_filters_by_length() {
        let config = GameConfig::from_words(&["pear", "apple", "plum"], 4, 3).unwrap();
        assert_eq!(config.vocabulary().len(), 2);
        assert_eq!(config.max_attempts(), 3);
    }

    #[test]
    fn rejects_zero_attempts() {
        assert_eq!(
            GameConfig::from_words(&["apple"], 5, 0),
            Err(ConfigError::ZeroAttempts)
        );
        assert_eq!(
            GameConfig::with_max_attempts(0),
            Err(ConfigError::ZeroAttempts)
        );
    }

    #[test]
    fn rejects_empty_vocabulary() {
        assert_eq!(
            GameConfig::from_words(&["toolong", "ab"], 5, 6),
            Err(ConfigError::EmptyVocabulary { word_length: 5 })
        );
    }

    #[test]
    fn secret_comes_from_vocabulary() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let secret = config.choose_secret(&mut rng).unwrap();
            assert!(config.vocabulary().contains(secret));
        }
    }

    #[test]
    fn seeded_choice_is_reproducible() {
        let config = GameConfig::default();
        let first = config.choose_secret(&mut StdRng::seed_from_u64(42)).cloned();
        let second = config.choose_secret(&mut StdRng::seed_from_u64(42)).cloned();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn empty_vocabulary_has_no_secret() {
        let config = GameConfig {
            vocabulary: Vec::new(),
            ..GameConfig::default()
        };
        assert_eq!(config.choose_secret(&mut StdRng::seed_from_u64(1)), None);
    }
}
