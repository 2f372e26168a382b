//! Best-known status per letter
//!
//! Collects what the player has learned so far in a game. Used for the
//! on-screen keyboard only; it plays no part in deciding a win or loss.

use super::{GuessResult, LetterStatus};
use rustc_hash::FxHashMap;

/// Letter → highest-ranked status seen in the current game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterKnowledge {
    best: FxHashMap<u8, LetterStatus>,
}

impl LetterKnowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a new result in
    ///
    /// A stored status is only replaced by a strictly higher-ranked one.
    /// Letters absent from `result` are left as they were.
    pub fn update(&mut self, result: &GuessResult) {
        for &(letter, status) in result.marks() {
            self.best
                .entry(letter)
                .and_modify(|best| *best = (*best).max(status))
                .or_insert(status);
        }
    }

    /// Best status seen for `letter`, if it has been guessed
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<LetterStatus> {
        self.best.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
