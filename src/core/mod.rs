//! Core domain types for the guessing game
//!
//! Pure, I/O-free types: words, per-letter feedback and the letter knowledge
//! accumulated over a game.

mod feedback;
mod knowledge;
mod word;

pub use feedback::{GuessResult, LetterStatus};
pub use knowledge::LetterKnowledge;
pub use word::{WORD_LENGTH, Word, WordError};
