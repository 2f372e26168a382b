//! Wordle Game
//!
//! A terminal word-guessing game, plus a small Fibonacci evaluator.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GuessResult, LetterStatus, Word};
//! use wordle_game::fibonacci::fibonacci;
//!
//! let secret = Word::new("mango").unwrap();
//! let guess = Word::new("ocean").unwrap();
//! let result = GuessResult::evaluate(&guess, &secret);
//! assert_eq!(result.count(LetterStatus::Misplaced), 3);
//!
//! assert_eq!(fibonacci(12), Ok(144));
//! ```

// Core domain types
pub mod core;

// Fibonacci evaluator
pub mod fibonacci;

// Game state machine and configuration
pub mod game;

// Embedded vocabulary
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Console I/O boundary
pub mod interactive;
