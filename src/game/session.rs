//! Single-game state machine
//!
//! A session starts in `AwaitingGuess` and ends in `Won` or `Lost`. Each
//! valid guess is evaluated, logged and folded into the letter knowledge.
//! Invalid input is rejected without using up an attempt.

use super::GameConfig;
use crate::core::{GuessResult, LetterKnowledge, Word, WordError};
use log::debug;
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    Won { attempts: usize },
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Wrong length or non-alphabetic input
    InvalidWord(WordError),
    /// The game already ended
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "{e}"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            Self::GameOver => None,
        }
    }
}

impl From<WordError> for GuessError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

/// One game against one secret word
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    word_length: usize,
    max_attempts: usize,
    history: Vec<(Word, GuessResult)>,
    knowledge: LetterKnowledge,
    state: GameState,
}

impl GameSession {
    /// Start a new game
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameConfig, GameSession, GameState};
    ///
    /// let config = GameConfig::default();
    /// let mut session = GameSession::new(Word::new("apple").unwrap(), &config);
    ///
    /// assert_eq!(session.submit_guess("angle"), Ok(GameState::AwaitingGuess));
    /// assert_eq!(session.submit_guess("APPLE"), Ok(GameState::Won { attempts: 2 }));
    /// ```
    #[must_use]
    pub fn new(secret: Word, config: &GameConfig) -> Self {
        debug!("new game: secret={secret}");
        Self {
            secret,
            word_length: config.word_length(),
            max_attempts: config.max_attempts(),
            history: Vec::with_capacity(config.max_attempts()),
            knowledge: LetterKnowledge::new(),
            state: GameState::AwaitingGuess,
        }
    }

    /// Submit a raw line of input as the next guess
    ///
    /// Surrounding whitespace is ignored and case is normalized. Only a valid
    /// guess counts as an attempt.
    ///
    /// # Errors
    /// - `GuessError::InvalidWord` if the input is the wrong length or not all letters
    /// - `GuessError::GameOver` if the game has already been won or lost
    pub fn submit_guess(&mut self, input: &str) -> Result<GameState, GuessError> {
        if self.state.is_over() {
            return Err(GuessError::GameOver);
        }

        let guess = Word::with_length(input.trim(), self.word_length)?;
        let result = GuessResult::evaluate(&guess, &self.secret);

        self.knowledge.update(&result);
        let solved = result.is_solved();
        debug!(
            "attempt {}: {guess} -> {}",
            self.history.len() + 1,
            result.to_emoji()
        );
        self.history.push((guess, result));

        self.state = if solved {
            GameState::Won {
                attempts: self.attempts(),
            }
        } else if self.attempts() >= self.max_attempts {
            GameState::Lost
        } else {
            GameState::AwaitingGuess
        };

        Ok(self.state)
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Valid guesses made so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts())
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Guesses and their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, GuessResult)] {
        &self.history
    }

    #[must_use]
    pub const fn knowledge(&self) -> &LetterKnowledge {
        &self.knowledge
    }
}
