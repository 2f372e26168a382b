//! Game flow
//!
//! Configuration, the per-game state machine and series statistics.

mod config;
mod series;
mod session;

pub use config::{ConfigError, GameConfig, MAX_ATTEMPTS};
pub use series::SeriesStats;
pub use session::{GameSession, GameState, GuessError};
