//! Command implementations

pub mod play;

pub use play::{play_game, run_series};
