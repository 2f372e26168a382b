//! Terminal output formatting
//!
//! Colour-coded tiles, the keyboard summary and the game's screens.

pub mod display;
pub mod formatters;

pub use display::{board_lines, outcome_lines, series_lines, welcome_lines};
pub use formatters::RenderOptions;
