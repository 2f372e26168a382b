//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterKnowledge, LetterStatus};
use colored::{ColoredString, Colorize};

/// Keyboard rows shown under the board
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// How output should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// ANSI colours; when off, statuses are shown with brackets instead
    pub color: bool,
}

impl RenderOptions {
    pub const PLAIN: Self = Self { color: false };
    pub const COLORED: Self = Self { color: true };
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::COLORED
    }
}

/// Apply `style` only when colour is enabled
#[must_use]
pub fn styled(text: &str, opts: RenderOptions, style: fn(&str) -> ColoredString) -> String {
    if opts.color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Format one letter as a three-character tile
///
/// Plain tiles: `[A]` correct, `(A)` misplaced, ` a ` absent, ` A ` unknown.
#[must_use]
pub fn letter_tile(letter: u8, status: Option<LetterStatus>, opts: RenderOptions) -> String {
    let upper = letter.to_ascii_uppercase() as char;

    if !opts.color {
        return match status {
            Some(LetterStatus::Correct) => format!("[{upper}]"),
            Some(LetterStatus::Misplaced) => format!("({upper})"),
            Some(LetterStatus::Absent) => format!(" {} ", letter.to_ascii_lowercase() as char),
            None => format!(" {upper} "),
        };
    }

    let tile = format!(" {upper} ");
    let tile = tile.as_str();
    match status {
        Some(LetterStatus::Correct) => tile.black().on_green().bold().to_string(),
        Some(LetterStatus::Misplaced) => tile.black().on_yellow().bold().to_string(),
        Some(LetterStatus::Absent) => tile.white().on_bright_black().to_string(),
        None => tile.bold().to_string(),
    }
}

/// Format a guess with its feedback as a row of tiles
#[must_use]
pub fn render_guess(result: &GuessResult, opts: RenderOptions) -> String {
    result
        .marks()
        .iter()
        .map(|&(letter, status)| letter_tile(letter, Some(status), opts))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Placeholder row for an attempt not yet made
#[must_use]
pub fn render_empty_row(word_length: usize) -> String {
    vec![" _ "; word_length].join(" ")
}

/// Format the on-screen keyboard with the best-known status of every letter
#[must_use]
pub fn render_keyboard(knowledge: &LetterKnowledge, opts: RenderOptions) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|letter| letter_tile(letter, knowledge.status(letter), opts))
                .collect();
            format!("{}{}", "  ".repeat(indent), keys.join(""))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
