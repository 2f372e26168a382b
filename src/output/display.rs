//! Screen layouts for the game
//!
//! Each function returns the lines to show; writing them is left to the
//! caller's console.

use super::formatters::{
    RenderOptions, create_progress_bar, render_empty_row, render_guess, render_keyboard, styled,
};
use crate::game::{GameConfig, GameSession, GameState, SeriesStats};
use colored::Colorize;

/// Banner and rules shown once at start-up
#[must_use]
pub fn welcome_lines(config: &GameConfig, opts: RenderOptions) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        styled("╔══════════════════════════════════════════╗", opts, |s| {
            s.bright_cyan()
        }),
        styled("║              W O R D L E                 ║", opts, |s| {
            s.bright_cyan().bold()
        }),
        styled("╚══════════════════════════════════════════╝", opts, |s| {
            s.bright_cyan()
        }),
        String::new(),
        format!(
            "Guess the {}-letter word in {} attempts.",
            config.word_length(),
            config.max_attempts()
        ),
    ];

    if opts.color {
        lines.push(format!(
            "  {} right spot   {} wrong spot   {} not in word",
            " A ".black().on_green().bold(),
            " A ".black().on_yellow().bold(),
            " A ".white().on_bright_black()
        ));
    } else {
        lines.push("  [A] right spot   (A) wrong spot    a  not in word".to_string());
    }
    lines.push(String::new());
    lines
}

/// The board: every guess so far, empty rows for the rest, then the keyboard
#[must_use]
pub fn board_lines(session: &GameSession, opts: RenderOptions) -> Vec<String> {
    let mut lines = Vec::with_capacity(session.max_attempts() + 6);

    lines.push(styled("─".repeat(40).as_str(), opts, |s| s.cyan()));
    lines.push(format!(
        "Attempt {}/{}",
        (session.attempts() + 1).min(session.max_attempts()),
        session.max_attempts()
    ));
    lines.push(styled("─".repeat(40).as_str(), opts, |s| s.cyan()));

    for (i, (_, result)) in session.history().iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, render_guess(result, opts)));
    }
    for i in session.attempts()..session.max_attempts() {
        lines.push(format!(
            "  {}. {}",
            i + 1,
            render_empty_row(session.word_length())
        ));
    }

    lines.push(String::new());
    lines.extend(
        render_keyboard(session.knowledge(), opts)
            .into_iter()
            .map(|row| format!("  {row}")),
    );
    lines.push(String::new());
    lines
}

/// Win or loss report for a finished game
#[must_use]
pub fn outcome_lines(session: &GameSession, opts: RenderOptions) -> Vec<String> {
    let secret = session.secret().text().to_uppercase();
    let mut lines = Vec::new();

    match session.state() {
        GameState::Won { attempts } => {
            lines.push(styled("🎉 Solved!", opts, |s| s.bright_green().bold()));
            lines.push(format!(
                "You found {} in {attempts} {}.",
                styled(&secret, opts, |s| s.bright_yellow().bold()),
                if attempts == 1 { "guess" } else { "guesses" }
            ));
        }
        GameState::Lost => {
            lines.push(styled("Out of attempts!", opts, |s| s.bright_red().bold()));
            lines.push(format!(
                "The word was {}.",
                styled(&secret, opts, |s| s.bright_yellow().bold())
            ));
        }
        GameState::AwaitingGuess => return lines,
    }

    lines.push(String::new());
    for (i, (word, result)) in session.history().iter().enumerate() {
        lines.push(format!(
            "  {}. {} {}",
            i + 1,
            word.text().to_uppercase(),
            result.to_emoji()
        ));
    }
    lines.push(String::new());
    lines
}

/// Running totals for the series, with a bar per winning attempt count
#[must_use]
pub fn series_lines(stats: &SeriesStats, opts: RenderOptions) -> Vec<String> {
    let mut lines = vec![
        styled("Series", opts, |s| s.bright_cyan().bold()),
        format!(
            "  Games played: {}   Wins: {}   Losses: {}   Win rate: {:.0}%",
            stats.games_played,
            stats.wins,
            stats.losses(),
            stats.win_rate()
        ),
    ];

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    if most > 0 {
        for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
            let bar = create_progress_bar(count as f64, most as f64, 20);
            lines.push(format!(
                "  {attempts}: {} {count}",
                styled(&bar, opts, |s| s.green())
            ));
        }
    }
    lines.push(String::new());
    lines
}
