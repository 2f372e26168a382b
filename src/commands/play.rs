//! Interactive game series
//!
//! Plays games back to back until the player declines another round, then
//! prints the series totals.

use crate::game::{GameConfig, GameSession, GameState, GuessError, SeriesStats};
use crate::interactive::Console;
use crate::output::formatters::styled;
use crate::output::{RenderOptions, board_lines, outcome_lines, series_lines, welcome_lines};
use anyhow::{Result, anyhow};
use colored::Colorize;
use log::info;
use rand::Rng;

/// Run games until the player stops
///
/// End of input counts as declining to continue; a game cut short that way is
/// not recorded.
///
/// # Errors
///
/// Returns an error if the console fails to read or write, or if the
/// vocabulary is empty.
pub fn run_series<C, R>(
    console: &mut C,
    config: &GameConfig,
    rng: &mut R,
    opts: RenderOptions,
) -> Result<SeriesStats>
where
    C: Console + ?Sized,
    R: Rng + ?Sized,
{
    let mut stats = SeriesStats::new();
    console.write_lines(&welcome_lines(config, opts))?;

    loop {
        let secret = config
            .choose_secret(&mut *rng)
            .cloned()
            .ok_or_else(|| anyhow!("No secret words to choose from"))?;
        let mut session = GameSession::new(secret, config);

        let Some(outcome) = play_game(console, &mut session, opts)? else {
            info!("input closed mid-game; game not recorded");
            break;
        };

        stats.record(outcome);
        info!(
            "game {} finished: {outcome:?} ({} wins)",
            stats.games_played, stats.wins
        );
        console.write_lines(&outcome_lines(&session, opts))?;
        console.write_lines(&series_lines(&stats, opts))?;

        if !ask_play_again(console)? {
            break;
        }
        console.write_line("")?;
    }

    console.write_line("👋 Thanks for playing!")?;
    Ok(stats)
}

/// Drive one session to the end
///
/// Returns `None` if input runs out before the game finishes.
///
/// # Errors
///
/// Returns an error if the console fails to read or write.
pub fn play_game<C>(
    console: &mut C,
    session: &mut GameSession,
    opts: RenderOptions,
) -> Result<Option<GameState>>
where
    C: Console + ?Sized,
{
    console.write_lines(&board_lines(session, opts))?;

    while !session.is_over() {
        let prompt = format!(
            "Enter your guess ({} left)",
            session.remaining_attempts()
        );
        let Some(input) = console.read_line(&prompt)? else {
            return Ok(None);
        };

        match session.submit_guess(&input) {
            Ok(_) => console.write_lines(&board_lines(session, opts))?,
            Err(GuessError::InvalidWord(e)) => {
                let message = format!("❌ {e}. Try again.");
                console.write_line(&styled(&message, opts, |s| s.red()))?;
            }
            Err(GuessError::GameOver) => break,
        }
    }

    Ok(Some(session.state()))
}

/// Ask whether to start another game
fn ask_play_again<C: Console + ?Sized>(console: &mut C) -> Result<bool> {
    let answer = console.read_line("Play again? (yes/no)")?;
    Ok(matches!(
        answer.map(|a| a.to_lowercase()).as_deref(),
        Some("yes" | "y")
    ))
}
