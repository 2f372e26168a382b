//! Wordle Game - CLI
//!
//! Plays the word-guessing game in the terminal, or prints Fibonacci numbers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::{
    commands::run_series,
    fibonacci::fibonacci,
    game::{GameConfig, MAX_ATTEMPTS},
    interactive::StdConsole,
    output::RenderOptions,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a series of games (default)
    Play {
        /// Seed for secret word selection, for reproducible games
        #[arg(short, long)]
        seed: Option<u64>,

        /// Attempts allowed per game
        #[arg(short = 'a', long, default_value_t = MAX_ATTEMPTS)]
        max_attempts: usize,

        /// Disable coloured output
        #[arg(long)]
        no_color: bool,
    },

    /// Print the nth Fibonacci number
    Fib {
        /// Index into the sequence (must be non-negative)
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Play {
            seed: None,
            max_attempts: MAX_ATTEMPTS,
            no_color: false,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    match cli.command.unwrap_or_default() {
        Commands::Play {
            seed,
            max_attempts,
            no_color,
        } => run_play_command(seed, max_attempts, no_color),
        Commands::Fib { n } => run_fib_command(n),
    }
}

fn run_play_command(seed: Option<u64>, max_attempts: usize, no_color: bool) -> Result<()> {
    if no_color {
        colored::control::set_override(false);
    }
    let opts = RenderOptions { color: !no_color };

    let config = GameConfig::with_max_attempts(max_attempts)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    debug!(
        "starting series: {} words, {} attempts, seed={seed:?}",
        config.vocabulary().len(),
        config.max_attempts()
    );

    let stats = run_series(&mut StdConsole::new(), &config, &mut rng, opts)?;
    debug!(
        "series over: {} played, {} won",
        stats.games_played, stats.wins
    );
    Ok(())
}

fn run_fib_command(n: i64) -> Result<()> {
    let value = fibonacci(n)?;
    println!("F({n}) = {value}");
    Ok(())
}
