//! Win/loss tracking across consecutive games

use super::GameState;

/// Aggregate results for one run of the program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesStats {
    pub games_played: usize,
    pub wins: usize,
    /// `guess_distribution[n]` = games won in exactly `n` attempts
    pub guess_distribution: Vec<usize>,
}

impl SeriesStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game; unfinished states are ignored
    pub fn record(&mut self, state: GameState) {
        match state {
            GameState::Won { attempts } => {
                self.games_played += 1;
                self.wins += 1;
                if self.guess_distribution.len() <= attempts {
                    self.guess_distribution.resize(attempts + 1, 0);
                }
                self.guess_distribution[attempts] += 1;
            }
            GameState::Lost => self.games_played += 1,
            GameState::AwaitingGuess => {}
        }
    }

    #[must_use]
    pub const fn losses(&self) -> usize {
        self.games_played.saturating_sub(self.wins)
    }

    /// Percentage of games won, 0.0 before any game finishes
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series() {
        let stats = SeriesStats::new();
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.losses(), 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn records_wins_and_losses() {
        let mut stats = SeriesStats::new();
        stats.record(GameState::Won { attempts: 3 });
        stats.record(GameState::Lost);
        stats.record(GameState::Won { attempts: 3 });
        stats.record(GameState::Won { attempts: 1 });

        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.wins, 3);
        assert_eq!(stats.losses(), 1);
        assert_eq!(stats.guess_distribution, [0, 1, 0, 2]);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn losses_never_underflow() {
        let stats = SeriesStats {
            games_played: 1,
            wins: 3,
            guess_distribution: Vec::new(),
        };
        assert_eq!(stats.losses(), 0);
    }

    #[test]
    fn ignores_unfinished_games() {
        let mut stats = SeriesStats::new();
        stats.record(GameState::AwaitingGuess);
        assert_eq!(stats, SeriesStats::default());
    }
}
