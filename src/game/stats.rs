//! Per-run statistics. Kept in memory only, never written to disk.

use super::{GameSummary, MAX_ATTEMPTS};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of attempts used (index 0 unused)
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    pub fn record(&mut self, summary: &GameSummary) {
        self.total_games += 1;
        if summary.won {
            self.games_won += 1;
            if summary.attempts <= MAX_ATTEMPTS {
                self.guess_distribution[summary.attempts] += 1;
            }
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn summary(won: bool, attempts: usize) -> GameSummary {
        GameSummary {
            won,
            attempts,
            target: Word::new("WORD").unwrap(),
        }
    }

    #[test]
    fn empty_stats_have_zero_win_rate() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn record_tracks_wins_and_distribution() {
        let mut stats = Statistics::default();
        stats.record(&summary(true, 3));
        stats.record(&summary(true, 3));
        stats.record(&summary(false, 5));
        stats.record(&summary(true, 1));

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[1], 1);
        assert_eq!(stats.guess_distribution[5], 0);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
