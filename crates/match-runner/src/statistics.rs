//! Aggregate results of a match, always from the first bot's perspective.

use std::collections::VecDeque;

use othello_core::Color;

/// Number of finished games kept for the recent-games list.
const RECENT_GAMES: usize = 5;

const ELO_K: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchWinner {
    Bot1,
    Bot2,
    Draw,
}

/// Summary of one finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub winner: MatchWinner,
    /// Bot1's discs minus bot2's discs.
    pub disc_diff: i32,
    pub bot1_color: Color,
    pub n_moves: u32,
}

#[derive(Debug, Clone, Default)]
pub struct MatchStatistics {
    pub bot1_wins: u32,
    pub bot2_wins: u32,
    pub draws: u32,
    pub total_disc_diff: i32,
    pub recent_results: VecDeque<GameRecord>,
}

impl MatchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, record: GameRecord) {
        match record.winner {
            MatchWinner::Bot1 => self.bot1_wins += 1,
            MatchWinner::Bot2 => self.bot2_wins += 1,
            MatchWinner::Draw => self.draws += 1,
        }
        self.total_disc_diff += record.disc_diff;

        self.recent_results.push_back(record);
        if self.recent_results.len() > RECENT_GAMES {
            self.recent_results.pop_front();
        }
    }

    pub fn total_games(&self) -> u32 {
        self.bot1_wins + self.bot2_wins + self.draws
    }

    pub fn bot1_win_rate(&self) -> f64 {
        self.rate(self.bot1_wins)
    }

    pub fn bot2_win_rate(&self) -> f64 {
        self.rate(self.bot2_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    fn rate(&self, count: u32) -> f64 {
        match self.total_games() {
            0 => 0.0,
            total => count as f64 / total as f64 * 100.0,
        }
    }

    /// Elo difference of bot1 over bot2 implied by the score rate, counting a
    /// draw as half a win.
    ///
    /// Infinite when one side won every game; 0 before any game.
    pub fn elo_difference(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.0;
        }

        let p = (self.bot1_wins as f64 + 0.5 * self.draws as f64) / total as f64;
        if p <= 0.0 {
            f64::NEG_INFINITY
        } else if p >= 1.0 {
            f64::INFINITY
        } else {
            ELO_K * (p / (1.0 - p)).log10()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(winner: MatchWinner, disc_diff: i32) -> GameRecord {
        GameRecord {
            winner,
            disc_diff,
            bot1_color: Color::Black,
            n_moves: 60,
        }
    }

    #[test]
    fn test_add_result() {
        let mut stats = MatchStatistics::new();
        stats.add_result(record(MatchWinner::Bot1, 10));
        stats.add_result(record(MatchWinner::Bot2, -4));
        stats.add_result(record(MatchWinner::Draw, 0));
        stats.add_result(record(MatchWinner::Bot1, 2));

        assert_eq!(stats.total_games(), 4);
        assert_eq!(stats.bot1_wins, 2);
        assert_eq!(stats.bot2_wins, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.total_disc_diff, 8);
        assert_eq!(stats.bot1_win_rate(), 50.0);
        assert_eq!(stats.draw_rate(), 25.0);
    }

    #[test]
    fn test_recent_results_are_bounded() {
        let mut stats = MatchStatistics::new();
        for i in 0..8 {
            stats.add_result(record(MatchWinner::Bot1, i));
        }
        assert_eq!(stats.recent_results.len(), RECENT_GAMES);
        assert_eq!(stats.recent_results.front().map(|r| r.disc_diff), Some(3));
    }

    #[test]
    fn test_elo_difference() {
        let mut stats = MatchStatistics::new();
        assert_eq!(stats.elo_difference(), 0.0);

        stats.add_result(record(MatchWinner::Bot1, 2));
        assert_eq!(stats.elo_difference(), f64::INFINITY);

        stats.add_result(record(MatchWinner::Bot2, -2));
        assert!(stats.elo_difference().abs() < 1e-9);

        stats.add_result(record(MatchWinner::Bot1, 2));
        stats.add_result(record(MatchWinner::Bot1, 2));
        // 3 of 4: 400 * log10(3).
        assert!((stats.elo_difference() - 190.848).abs() < 1e-3);
    }
}
