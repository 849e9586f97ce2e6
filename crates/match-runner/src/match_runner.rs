//! Match execution and game management.
//!
//! Games are played in-process: both bots are asked for moves directly and
//! every move goes through the rules engine, so a bot that returns an illegal
//! square aborts the match instead of corrupting the board.

use log::{debug, info};
use othello_core::bot::Bot;
use othello_core::{Color, apply_move, initial_board, is_terminal, next_player, score};

use crate::config::Config;
use crate::display::DisplayManager;
use crate::error::{MatchRunnerError, Result};
use crate::statistics::{GameRecord, MatchStatistics, MatchWinner};

/// Final position of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub black_discs: u32,
    pub white_discs: u32,
    pub n_moves: u32,
}

impl GameResult {
    /// Disc difference from `color`'s perspective.
    pub fn disc_diff(&self, color: Color) -> i32 {
        let diff = self.black_discs as i32 - self.white_discs as i32;
        match color {
            Color::Black => diff,
            Color::White => -diff,
        }
    }
}

/// Orchestrates a series of games between two bots.
pub struct MatchRunner {
    display: DisplayManager,
}

impl Default for MatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchRunner {
    pub fn new() -> Self {
        Self {
            display: DisplayManager::new(),
        }
    }

    /// Execute a complete match using the provided configuration.
    ///
    /// Bot1 plays Black in even-numbered games (counting from 0) and White in
    /// odd ones. The final report is printed before returning.
    ///
    /// # Errors
    ///
    /// Returns an error as soon as either bot misbehaves.
    pub fn run_match(&mut self, config: &Config) -> Result<MatchStatistics> {
        let mut bot1 = config.create_bot1();
        let mut bot2 = config.create_bot2();
        let names = (bot1.kind().display_name(), bot2.kind().display_name());
        info!("match {} vs {}: {} games", names.0, names.1, config.games);

        let mut statistics = MatchStatistics::new();
        let progress_bar = self.display.create_progress_bar(config.games as u64);

        for game_idx in 0..config.games {
            let bot1_color = if game_idx % 2 == 0 {
                Color::Black
            } else {
                Color::White
            };
            let played = match bot1_color {
                Color::Black => self.play_game(bot1.as_mut(), bot2.as_mut()),
                Color::White => self.play_game(bot2.as_mut(), bot1.as_mut()),
            };
            let result = match played {
                Ok(result) => result,
                Err(e) => {
                    progress_bar.finish_and_clear();
                    return Err(e);
                }
            };

            let record = record_for_bot1(&result, bot1_color);
            debug!("game {}: {record:?}", game_idx + 1);
            statistics.add_result(record);

            progress_bar.set_message(self.display.progress_message(&statistics));
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        info!(
            "match finished: {} wins, {} draws, {} losses, disc diff {:+}",
            statistics.bot1_wins, statistics.draws, statistics.bot2_wins, statistics.total_disc_diff
        );
        self.display
            .print_final_results(&statistics, names.0, names.1);

        Ok(statistics)
    }

    /// Plays one game from the initial position until neither side can move.
    ///
    /// # Errors
    ///
    /// Returns an error if a bot returns an illegal square or no square while
    /// it has legal moves.
    pub fn play_game(&self, black: &mut dyn Bot, white: &mut dyn Bot) -> Result<GameResult> {
        let mut board = initial_board();
        let mut color = Color::Black;
        let mut n_moves = 0;

        while !is_terminal(&board) {
            let bot: &mut dyn Bot = match color {
                Color::Black => &mut *black,
                Color::White => &mut *white,
            };
            let name = bot.kind().display_name();
            let sq = bot
                .choose_move(&board, color)
                .ok_or(MatchRunnerError::NoMove { bot: name, color })?;
            board = apply_move(&board, sq, color)
                .map_err(|source| MatchRunnerError::IllegalMove { bot: name, source })?;
            n_moves += 1;
            color = next_player(&board, color);
        }

        let (black_discs, white_discs) = score(&board);
        Ok(GameResult {
            black_discs,
            white_discs,
            n_moves,
        })
    }
}

fn record_for_bot1(result: &GameResult, bot1_color: Color) -> GameRecord {
    let disc_diff = result.disc_diff(bot1_color);
    let winner = match disc_diff.signum() {
        1 => MatchWinner::Bot1,
        -1 => MatchWinner::Bot2,
        _ => MatchWinner::Draw,
    };
    GameRecord {
        winner,
        disc_diff,
        bot1_color,
        n_moves: result.n_moves,
    }
}
