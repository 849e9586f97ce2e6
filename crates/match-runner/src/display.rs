//! Terminal output for the match runner: progress bar and final report.

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use othello_core::Color;

use crate::statistics::{MatchStatistics, MatchWinner};

const BAR_WIDTH: usize = 50;
const REPORT_WIDTH: usize = 72;

/// Renders match progress and results.
pub struct DisplayManager;

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayManager {
    pub fn new() -> Self {
        Self
    }

    /// Create a styled progress bar for match tracking.
    pub fn create_progress_bar(&self, total_games: u64) -> ProgressBar {
        let progress_bar = ProgressBar::new(total_games);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");
        progress_bar.set_style(style);
        progress_bar
    }

    /// One-line running tally shown next to the progress bar.
    pub fn progress_message(&self, statistics: &MatchStatistics) -> String {
        format!(
            "W {} / D {} / L {}  disc diff {:+}",
            statistics.bot1_wins, statistics.draws, statistics.bot2_wins, statistics.total_disc_diff
        )
    }

    /// Print the final match report.
    pub fn print_final_results(
        &self,
        statistics: &MatchStatistics,
        bot1_name: &str,
        bot2_name: &str,
    ) {
        let total_games = statistics.total_games();
        if total_games == 0 {
            println!("No games were played.");
            return;
        }

        println!("{}", "═".repeat(REPORT_WIDTH).bright_cyan());
        println!("{:^REPORT_WIDTH$}", "MATCH RESULTS".bright_white().bold());
        println!("{}", "═".repeat(REPORT_WIDTH).bright_cyan());
        println!();

        println!(
            "{} {} vs {}",
            "Bots:".bright_white(),
            bot1_name.bright_cyan().bold(),
            bot2_name.bright_cyan().bold()
        );
        println!(
            "{} {}",
            "Total Games:".bright_white(),
            total_games.to_string().bright_yellow().bold()
        );
        println!(
            "{} {} / {} / {}",
            "Results:".bright_white(),
            format!("{} wins", statistics.bot1_wins).bright_green(),
            format!("{} draws", statistics.draws).bright_blue(),
            format!("{} losses", statistics.bot2_wins).bright_red()
        );
        println!();

        let name_width = bot1_name.len().max(bot2_name.len()).max("Draws".len());
        let rows = [
            (bot1_name, statistics.bot1_win_rate(), MatchWinner::Bot1),
            ("Draws", statistics.draw_rate(), MatchWinner::Draw),
            (bot2_name, statistics.bot2_win_rate(), MatchWinner::Bot2),
        ];
        for (label, percentage, winner) in rows {
            println!(
                "{:>name_width$} {} {:>6.1}%",
                label,
                self.format_bar(percentage, winner),
                percentage
            );
        }
        println!();

        println!(
            "{:>16}: {}",
            "Disc Diff".bright_white(),
            self.format_score(statistics.total_disc_diff)
        );
        println!(
            "{:>16}: {}",
            "Elo Difference".bright_white(),
            self.format_elo(statistics.elo_difference())
        );
        println!();

        if !statistics.recent_results.is_empty() {
            println!("{}", "Recent Games".bright_white().underline());
            let first_game = total_games as usize - statistics.recent_results.len() + 1;
            for (idx, game) in statistics.recent_results.iter().enumerate() {
                println!(
                    "  {:>5}: {} {} {} ({} moves)",
                    (first_game + idx).to_string().bright_black(),
                    self.format_result_symbol(game.winner),
                    self.format_score(game.disc_diff),
                    self.format_vs_display(game.bot1_color).bright_black(),
                    game.n_moves
                );
            }
        }

        println!("{}", "═".repeat(REPORT_WIDTH).bright_cyan());
    }

    fn format_bar(&self, percentage: f64, winner: MatchWinner) -> String {
        let filled = ((percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        let bar = "█".repeat(filled);
        let bar = match winner {
            MatchWinner::Bot1 => bar.bright_green(),
            MatchWinner::Bot2 => bar.bright_red(),
            MatchWinner::Draw => bar.bright_blue(),
        };
        format!("{bar}{}", "░".repeat(BAR_WIDTH - filled).bright_black())
    }

    fn format_result_symbol(&self, winner: MatchWinner) -> ColoredString {
        match winner {
            MatchWinner::Bot1 => "W".bright_green().bold(),
            MatchWinner::Bot2 => "L".bright_red().bold(),
            MatchWinner::Draw => "D".bright_blue().bold(),
        }
    }

    fn format_score(&self, score: i32) -> ColoredString {
        let score_str = format!("{score:+3}");
        match score.signum() {
            1 => score_str.bright_green(),
            -1 => score_str.bright_red(),
            _ => score_str.bright_yellow(),
        }
    }

    fn format_elo(&self, elo: f64) -> ColoredString {
        if elo.is_infinite() {
            let s = if elo > 0.0 { "+∞" } else { "-∞" };
            return s.bright_yellow().bold();
        }
        let elo_str = format!("{elo:+.1}");
        if elo > 0.0 {
            elo_str.bright_green()
        } else if elo < 0.0 {
            elo_str.bright_red()
        } else {
            elo_str.bright_yellow()
        }
    }

    fn format_vs_display(&self, bot1_color: Color) -> String {
        let (bot1_symbol, bot2_symbol) = match bot1_color {
            Color::Black => ("●", "○"),
            Color::White => ("○", "●"),
        };
        format!("{bot1_symbol} bot1 vs bot2 {bot2_symbol}")
    }
}
