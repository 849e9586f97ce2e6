//! Command line configuration.

use std::str::FromStr;

use clap::{Parser, ValueEnum};
use othello_core::bot::{Bot, BotKind, RandomBot, create_bot};
use othello_core::{Color, Difficulty, OthelloError};

/// Who sits on one side of the board, as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerChoice {
    Human,
    Bot(BotKind),
}

impl FromStr for PlayerChoice {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("human") {
            Ok(PlayerChoice::Human)
        } else {
            s.parse().map(PlayerChoice::Bot)
        }
    }
}

/// Side of the board the difficulty bot sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    Black,
    White,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::Black => Color::Black,
            Side::White => Color::White,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "othello", version, about = "Play Othello against the built-in bots")]
pub struct Config {
    /// Black player: `human` or a bot id [default: human]
    #[arg(long)]
    pub black: Option<PlayerChoice>,

    /// White player: `human` or a bot id [default: minimax]
    #[arg(long)]
    pub white: Option<PlayerChoice>,

    /// Seat the bot of a difficulty preset on the computer's side
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Side the difficulty bot plays [default: white, or black when
    /// `--white human` is given]
    #[arg(long, value_enum)]
    pub computer_color: Option<Side>,

    /// Pause before each bot move, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Seed for the random bot
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the available bots and exit
    #[arg(long)]
    pub list_bots: bool,
}

/// A seated player.
pub enum Player {
    Human,
    Bot(Box<dyn Bot>),
}

impl Player {
    /// Short label for messages, e.g. `Minimax Bot` or `Human`.
    pub fn label(&self) -> &'static str {
        match self {
            Player::Human => "Human",
            Player::Bot(bot) => bot.kind().display_name(),
        }
    }
}

impl Config {
    /// Returns the side the difficulty bot plays, if it plays at all.
    ///
    /// A side given explicitly as `human` is never taken over, so
    /// `--difficulty` has no effect when it would land there.
    pub fn difficulty_side(&self) -> Option<Color> {
        self.difficulty?;
        let side = match self.computer_color {
            Some(side) => side.into(),
            None if self.white == Some(PlayerChoice::Human) => Color::Black,
            None => Color::White,
        };
        (self.explicit_choice(side) != Some(PlayerChoice::Human)).then_some(side)
    }

    /// Returns who plays `color` when no difficulty bot sits there.
    ///
    /// Unset sides default to a human Black and a Minimax White, or to a
    /// human opposite the difficulty bot.
    pub fn choice(&self, color: Color) -> PlayerChoice {
        if let Some(choice) = self.explicit_choice(color) {
            return choice;
        }
        match (self.difficulty_side(), color) {
            (Some(_), _) | (None, Color::Black) => PlayerChoice::Human,
            (None, Color::White) => PlayerChoice::Bot(BotKind::Minimax),
        }
    }

    fn explicit_choice(&self, color: Color) -> Option<PlayerChoice> {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// Builds the player for `color`.
    ///
    /// With `--seed` the random bot is reproducible; Black uses the seed and
    /// White the next value so that two random bots do not mirror each other.
    pub fn player(&self, color: Color) -> Player {
        let seed = self.seed.map(|s| match color {
            Color::Black => s,
            Color::White => s.wrapping_add(1),
        });

        match self.difficulty {
            Some(difficulty) if self.difficulty_side() == Some(color) => {
                return match (difficulty, seed) {
                    (Difficulty::Easy, Some(seed)) => {
                        Player::Bot(Box::new(RandomBot::with_seed(seed)))
                    }
                    _ => Player::Bot(difficulty.create_bot()),
                };
            }
            _ => {}
        }

        match (self.choice(color), seed) {
            (PlayerChoice::Human, _) => Player::Human,
            (PlayerChoice::Bot(BotKind::Random), Some(seed)) => {
                Player::Bot(Box::new(RandomBot::with_seed(seed)))
            }
            (PlayerChoice::Bot(kind), _) => Player::Bot(create_bot(kind)),
        }
    }
}
