//! Difficulty presets.
//!
//! Each difficulty maps to a bot configuration: easy plays randomly, medium
//! and hard run the minimax bot at increasing depths.

use std::fmt;
use std::str::FromStr;

use crate::bot::{Bot, MinimaxBot, RandomBot};
use crate::error::{OthelloError, Result};
use crate::types::Depth;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Search depth of the preset, or `None` when it does not search.
    pub const fn search_depth(self) -> Option<Depth> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(2),
            Difficulty::Hard => Some(4),
        }
    }

    /// Builds the bot for this difficulty.
    pub fn create_bot(self) -> Box<dyn Bot> {
        match self.search_depth() {
            None => Box::new(RandomBot::new()),
            Some(depth) => Box::new(MinimaxBot::new(depth)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| OthelloError::UnknownDifficulty(name.to_string()))
    }
}
