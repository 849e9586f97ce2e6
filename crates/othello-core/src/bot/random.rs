//! Uniformly random move selection.

use log::trace;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::board::Board;
use crate::bot::{Bot, BotKind};
use crate::color::Color;
use crate::rules::legal_moves;
use crate::square::Square;

/// Picks one of the legal moves uniformly at random.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    /// Creates a bot seeded from the operating system.
    pub fn new() -> Self {
        RandomBot {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a bot whose move sequence is reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        RandomBot {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for RandomBot {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Square> {
        let moves = legal_moves(board, color);
        let choice = moves.choose(&mut self.rng).copied();
        trace!("random {color}: {} candidates, chose {choice:?}", moves.len());
        choice
    }

    fn kind(&self) -> BotKind {
        BotKind::Random
    }
}
