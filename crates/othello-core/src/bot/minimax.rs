//! Alpha-beta lookahead bot.

use log::trace;

use crate::board::Board;
use crate::bot::{Bot, BotKind};
use crate::color::Color;
use crate::constants::MINIMAX_DEPTH;
use crate::search::{SearchOptions, search_with_options};
use crate::square::Square;
use crate::types::Depth;

/// Searches a fixed number of plies ahead with alpha-beta pruning.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxBot {
    depth: Depth,
    options: SearchOptions,
}

impl MinimaxBot {
    pub const DEFAULT_DEPTH: Depth = MINIMAX_DEPTH;

    /// Creates a bot that searches `depth` plies. A depth of 0 is raised to 1
    /// so that the bot always returns a move when one exists.
    pub fn new(depth: Depth) -> Self {
        MinimaxBot {
            depth: depth.max(1),
            options: SearchOptions::default(),
        }
    }

    /// Replaces the search options.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }
}

impl Default for MinimaxBot {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEPTH)
    }
}

impl Bot for MinimaxBot {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Square> {
        let result = search_with_options(board, self.depth, color, &self.options);
        trace!("minimax {color}: {result:?}");
        result.best_move
    }

    fn kind(&self) -> BotKind {
        BotKind::Minimax
    }
}
