//! Global constants

use crate::types::{Depth, Score};

/// Number of rows and columns of the board.
pub const BOARD_SIZE: usize = 8;

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Capacity of a move list. Holds one move per square, so hand-built
/// positions cannot overflow it either.
pub const MAX_MOVES: usize = BOARD_SQUARES;

/// Infinity score for search bounds.
///
/// Larger than any reachable evaluation (64 * 100 positional plus mobility).
pub const SCORE_INF: Score = 1_000_000;

/// Weight of the mobility difference in the positional evaluator.
pub const MOBILITY_WEIGHT: Score = 5;

/// Search depth of the minimax bot.
pub const MINIMAX_DEPTH: Depth = 4;
