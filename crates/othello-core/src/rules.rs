//! The rules engine.
//!
//! Every function takes a board by reference and either answers a question
//! about it or returns a new board. Turn management (skipping a side that has
//! no legal move) belongs to the caller; [`next_player`] encodes the rule.

use crate::board::Board;
use crate::color::Color;
use crate::error::{OthelloError, Result};
use crate::square::Square;

/// Result of a game, derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// At least one color still has a legal move.
    Ongoing,
    /// Neither color can move and this color has more discs.
    Won(Color),
    /// Neither color can move and the disc counts are equal.
    Drawn,
}

/// Returns the canonical starting position.
///
/// (3,3)=White, (3,4)=Black, (4,3)=Black, (4,4)=White.
pub fn initial_board() -> Board {
    Board::new()
}

/// Returns the legal moves of `color` in row-major scan order.
///
/// A square qualifies if it is empty and, in at least one of the eight
/// directions, a run of one or more opponent discs is closed by a disc of
/// `color`. An empty result means `color` must pass; it is not an error.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Square> {
    board.get_moves(color).iter().collect()
}

/// Places a disc of `color` on `square` and flips every bracketed run.
///
/// The input board is left untouched; the updated position is returned.
///
/// # Errors
///
/// Returns [`OthelloError::InvalidMove`] when `square` is not one of
/// `legal_moves(board, color)`.
pub fn apply_move(board: &Board, square: Square, color: Color) -> Result<Board> {
    board
        .try_make_move(square, color)
        .ok_or(OthelloError::InvalidMove { square, color })
}

/// Number of opponent discs a move of `color` on `square` would flip.
///
/// Returns 0 when the move is illegal.
pub fn flip_count(board: &Board, square: Square, color: Color) -> u32 {
    board.get_flipped(square, color).count()
}

/// Returns the disc counts as `(black, white)`.
pub fn score(board: &Board) -> (u32, u32) {
    (board.count(Color::Black), board.count(Color::White))
}

/// Checks if neither color has a legal move.
///
/// A full board is terminal, but so is any position where both sides would
/// have to pass.
pub fn is_terminal(board: &Board) -> bool {
    !board.has_legal_moves(Color::Black) && !board.has_legal_moves(Color::White)
}

/// Returns the color with strictly more discs, or `None` on equal counts.
///
/// Only meaningful once [`is_terminal`] holds.
pub fn winner(board: &Board) -> Option<Color> {
    let (black, white) = score(board);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Some(Color::Black),
        std::cmp::Ordering::Less => Some(Color::White),
        std::cmp::Ordering::Equal => None,
    }
}

/// Returns whose turn it is after `just_moved` played.
///
/// The opponent moves if it has a legal move; otherwise the turn comes back
/// to `just_moved`. Not meaningful on a terminal board.
pub fn next_player(board: &Board, just_moved: Color) -> Color {
    let opponent = just_moved.opponent();
    if board.has_legal_moves(opponent) {
        opponent
    } else {
        just_moved
    }
}

/// Derives the game outcome from the board.
pub fn outcome(board: &Board) -> GameOutcome {
    if !is_terminal(board) {
        return GameOutcome::Ongoing;
    }
    match winner(board) {
        Some(color) => GameOutcome::Won(color),
        None => GameOutcome::Drawn,
    }
}
