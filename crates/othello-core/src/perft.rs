//! Move-generation node counting.

use crate::board::Board;
use crate::color::Color;
use crate::move_list::MoveList;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total node count the search visits from the initial position.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), Color::Black, depth)
}

/// Counts the leaves of the game tree below `board` with `color` to move.
///
/// A pass does not consume depth. A position where neither side can move
/// counts as one leaf.
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    let move_list = MoveList::new(board, color);

    if move_list.is_empty() {
        return if board.has_legal_moves(color.opponent()) {
            perft(board, color.opponent(), depth)
        } else {
            1
        };
    }

    if depth <= 1 {
        return move_list.count() as u64;
    }

    move_list
        .iter()
        .map(|m| {
            let next = board.make_move_with_flipped(m.sq, m.flipped, color);
            perft(&next, color.opponent(), depth - 1)
        })
        .sum()
}
