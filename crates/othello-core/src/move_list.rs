//! Move generation for the search and the bots.

use arrayvec::ArrayVec;
use std::slice;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::color::Color;
use crate::constants::MAX_MOVES;
use crate::square::Square;

/// Represents a single legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    /// The square where the disc is placed.
    pub sq: Square,
    /// Bitboard representing all opponent discs flipped by this move.
    pub flipped: Bitboard,
}

impl Move {
    /// Creates a new move with the specified square and flipped discs.
    #[inline]
    pub fn new(sq: Square, flipped: Bitboard) -> Move {
        debug_assert!(!flipped.is_empty(), "Move must flip at least one disc");
        Move { sq, flipped }
    }
}

/// All legal moves of one color in a position, in row-major scan order.
///
/// Stored inline, so building a move list at every search node does not
/// allocate.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: ArrayVec<Move, MAX_MOVES>,
}

impl MoveList {
    /// Generates all legal moves for `color`.
    ///
    /// # Returns
    ///
    /// A new MoveList, empty when `color` must pass.
    #[inline]
    pub fn new(board: &Board, color: Color) -> MoveList {
        let mut moves = ArrayVec::new();
        for sq in board.get_moves(color).iter() {
            moves.push(Move::new(sq, board.get_flipped(sq, color)));
        }
        MoveList { moves }
    }

    /// Returns the number of legal moves in this position.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` when there is no legal move.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns an iterator over the moves in scan order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns the moves as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_moves() {
        let board = Board::new();
        let list = MoveList::new(&board, Color::Black);

        let squares: Vec<Square> = list.iter().map(|m| m.sq).collect();
        assert_eq!(
            squares,
            vec![Square::D3, Square::C4, Square::F5, Square::E6]
        );
        for m in &list {
            assert_eq!(m.flipped.count(), 1);
        }
    }

    #[test]
    fn test_empty_list() {
        let board = Board::from_bitboards(u64::MAX, 0);
        let list = MoveList::new(&board, Color::White);
        assert!(list.is_empty());
        assert_eq!(list.count(), 0);
    }

    #[test]
    fn test_flipped_matches_board() {
        let board = Board::new();
        for m in MoveList::new(&board, Color::White).iter() {
            assert_eq!(m.flipped, board.get_flipped(m.sq, Color::White));
        }
    }
}
