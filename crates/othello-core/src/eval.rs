//! Static evaluation of a position.
//!
//! The positional evaluator combines a fixed square-weight table with a
//! mobility term. Weights reward corners, punish the squares next to them, and
//! mildly favor edges.

use crate::board::Board;
use crate::color::Color;
use crate::constants::MOBILITY_WEIGHT;
use crate::square::Square;
use crate::types::Score;

/// Square weights, indexed `[row][col]`.
#[rustfmt::skip]
pub const WEIGHTS: [[Score; 8]; 8] = [
    [100, -20,  10,   5,   5,  10, -20, 100],
    [-20, -50,  -2,  -2,  -2,  -2, -50, -20],
    [ 10,  -2,  -1,  -1,  -1,  -1,  -2,  10],
    [  5,  -2,  -1,  -1,  -1,  -1,  -2,   5],
    [  5,  -2,  -1,  -1,  -1,  -1,  -2,   5],
    [ 10,  -2,  -1,  -1,  -1,  -1,  -2,  10],
    [-20, -50,  -2,  -2,  -2,  -2, -50, -20],
    [100, -20,  10,   5,   5,  10, -20, 100],
];

#[inline(always)]
fn weight(sq: Square) -> Score {
    WEIGHTS[sq.row()][sq.col()]
}

/// Sum of the weights of `color`'s discs minus those of the opponent.
pub fn positional_score(board: &Board, color: Color) -> Score {
    let own: Score = board.discs(color).iter().map(weight).sum();
    let other: Score = board.discs(color.opponent()).iter().map(weight).sum();
    own - other
}

/// Number of legal moves available to `color`.
#[inline]
pub fn mobility(board: &Board, color: Color) -> Score {
    board.get_moves(color).count() as Score
}

/// Evaluates `board` from the point of view of `color`.
///
/// `positional_score + 5 * (mobility(color) - mobility(opponent))`. Higher is
/// better for `color`.
pub fn evaluate(board: &Board, color: Color) -> Score {
    positional_score(board, color)
        + MOBILITY_WEIGHT * (mobility(board, color) - mobility(board, color.opponent()))
}

/// Number of opponent discs captured by `color` playing `sq`.
///
/// Measured as the change in `color`'s disc count minus the placed disc.
/// Returns `None` when the move is illegal.
pub fn capture_count(board: &Board, sq: Square, color: Color) -> Option<u32> {
    let next = board.try_make_move(sq, color)?;
    Some(next.count(color) - board.count(color) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_symmetric() {
        for r in 0..8 {
            for c in 0..8 {
                assert_eq!(WEIGHTS[r][c], WEIGHTS[c][r]);
                assert_eq!(WEIGHTS[r][c], WEIGHTS[7 - r][c]);
                assert_eq!(WEIGHTS[r][c], WEIGHTS[r][7 - c]);
            }
        }
    }

    #[test]
    fn test_initial_position_is_balanced() {
        let board = Board::new();
        assert_eq!(positional_score(&board, Color::Black), 0);
        assert_eq!(mobility(&board, Color::Black), 4);
        assert_eq!(evaluate(&board, Color::Black), 0);
        assert_eq!(evaluate(&board, Color::White), 0);
    }

    #[test]
    fn test_corner_worth_more_than_x_square() {
        let corner = Board::from_bitboards(Square::A1.bitboard(), 0);
        let x_square = Board::from_bitboards(Square::B2.bitboard(), 0);
        assert_eq!(positional_score(&corner, Color::Black), 100);
        assert_eq!(positional_score(&x_square, Color::Black), -50);
        assert_eq!(positional_score(&corner, Color::White), -100);
    }

    #[test]
    fn test_evaluate_after_d3() {
        // Black: D3, D4, E4, D5 (all -1). White: E5 (-1).
        let board = Board::new().try_make_move(Square::D3, Color::Black).unwrap();
        let positional = positional_score(&board, Color::Black);
        assert_eq!(positional, -4 + 1);
        let expected = positional
            + MOBILITY_WEIGHT * (mobility(&board, Color::Black) - mobility(&board, Color::White));
        assert_eq!(evaluate(&board, Color::Black), expected);
    }

    #[test]
    fn test_capture_count() {
        let board = Board::new();
        assert_eq!(capture_count(&board, Square::D3, Color::Black), Some(1));
        assert_eq!(capture_count(&board, Square::A1, Color::Black), None);
    }
}
