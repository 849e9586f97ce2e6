use othello_core::Board;
use othello_core::color::Color;
use othello_core::perft::{perft, perft_root};

#[test]
fn test_perft() {
    let expected = [4, 12, 56, 244, 1_396, 8_200, 55_092, 390_216];
    for (depth, &nodes) in (1..).zip(expected.iter()) {
        assert_eq!(perft_root(depth), nodes, "depth {depth}");
    }
}

#[test]
fn test_perft_terminal_position_is_one_leaf() {
    let board = Board::from_bitboards(u64::MAX, 0);
    assert_eq!(perft(&board, Color::Black, 5), 1);
}

#[test]
fn test_perft_passes_without_consuming_depth() {
    // White cannot move; Black's only move is C1, after which the game ends.
    let board = Board::from_string(
        "XO------
         --------
         --------
         --------
         --------
         --------
         --------
         --------",
    )
    .unwrap();
    assert_eq!(perft(&board, Color::White, 1), 1);
}
