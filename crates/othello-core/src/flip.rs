//! Disc flip calculation for move execution.

use crate::bitboard::{NOT_A_FILE, NOT_H_FILE};
use crate::square::Square;

/// The eight compass directions as (shift, wrap mask) pairs.
///
/// A positive shift moves toward H8, a negative one toward A1. The mask drops
/// bits that wrapped around from one side of the board to the other.
const DIRECTIONS: [(i32, u64); 8] = [
    (1, NOT_A_FILE),  // east
    (-1, NOT_H_FILE), // west
    (8, u64::MAX),    // south
    (-8, u64::MAX),   // north
    (9, NOT_A_FILE),  // south-east
    (7, NOT_H_FILE),  // south-west
    (-7, NOT_A_FILE), // north-east
    (-9, NOT_H_FILE), // north-west
];

#[inline(always)]
const fn shift(b: u64, dir: i32) -> u64 {
    if dir > 0 { b << dir } else { b >> -dir }
}

/// Calculates which opponent discs would be flipped by placing a disc at the given square.
///
/// Each direction is independent: a run of opponent discs is flipped only if
/// it is closed by one of the player's discs, not by an empty square or the
/// edge of the board.
///
/// # Arguments
///
/// * `sq` - The square where the disc is being placed
/// * `p` - Bitboard representing the current player's discs
/// * `o` - Bitboard representing the opponent's discs
///
/// # Returns
///
/// A bitboard representing all opponent discs that would be flipped by this move.
/// Returns 0 if no discs would be flipped (invalid move).
#[inline]
pub fn flip(sq: Square, p: u64, o: u64) -> u64 {
    let x = sq.bitboard();
    let mut flipped = 0;

    for &(dir, mask) in DIRECTIONS.iter() {
        let mut run = 0;
        let mut cur = shift(x, dir) & mask;
        while cur & o != 0 {
            run |= cur;
            cur = shift(cur, dir) & mask;
        }
        if cur & p != 0 {
            flipped |= run;
        }
    }

    flipped
}
