//! Bitboard operations and types.
//!
//! This module provides a [`Bitboard`] type that represents a set of squares
//! using a single `u64`, where each bit corresponds to a square (bit 0 = A1,
//! bit 63 = H8).

use crate::square::Square;

/// Mask of every square except column A.
pub const NOT_A_FILE: u64 = 0xFEFE_FEFE_FEFE_FEFE;

/// Mask of every square except column H.
pub const NOT_H_FILE: u64 = 0x7F7F_7F7F_7F7F_7F7F;

/// Newtype wrapper for a 64-bit bitboard (bit 0 = A1, bit 63 = H8).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// The empty set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Creates a new bitboard from raw bits.
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Returns the raw 64-bit value.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Creates a bitboard with a single bit set at the given square.
    #[inline(always)]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(sq.bitboard())
    }

    /// Returns a new bitboard with the bit at the given square set.
    #[inline(always)]
    pub const fn set(self, sq: Square) -> Self {
        Bitboard(self.0 | sq.bitboard())
    }

    /// Checks if the bitboard contains the bit at the given square.
    #[inline(always)]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & sq.bitboard() != 0
    }

    /// Checks if the bitboard has no bits set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count).
    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns a new bitboard with the least significant bit cleared.
    #[inline(always)]
    pub const fn clear_lsb(self) -> Self {
        Bitboard(self.0 & self.0.wrapping_sub(1))
    }

    /// Returns the square corresponding to the least significant set bit.
    ///
    /// # Returns
    ///
    /// `Some(Square)` for the LSB position, or `None` if the bitboard is empty.
    #[inline(always)]
    pub const fn lsb_square(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Square::from_index(self.0.trailing_zeros() as usize)
        }
    }

    /// Returns an iterator over all set squares in the bitboard.
    ///
    /// Squares are yielded LSB first, which is row-major scan order.
    #[inline(always)]
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator::new(self)
    }

    /// Returns a new bitboard after applying a player's move.
    ///
    /// XORs the current bitboard with both the flipped discs and the placed disc.
    ///
    /// # Arguments
    ///
    /// * `flipped` - Bitboard of opponent discs flipped by this move.
    /// * `sq` - Square where the disc was placed.
    #[inline(always)]
    pub const fn apply_move(self, flipped: Bitboard, sq: Square) -> Bitboard {
        Bitboard(self.0 ^ flipped.0 ^ sq.bitboard())
    }

    /// Returns a new bitboard after removing the flipped discs.
    #[inline(always)]
    pub const fn apply_flip(self, flipped: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ flipped.0)
    }

    /// Gets the legal moves for the owner of this bitboard.
    ///
    /// # Arguments
    ///
    /// * `opponent` - The opponent's bitboard.
    ///
    /// # Returns
    ///
    /// A `Bitboard` with bits set for each legal move position.
    #[inline(always)]
    pub const fn get_moves(self, opponent: Bitboard) -> Bitboard {
        Bitboard(get_moves(self.0, opponent.0))
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

/// Prints the set as an 8x8 grid, row 1 first, `1` for members.
impl std::fmt::Display for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for sq in Square::iter() {
            f.write_str(if self.contains(sq) { "1" } else { "." })?;
            if sq.col() == 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Gets the legal moves for the player.
///
/// Reference: <https://github.com/abulmo/edax-reversi/blob/14f048c05ddfa385b6bf954a9c2905bbe677e9d3/src/board.c#L822>
///
/// # Arguments
///
/// * `player` - The player's bitboard.
/// * `opponent` - The opponent's bitboard.
///
/// # Returns
///
/// A `u64` value representing the legal moves for the player.
#[inline(always)]
const fn get_moves(player: u64, opponent: u64) -> u64 {
    let empty = !(player | opponent);
    (get_some_moves(player, opponent & 0x007E7E7E7E7E7E00, 7) & empty)
        | (get_some_moves(player, opponent & 0x007E7E7E7E7E7E00, 9) & empty)
        | (get_some_moves(player, opponent & 0x7E7E7E7E7E7E7E7E, 1) & empty)
        | (get_some_moves(player, opponent & 0x00FFFFFFFFFFFF00, 8) & empty)
}

/// Propagates a run of opponent discs along one axis (both directions).
///
/// # Arguments
///
/// * `b` - The player's bitboard.
/// * `mask` - The opponent's discs with edge masking for the axis.
/// * `dir` - The shift distance of the axis (1, 7, 8 or 9).
///
/// # Returns
///
/// Squares just beyond each bracketable run of opponent discs.
#[inline(always)]
const fn get_some_moves(b: u64, mask: u64, dir: u32) -> u64 {
    let mut flip = ((b << dir) | (b >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    (flip << dir) | (flip >> dir)
}

/// An iterator that yields each set bit position in a bitboard as a `Square`.
pub struct BitboardIterator {
    bitboard: Bitboard,
}

impl BitboardIterator {
    /// Creates a new `BitboardIterator`.
    #[inline(always)]
    pub fn new(bitboard: Bitboard) -> BitboardIterator {
        BitboardIterator { bitboard }
    }
}

impl Iterator for BitboardIterator {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let square = self.bitboard.lsb_square()?;
        self.bitboard = self.bitboard.clear_lsb();
        Some(square)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bitboard.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move() {
        let player = Bitboard::from_square(Square::A1);
        let flipped = Bitboard::from_square(Square::B1) | Bitboard::from_square(Square::C1);
        let result = player.apply_move(flipped, Square::D1);

        assert!(result.contains(Square::A1));
        assert!(result.contains(Square::B1));
        assert!(result.contains(Square::C1));
        assert!(result.contains(Square::D1));
        assert_eq!(result.count(), 4);
    }

    #[test]
    fn test_apply_flip() {
        let opponent = Bitboard::new(
            Square::A1.bitboard() | Square::B1.bitboard() | Square::C1.bitboard(),
        );
        let flipped = Bitboard::new(Square::B1.bitboard() | Square::C1.bitboard());
        let result = opponent.apply_flip(flipped);

        assert!(result.contains(Square::A1));
        assert!(!result.contains(Square::B1));
        assert!(!result.contains(Square::C1));
    }

    #[test]
    fn test_set_contains() {
        let bb = Bitboard::EMPTY.set(Square::E5);
        assert!(bb.contains(Square::E5));
        assert!(!bb.contains(Square::E4));
    }

    #[test]
    fn test_iter_row_major() {
        let bb = Bitboard::new(Square::H8.bitboard() | Square::A1.bitboard() | Square::D3.bitboard());
        let squares: Vec<Square> = bb.iter().collect();
        assert_eq!(squares, vec![Square::A1, Square::D3, Square::H8]);
        assert_eq!(bb.iter().len(), 3);
    }

    #[test]
    fn test_get_moves_initial_position() {
        let black = Bitboard::new(Square::E4.bitboard() | Square::D5.bitboard());
        let white = Bitboard::new(Square::D4.bitboard() | Square::E5.bitboard());
        let moves = black.get_moves(white);

        assert_eq!(moves.count(), 4);
        assert!(moves.contains(Square::D3));
        assert!(moves.contains(Square::C4));
        assert!(moves.contains(Square::F5));
        assert!(moves.contains(Square::E6));
    }

    #[test]
    fn test_get_moves_no_wraparound() {
        // A run ending at the board edge brackets nothing; A2 is not "east" of H1.
        let black = Bitboard::from_square(Square::G1);
        let white = Bitboard::from_square(Square::H1);
        assert!(black.get_moves(white).is_empty());

        let black = Bitboard::from_square(Square::B2);
        let white = Bitboard::from_square(Square::A2);
        assert!(!black.get_moves(white).contains(Square::H1));
    }

    #[test]
    fn test_display() {
        let bb = Bitboard::from_square(Square::A1);
        let s = bb.to_string();
        assert!(s.starts_with("1......."));
        assert_eq!(s.lines().count(), 8);
    }
}
