use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::error::OthelloError;

/// A square of the board, ranging from A1 to H8.
///
/// Columns are labeled A-H and rows 1-8. Row-major indexing puts row 0
/// (`A1`..`H1`) first:
///
/// ```text
///   A  B  C  D  E  F  G  H
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
///
/// A square is the (row, col) position of the rules engine: `D3` is row 2,
/// column 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

use Square::*;

#[rustfmt::skip]
const ALL_SQUARES: [Square; BOARD_SQUARES] = [
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
];

impl Square {
    /// Converts the square into a single-bit `u64` mask.
    ///
    /// A1 returns 0x1, B1 returns 0x2, H8 returns 0x8000000000000000.
    #[inline(always)]
    pub const fn bitboard(self) -> u64 {
        1 << self as u8
    }

    /// Returns the row-major index (0-63).
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts a row-major index into a square.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if `index < 64`, `None` otherwise.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < BOARD_SQUARES {
            Some(ALL_SQUARES[index])
        } else {
            None
        }
    }

    /// Converts a row-major index into a square without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 64`.
    #[inline(always)]
    pub const fn from_index_unchecked(index: usize) -> Square {
        ALL_SQUARES[index]
    }

    /// Creates a square from a (row, col) pair.
    ///
    /// # Returns
    ///
    /// `None` if either coordinate is outside 0-7.
    #[inline]
    pub const fn from_row_col(row: usize, col: usize) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(ALL_SQUARES[row * BOARD_SIZE + col])
        } else {
            None
        }
    }

    /// Returns the row (0-7), where 0 is row "1".
    #[inline(always)]
    pub const fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Returns the column (0-7), where 0 is column "A".
    #[inline(always)]
    pub const fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Returns the (row, col) pair of this square.
    #[inline]
    pub const fn row_col(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Returns the neighboring square in direction `(d_row, d_col)`, or
    /// `None` when the step leaves the board.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Square> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Square::from_row_col(row, col)
    }

    /// Iterates over all 64 squares in row-major order (A1, B1, ..., H8).
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        ALL_SQUARES.into_iter()
    }
}

impl FromStr for Square {
    type Err = OthelloError;

    /// Parses algebraic notation such as `"d3"` or `"F5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != 2 {
            return Err(OthelloError::ParseSquare(trimmed.to_string()));
        }

        let col = bytes[0].to_ascii_lowercase();
        let row = bytes[1];
        if !(b'a'..=b'h').contains(&col) || !(b'1'..=b'8').contains(&row) {
            return Err(OthelloError::ParseSquare(trimmed.to_string()));
        }

        Ok(Square::from_index_unchecked(
            (row - b'1') as usize * BOARD_SIZE + (col - b'a') as usize,
        ))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = self.col() as u8 + b'a';
        let row = self.row() as u8 + b'1';
        write!(f, "{}{}", col as char, row as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bitboard() {
        assert_eq!(Square::A1.bitboard(), 1);
        assert_eq!(Square::B1.bitboard(), 2);
        assert_eq!(Square::H8.bitboard(), 1 << 63);
    }

    #[test]
    fn test_row_col() {
        assert_eq!(Square::D3.row_col(), (2, 3));
        assert_eq!(Square::C4.row_col(), (3, 2));
        assert_eq!(Square::F5.row_col(), (4, 5));
        assert_eq!(Square::E6.row_col(), (5, 4));
        assert_eq!(Square::H8.row_col(), (7, 7));
    }

    #[test]
    fn test_from_row_col() {
        assert_eq!(Square::from_row_col(0, 0), Some(Square::A1));
        assert_eq!(Square::from_row_col(3, 4), Some(Square::E4));
        assert_eq!(Square::from_row_col(8, 0), None);
        assert_eq!(Square::from_row_col(0, 8), None);
    }

    #[test]
    fn test_from_index() {
        for (i, sq) in Square::iter().enumerate() {
            assert_eq!(sq.index(), i);
            assert_eq!(Square::from_index(i), Some(sq));
        }
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Square::A1.offset(1, 1), Some(Square::B2));
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
        assert_eq!(Square::D4.offset(-1, 1), Some(Square::E3));
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("a1".parse::<Square>(), Ok(Square::A1));
        assert_eq!("D3".parse::<Square>(), Ok(Square::D3));
        assert_eq!(" h8 ".parse::<Square>(), Ok(Square::H8));
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::E6.to_string(), "e6");
        for sq in Square::iter() {
            assert_eq!(sq.to_string().parse::<Square>(), Ok(sq));
        }
    }
}
