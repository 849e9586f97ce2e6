//! Othello board representation using bitboards.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::{Cell, Color};
use crate::constants::BOARD_SQUARES;
use crate::error::{OthelloError, Result};
use crate::flip;
use crate::square::Square;

/// An 8x8 Othello board stored as one bitboard per color.
///
/// `Board` is `Copy`: every rules-engine operation takes a board by reference
/// and returns a new value, so hypothetical positions explored by the search
/// never share state with the real game.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    /// Creates a board with the standard starting position.
    ///
    /// The initial position has:
    /// - Black discs on E4 (3,4) and D5 (4,3)
    /// - White discs on D4 (3,3) and E5 (4,4)
    fn default() -> Self {
        Board {
            black: Bitboard::from_square(Square::E4) | Bitboard::from_square(Square::D5),
            white: Bitboard::from_square(Square::D4) | Bitboard::from_square(Square::E5),
        }
    }
}

impl Board {
    /// Creates a new `Board` with the initial setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a `Board` from one raw bitboard per color (bit 0 = A1).
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the two bitboards overlap.
    pub fn from_bitboards(black: u64, white: u64) -> Board {
        debug_assert!(black & white == 0, "a square cannot hold two discs");
        Board {
            black: Bitboard::new(black),
            white: Bitboard::new(white),
        }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string holds 64 cells from A1 to H8 in row-major order. `X` is a
    /// Black disc, `O` a White disc, `-` or `.` an empty square. Whitespace is
    /// ignored so boards can be written one row per line.
    ///
    /// # Errors
    ///
    /// Returns [`OthelloError::ParseBoard`] for unknown characters or a cell
    /// count other than 64.
    pub fn from_string(board_string: &str) -> Result<Board> {
        let mut black = Bitboard::EMPTY;
        let mut white = Bitboard::EMPTY;
        let mut n_cells = 0;

        for c in board_string.chars().filter(|c| !c.is_whitespace()) {
            let sq = Square::from_index(n_cells).ok_or_else(|| {
                OthelloError::ParseBoard("more than 64 cells".to_string())
            })?;
            match (c, Color::from_char(c)) {
                (_, Some(Color::Black)) => black = black.set(sq),
                (_, Some(Color::White)) => white = white.set(sq),
                ('-' | '.', None) => {}
                (other, None) => {
                    return Err(OthelloError::ParseBoard(format!(
                        "unexpected character '{other}' at {sq}"
                    )));
                }
            }
            n_cells += 1;
        }

        if n_cells != BOARD_SQUARES {
            return Err(OthelloError::ParseBoard(format!(
                "expected 64 cells, found {n_cells}"
            )));
        }

        Ok(Board { black, white })
    }

    /// Returns the discs of the given color.
    #[inline(always)]
    pub fn discs(&self, color: Color) -> Bitboard {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// Gets the content of a square.
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        if self.black.contains(sq) {
            Some(Color::Black)
        } else if self.white.contains(sq) {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Gets the empty squares.
    #[inline(always)]
    pub fn get_empty(&self) -> Bitboard {
        !(self.black | self.white)
    }

    /// Checks if a given square is empty.
    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        self.get_empty().contains(sq)
    }

    /// Returns the number of discs of the given color.
    #[inline(always)]
    pub fn count(&self, color: Color) -> u32 {
        self.discs(color).count()
    }

    /// Returns the number of occupied squares.
    #[inline(always)]
    pub fn occupied_count(&self) -> u32 {
        (self.black | self.white).count()
    }

    /// Returns a bitboard of the legal moves for `color`.
    #[inline(always)]
    pub fn get_moves(&self, color: Color) -> Bitboard {
        self.discs(color).get_moves(self.discs(color.opponent()))
    }

    /// Checks if `color` has any legal move.
    #[inline(always)]
    pub fn has_legal_moves(&self, color: Color) -> bool {
        !self.get_moves(color).is_empty()
    }

    /// Computes the opponent discs `color` would flip by playing `sq`.
    ///
    /// Returns an empty bitboard if `sq` is occupied or brackets nothing.
    #[inline]
    pub fn get_flipped(&self, sq: Square, color: Color) -> Bitboard {
        if !self.is_square_empty(sq) {
            return Bitboard::EMPTY;
        }
        Bitboard::new(flip::flip(
            sq,
            self.discs(color).bits(),
            self.discs(color.opponent()).bits(),
        ))
    }

    /// Makes a move for `color`, given the already calculated flipped discs.
    ///
    /// # Arguments
    /// * `sq` - The square where the disc is placed.
    /// * `flipped` - The opponent discs flipped by the move.
    /// * `color` - The color placing the disc.
    ///
    /// # Returns
    /// A new `Board` instance with the updated board state after the move.
    #[inline(always)]
    pub fn make_move_with_flipped(&self, sq: Square, flipped: Bitboard, color: Color) -> Board {
        let own = self.discs(color).apply_move(flipped, sq);
        let other = self.discs(color.opponent()).apply_flip(flipped);
        match color {
            Color::Black => Board {
                black: own,
                white: other,
            },
            Color::White => Board {
                black: other,
                white: own,
            },
        }
    }

    /// Attempts to make a move for `color`.
    ///
    /// # Returns
    /// `Some(Board)` with the updated board if the move is legal, `None` otherwise.
    #[inline]
    pub fn try_make_move(&self, sq: Square, color: Color) -> Option<Board> {
        let flipped = self.get_flipped(sq, color);
        if flipped.is_empty() {
            return None;
        }
        Some(self.make_move_with_flipped(sq, flipped, color))
    }

    /// Converts the board to a string representation.
    ///
    /// The output shows the board as an 8x8 grid with:
    /// - 'X' for Black discs
    /// - 'O' for White discs
    /// - '-' for empty squares
    pub fn to_string_as_board(&self) -> String {
        let mut s = String::with_capacity(64 + 8);
        for (i, sq) in Square::iter().enumerate() {
            if i > 0 && i % 8 == 0 {
                s.push('\n');
            }
            s.push(self.get(sq).map_or('-', Color::to_char));
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_as_board())
    }
}
