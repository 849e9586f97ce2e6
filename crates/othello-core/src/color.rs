use std::fmt;

/// The two sides of an Othello game.
///
/// Black always moves first from the initial position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

/// Content of a single board cell: empty, or a disc of one color.
pub type Cell = Option<Color>;

impl Color {
    /// Both colors, Black first.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Returns the other color.
    #[inline(always)]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Converts the color to its character representation.
    ///
    /// # Returns
    ///
    /// * `'X'` for `Color::Black`
    /// * `'O'` for `Color::White`
    pub const fn to_char(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }

    /// Parses a disc character as used by [`Color::to_char`].
    pub const fn from_char(c: char) -> Option<Color> {
        match c {
            'X' | 'x' => Some(Color::Black),
            'O' | 'o' => Some(Color::White),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}
