//! Error types for the Othello core.
//!
//! "No legal move" is not an error anywhere in the crate: it is an empty move
//! list or a `None` move. The variants below are contract violations or
//! malformed input from a collaborator.

use thiserror::Error;

use crate::color::Color;
use crate::square::Square;

/// Errors raised by the rules engine, the parsers and the bot registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OthelloError {
    /// A move was applied on a square that is not legal for the color.
    #[error("invalid move: {square} is not a legal move for {color}")]
    InvalidMove { square: Square, color: Color },

    /// A square name could not be parsed.
    #[error("invalid square '{0}': expected a column a-h followed by a row 1-8")]
    ParseSquare(String),

    /// A board string could not be parsed.
    #[error("invalid board: {0}")]
    ParseBoard(String),

    /// No bot is registered under the given identifier.
    #[error("unknown bot '{0}'")]
    UnknownBot(String),

    /// The difficulty name is not one of easy, medium or hard.
    #[error("unknown difficulty '{0}': expected easy, medium or hard")]
    UnknownDifficulty(String),
}

/// Convenience alias for results carrying an [`OthelloError`].
pub type Result<T> = std::result::Result<T, OthelloError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        let err = OthelloError::InvalidMove {
            square: Square::A1,
            color: Color::Black,
        };
        assert_eq!(
            err.to_string(),
            "invalid move: a1 is not a legal move for Black"
        );
    }

    #[test]
    fn test_unknown_bot_display() {
        let err = OthelloError::UnknownBot("alphazero".to_string());
        assert_eq!(err.to_string(), "unknown bot 'alphazero'");
    }
}
