//! Error types for the match runner crate.

use othello_core::{Color, OthelloError};
use thiserror::Error;

/// Failures that abort a match.
#[derive(Error, Debug)]
pub enum MatchRunnerError {
    /// A bot chose a square that is not a legal move.
    #[error("{bot} played an illegal move: {source}")]
    IllegalMove {
        bot: &'static str,
        #[source]
        source: OthelloError,
    },

    /// A bot returned no move although its color had legal moves.
    #[error("{bot} returned no move for {color} while legal moves exist")]
    NoMove { bot: &'static str, color: Color },
}

pub type Result<T> = std::result::Result<T, MatchRunnerError>;
