//! Othello rules engine and computer opponents.
//!
//! The crate is split into the board model ([`board`], [`bitboard`], [`square`],
//! [`color`]), the rules engine ([`rules`]), the positional evaluator ([`eval`]),
//! the alpha-beta search ([`search`]) and the bot strategies built on top of
//! them ([`bot`], [`level`]).

pub mod bitboard;
pub mod board;
pub mod bot;
pub mod color;
pub mod constants;
pub mod error;
pub mod eval;
pub mod flip;
pub mod level;
pub mod move_list;
pub mod perft;
pub mod rules;
pub mod search;
pub mod square;
pub mod types;

pub use board::Board;
pub use bot::{Bot, BotKind};
pub use color::{Cell, Color};
pub use error::{OthelloError, Result};
pub use level::Difficulty;
pub use rules::{
    GameOutcome, apply_move, flip_count, initial_board, is_terminal, legal_moves, next_player,
    outcome, score, winner,
};
pub use search::search_result::SearchResult;
pub use square::Square;
