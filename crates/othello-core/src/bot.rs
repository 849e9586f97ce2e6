//! Computer opponents.
//!
//! Every bot answers the same question: given a board and the color it plays,
//! which square does it take? A bot returns `None` exactly when that color has
//! no legal move, so the caller can treat it as a pass.

pub mod greedy;
pub mod minimax;
pub mod random;
pub mod registry;
pub mod strategic;

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

pub use greedy::GreedyBot;
pub use minimax::MinimaxBot;
pub use random::RandomBot;
pub use registry::{BotDescriptor, BotKind, create_bot, descriptors, resolve};
pub use strategic::StrategicBot;

/// A move-selection strategy.
///
/// `choose_move` takes `&mut self` so that stateful strategies (the random
/// bot's generator) need no interior mutability. The returned square, if any,
/// is always one of `legal_moves(board, color)`.
pub trait Bot: Send {
    /// Picks a move for `color` on `board`, or `None` when `color` must pass.
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Square>;

    /// Registry entry this bot was built from.
    fn kind(&self) -> BotKind;
}
