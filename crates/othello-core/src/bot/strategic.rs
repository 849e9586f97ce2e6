//! One-ply positional move selection.

use log::trace;

use crate::board::Board;
use crate::bot::{Bot, BotKind};
use crate::color::Color;
use crate::eval::evaluate;
use crate::move_list::MoveList;
use crate::square::Square;
use crate::types::Score;

/// Plays the move whose resulting position evaluates best for its own color.
///
/// Looks exactly one ply ahead, so it picks the same move as a depth-1
/// search.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrategicBot;

impl StrategicBot {
    pub fn new() -> Self {
        StrategicBot
    }
}

impl Bot for StrategicBot {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Square> {
        let move_list = MoveList::new(board, color);
        let mut best: Option<(Square, Score)> = None;
        for m in move_list.iter() {
            let next = board.make_move_with_flipped(m.sq, m.flipped, color);
            let score = evaluate(&next, color);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((m.sq, score));
            }
        }
        trace!("strategic {color}: {best:?}");
        best.map(|(sq, _)| sq)
    }

    fn kind(&self) -> BotKind {
        BotKind::Strategic
    }
}
