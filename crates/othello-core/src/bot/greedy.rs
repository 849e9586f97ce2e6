//! Capture-maximizing move selection.

use log::trace;

use crate::board::Board;
use crate::bot::{Bot, BotKind};
use crate::color::Color;
use crate::eval::capture_count;
use crate::move_list::MoveList;
use crate::square::Square;

/// Takes the move that flips the most discs right now.
///
/// Ties go to the move found first in row-major order.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyBot;

impl GreedyBot {
    pub fn new() -> Self {
        GreedyBot
    }
}

impl Bot for GreedyBot {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Square> {
        let move_list = MoveList::new(board, color);
        let mut best: Option<(Square, u32)> = None;
        for m in move_list.iter() {
            let captured = capture_count(board, m.sq, color).unwrap_or(0);
            if best.is_none_or(|(_, most)| captured > most) {
                best = Some((m.sq, captured));
            }
        }
        trace!("greedy {color}: {best:?}");
        best.map(|(sq, _)| sq)
    }

    fn kind(&self) -> BotKind {
        BotKind::Greedy
    }
}
