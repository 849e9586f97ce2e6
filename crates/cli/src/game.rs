//! Game state management for the Othello CLI.
//!
//! `GameState` owns the board and the side to move, and applies the turn
//! rules around the core engine: a side without a legal move is skipped and
//! the game ends when neither side can move.

use colored::Colorize;
use othello_core::{
    Board, Color, GameOutcome, Result, Square, apply_move, initial_board, is_terminal, legal_moves,
    next_player, outcome, score,
};

/// Represents the state of an Othello game.
pub struct GameState {
    board: Board,
    side_to_move: Color,
    last_move: Option<Square>,
    result_reported: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position with Black to move.
    pub fn new() -> Self {
        Self {
            board: initial_board(),
            side_to_move: Color::Black,
            last_move: None,
            result_reported: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            last_move: None,
            result_reported: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which color moves next. Meaningless once the game is over.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn last_move(&self) -> Option<Square> {
        self.last_move
    }

    /// Returns the disc count as `(black, white)`.
    pub fn score(&self) -> (u32, u32) {
        score(&self.board)
    }

    pub fn is_game_over(&self) -> bool {
        is_terminal(&self.board)
    }

    pub fn outcome(&self) -> GameOutcome {
        outcome(&self.board)
    }

    /// Returns the outcome the first time it is called on a finished game,
    /// `None` before the game is over and on every later call.
    pub fn take_final_outcome(&mut self) -> Option<GameOutcome> {
        if self.result_reported || !self.is_game_over() {
            return None;
        }
        self.result_reported = true;
        Some(self.outcome())
    }

    /// Plays `sq` for the side to move and hands the turn over.
    ///
    /// # Returns
    /// The color that had to pass as a result of the move, if any.
    ///
    /// # Errors
    /// Returns `OthelloError::InvalidMove` if `sq` is not legal; the state is
    /// left unchanged.
    pub fn make_move(&mut self, sq: Square) -> Result<Option<Color>> {
        let mover = self.side_to_move;
        self.board = apply_move(&self.board, sq, mover)?;
        self.last_move = Some(sq);
        self.side_to_move = next_player(&self.board, mover);

        let passed =
            (!self.is_game_over() && self.side_to_move == mover).then_some(mover.opponent());
        Ok(passed)
    }

    /// Prints a colored representation of the board to the terminal.
    pub fn print(&self) {
        let legal = if self.is_game_over() {
            Vec::new()
        } else {
            legal_moves(&self.board, self.side_to_move)
        };
        let (black_count, white_count) = self.score();

        println!("      a   b   c   d   e   f   g   h");
        println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

        for row in 0..8 {
            print!("  {} │", row + 1);

            for col in 0..8 {
                let Some(sq) = Square::from_row_col(row, col) else {
                    continue;
                };
                let is_last_move = Some(sq) == self.last_move;

                let symbol = match self.board.get(sq) {
                    Some(Color::Black) if is_last_move => " X ".on_bright_black().bright_green(),
                    Some(Color::White) if is_last_move => " O ".on_bright_black().bright_yellow(),
                    Some(Color::Black) => " X ".bright_green(),
                    Some(Color::White) => " O ".bright_yellow(),
                    None if legal.contains(&sq) => " · ".bright_cyan(),
                    None => "   ".normal(),
                };
                print!("{symbol}│");
            }

            match row {
                2 if !self.is_game_over() => {
                    let player_info = match self.side_to_move {
                        Color::Black => "Black's turn (X)".bright_green(),
                        Color::White => "White's turn (O)".bright_yellow(),
                    };
                    println!("   {player_info}");
                }
                3 => println!("   Black: {}", format!("{black_count:2}").bright_green()),
                4 => println!("   White: {}", format!("{white_count:2}").bright_yellow()),
                6 => match self.outcome() {
                    GameOutcome::Won(Color::Black) => println!("   {}", "Black wins!".bright_green()),
                    GameOutcome::Won(Color::White) => {
                        println!("   {}", "White wins!".bright_yellow())
                    }
                    GameOutcome::Drawn => println!("   {}", "Draw".bright_cyan()),
                    GameOutcome::Ongoing => println!(),
                },
                7 if self.is_game_over() => println!("   {}", "*** Game Over ***".bright_red()),
                _ => println!(),
            }

            if row < 7 {
                println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
            }
        }

        println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
    }
}
