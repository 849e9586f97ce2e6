use othello_core::{Color, OthelloError};
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Othello(#[from] OthelloError),

    #[error("line editor error: {0}")]
    Readline(#[from] ReadlineError),

    #[error("{0} bot returned no move while it had legal moves")]
    BotWithoutMove(Color),
}

pub type Result<T> = std::result::Result<T, CliError>;
