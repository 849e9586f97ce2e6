//! Interactive terminal game loop.

use std::thread;
use std::time::Duration;

use colored::Colorize;
use log::{info, warn};
use othello_core::{Color, GameOutcome, Square};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::config::{Config, Player};
use crate::error::{CliError, Result};
use crate::game::GameState;

/// A line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(Square),
    New,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "new" | "n" => Some(Command::New),
        "help" | "h" | "?" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),
        other => other.parse::<Square>().ok().map(Command::Move),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <square>   play a move, e.g. d3");
    println!("  new        start a new game");
    println!("  help       show this message");
    println!("  quit       leave the program");
    println!();
}

/// Main game loop.
///
/// Bots move on their own after the configured delay; a human side is
/// prompted for input. Bot-only games end when the first game is over.
pub fn ui_loop(config: &Config) -> Result<()> {
    if let (Some(difficulty), None) = (config.difficulty, config.difficulty_side()) {
        warn!("--difficulty {difficulty} ignored: the computer's side is played by a human");
    }

    let mut players = [config.player(Color::Black), config.player(Color::White)];
    let any_human = players.iter().any(|p| matches!(p, Player::Human));
    let delay = Duration::from_millis(config.delay_ms);

    println!(
        "{} vs {}",
        format!("Black (X): {}", players[0].label()).bright_green(),
        format!("White (O): {}", players[1].label()).bright_yellow()
    );
    println!();

    let mut rl = DefaultEditor::new()?;
    let mut game = GameState::new();

    let mut redraw = true;
    loop {
        if redraw {
            game.print();
            println!();
        }
        redraw = true;

        if let Some(result) = game.take_final_outcome() {
            report_result(&game, result);
            if !any_human {
                return Ok(());
            }
        } else if !game.is_game_over() {
            let side = game.side_to_move();
            if let Player::Bot(bot) = &mut players[side_index(side)] {
                thread::sleep(delay);
                let sq = bot
                    .choose_move(game.board(), side)
                    .ok_or(CliError::BotWithoutMove(side))?;
                println!("{side} ({}) plays {sq}\n", bot.kind().display_name());
                play(&mut game, sq)?;
                continue;
            }
        }

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        if line.trim().is_empty() {
            redraw = false;
            continue;
        }
        let _ = rl.add_history_entry(line.as_str());
        println!();

        match parse_command(&line) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::New) => game = GameState::new(),
            Some(Command::Help) => {
                print_help();
                redraw = false;
            }
            Some(Command::Move(_)) if game.is_game_over() => {
                println!("The game is over. Type `new` to play again.\n");
                redraw = false;
            }
            Some(Command::Move(sq)) => {
                if let Err(err) = play(&mut game, sq) {
                    println!("{}\n", err.to_string().bright_red());
                }
            }
            None => println!("Unknown command: {}\n", line.trim()),
        }
    }
}

fn side_index(color: Color) -> usize {
    match color {
        Color::Black => 0,
        Color::White => 1,
    }
}

/// Plays `sq` and announces a resulting pass.
fn play(game: &mut GameState, sq: Square) -> Result<()> {
    if let Some(passed) = game.make_move(sq)? {
        println!("{passed} has no legal move and passes.\n");
    }
    Ok(())
}

fn report_result(game: &GameState, result: GameOutcome) {
    let (black, white) = game.score();
    match result {
        GameOutcome::Won(color) => info!("game over: {color} wins {black}-{white}"),
        GameOutcome::Drawn => info!("game over: draw {black}-{white}"),
        GameOutcome::Ongoing => {}
    }
    println!("Final score: Black {black} - White {white}\n");
}
