use othello_core::bot::{Bot, BotKind, GreedyBot, MinimaxBot, RandomBot, StrategicBot, resolve};
use othello_core::eval::evaluate;
use othello_core::search::search;
use othello_core::{
    Board, Color, Difficulty, Square, apply_move, initial_board, is_terminal, legal_moves,
    next_player,
};

fn play_game(black: &mut dyn Bot, white: &mut dyn Bot) -> Board {
    let mut board = initial_board();
    let mut color = Color::Black;
    while !is_terminal(&board) {
        let bot: &mut dyn Bot = match color {
            Color::Black => &mut *black,
            Color::White => &mut *white,
        };
        let sq = bot.choose_move(&board, color).unwrap();
        assert!(legal_moves(&board, color).contains(&sq));
        board = apply_move(&board, sq, color).unwrap();
        color = next_player(&board, color);
    }
    board
}

#[test]
fn test_every_bot_finishes_a_game() {
    for kind in BotKind::ALL {
        let mut bot = resolve(kind.id()).unwrap();
        let mut opponent = RandomBot::with_seed(7);
        let board = play_game(bot.as_mut(), &mut opponent);
        assert!(is_terminal(&board));
    }
}

#[test]
fn test_deterministic_bots_repeat_their_games() {
    let first = play_game(&mut GreedyBot::new(), &mut StrategicBot::new());
    let second = play_game(&mut GreedyBot::new(), &mut StrategicBot::new());
    assert_eq!(first, second);

    let first = play_game(&mut MinimaxBot::new(2), &mut GreedyBot::new());
    let second = play_game(&mut MinimaxBot::new(2), &mut GreedyBot::new());
    assert_eq!(first, second);
}

#[test]
fn test_search_is_repeatable() {
    let board = apply_move(&initial_board(), Square::F5, Color::Black).unwrap();
    let a = search(&board, 4, Color::White);
    let b = search(&board, 4, Color::White);
    assert_eq!(a, b);
}

#[test]
fn test_minimax_forced_move() {
    // Black's only legal move is C1 and it leaves White without any disc.
    let board = Board::from_string(
        "XO------
         --------
         --------
         --------
         --------
         --------
         --------
         --------",
    )
    .unwrap();
    let result = search(&board, 4, Color::Black);
    let after = apply_move(&board, Square::C1, Color::Black).unwrap();
    assert_eq!(result.best_move, Some(Square::C1));
    assert_eq!(result.score, evaluate(&after, Color::Black));
}

#[test]
fn test_bots_pass_when_no_move() {
    let board = Board::from_bitboards(u64::MAX, 0);
    for kind in BotKind::ALL {
        let mut bot = resolve(kind.id()).unwrap();
        assert_eq!(bot.choose_move(&board, Color::White), None, "{kind}");
    }
}

#[test]
fn test_difficulty_bots_play_legal_moves() {
    let board = initial_board();
    for difficulty in Difficulty::ALL {
        let mut bot = difficulty.create_bot();
        let sq = bot.choose_move(&board, Color::Black).unwrap();
        assert!(legal_moves(&board, Color::Black).contains(&sq));
    }
}
