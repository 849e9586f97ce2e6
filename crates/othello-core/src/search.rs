//! Game tree search engine.
//!
//! Depth-limited minimax with alpha-beta pruning. The side that starts the
//! search maximizes [`evaluate`] from its own point of view, the opponent
//! minimizes it. Children are generated with the rules engine, so every
//! simulated move places a disc and flips the bracketed runs.
//!
//! Moves are tried in row-major scan order and a later move replaces the best
//! one only if it is strictly better, so ties go to the earlier square and
//! results are deterministic.

pub mod search_result;

use log::debug;
use rayon::prelude::*;

use crate::board::Board;
use crate::color::Color;
use crate::constants::SCORE_INF;
use crate::eval::evaluate;
use crate::move_list::MoveList;
use crate::search::search_result::SearchResult;
use crate::square::Square;
use crate::types::{Depth, Score};

/// What the search does at a node where the side to move has no legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassPolicy {
    /// Treat the node as a leaf and return its static evaluation, even though
    /// the opponent may still have moves.
    #[default]
    Leaf,
    /// Pass the turn to the opponent without consuming depth. The node is a
    /// leaf only when neither side can move.
    PassTurn,
}

/// Tunable search parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub pass_policy: PassPolicy,
}

/// Per-search state threaded through the recursion.
struct SearchContext {
    root_color: Color,
    options: SearchOptions,
    n_nodes: u64,
}

impl SearchContext {
    fn new(root_color: Color, options: SearchOptions) -> Self {
        SearchContext {
            root_color,
            options,
            n_nodes: 0,
        }
    }
}

/// Searches `board` to `depth` plies for `color` with default options.
///
/// # Returns
///
/// The minimax score from `color`'s point of view and the move achieving it.
/// `best_move` is `None` at depth 0 or when `color` has no legal move.
pub fn search(board: &Board, depth: Depth, color: Color) -> SearchResult {
    search_with_options(board, depth, color, &SearchOptions::default())
}

/// Searches `board` to `depth` plies for `color`.
pub fn search_with_options(
    board: &Board,
    depth: Depth,
    color: Color,
    options: &SearchOptions,
) -> SearchResult {
    let mut ctx = SearchContext::new(color, *options);
    let (score, best_move) = minimax(&mut ctx, board, depth, -SCORE_INF, SCORE_INF, true);
    let result = SearchResult::new(score, best_move, ctx.n_nodes, depth);
    log_result(color, &result);
    result
}

/// Same as [`search`], evaluating the root moves in parallel.
pub fn search_parallel(board: &Board, depth: Depth, color: Color) -> SearchResult {
    search_parallel_with_options(board, depth, color, &SearchOptions::default())
}

/// Same as [`search_with_options`], evaluating the root moves in parallel.
///
/// Each root move is searched with a full window on its own thread, then the
/// first strictly best move is kept. Score and move are identical to the
/// sequential search; only the node count differs.
pub fn search_parallel_with_options(
    board: &Board,
    depth: Depth,
    color: Color,
    options: &SearchOptions,
) -> SearchResult {
    let move_list = MoveList::new(board, color);
    if depth == 0 || move_list.is_empty() {
        return search_with_options(board, depth, color, options);
    }

    let scored: Vec<(Square, Score, u64)> = move_list
        .as_slice()
        .par_iter()
        .map(|m| {
            let mut ctx = SearchContext::new(color, *options);
            let next = board.make_move_with_flipped(m.sq, m.flipped, color);
            let (score, _) = minimax(&mut ctx, &next, depth - 1, -SCORE_INF, SCORE_INF, false);
            (m.sq, score, ctx.n_nodes)
        })
        .collect();

    let mut best_score = -SCORE_INF;
    let mut best_move = None;
    let mut n_nodes = 1;
    for &(sq, score, nodes) in &scored {
        n_nodes += nodes;
        if score > best_score {
            best_score = score;
            best_move = Some(sq);
        }
    }

    let result = SearchResult::new(best_score, best_move, n_nodes, depth);
    log_result(color, &result);
    result
}

fn log_result(color: Color, result: &SearchResult) {
    debug!(
        "search {color} depth={} score={} move={} nodes={}",
        result.depth,
        result.score,
        result
            .best_move
            .map_or_else(|| "none".to_string(), |sq| sq.to_string()),
        result.n_nodes
    );
}

/// Alpha-beta minimax.
///
/// # Arguments
///
/// * `ctx` - Search context holding the root color and the node counter.
/// * `board` - Position to search.
/// * `depth` - Remaining depth in plies.
/// * `alpha` - Lower bound of the window.
/// * `beta` - Upper bound of the window.
/// * `maximizing` - `true` when the root color is to move.
///
/// # Returns
///
/// The score from the root color's point of view and the best move at this
/// node, if it had one.
fn minimax(
    ctx: &mut SearchContext,
    board: &Board,
    depth: Depth,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
) -> (Score, Option<Square>) {
    ctx.n_nodes += 1;

    if depth == 0 {
        return (evaluate(board, ctx.root_color), None);
    }

    let side_to_move = if maximizing {
        ctx.root_color
    } else {
        ctx.root_color.opponent()
    };

    let move_list = MoveList::new(board, side_to_move);
    if move_list.is_empty() {
        return match ctx.options.pass_policy {
            PassPolicy::Leaf => (evaluate(board, ctx.root_color), None),
            PassPolicy::PassTurn => {
                if board.has_legal_moves(side_to_move.opponent()) {
                    let (score, _) = minimax(ctx, board, depth, alpha, beta, !maximizing);
                    (score, None)
                } else {
                    (evaluate(board, ctx.root_color), None)
                }
            }
        };
    }

    let mut best_move = None;
    if maximizing {
        let mut max_eval = -SCORE_INF;
        for m in move_list.iter() {
            let next = board.make_move_with_flipped(m.sq, m.flipped, side_to_move);
            let (score, _) = minimax(ctx, &next, depth - 1, alpha, beta, false);
            if score > max_eval {
                max_eval = score;
                best_move = Some(m.sq);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        (max_eval, best_move)
    } else {
        let mut min_eval = SCORE_INF;
        for m in move_list.iter() {
            let next = board.make_move_with_flipped(m.sq, m.flipped, side_to_move);
            let (score, _) = minimax(ctx, &next, depth - 1, alpha, beta, true);
            if score < min_eval {
                min_eval = score;
                best_move = Some(m.sq);
            }
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        (min_eval, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{apply_move, legal_moves};

    /// Plain minimax without pruning, used as an oracle.
    fn full_minimax(board: &Board, depth: Depth, side: Color, root: Color) -> Score {
        let moves = legal_moves(board, side);
        if depth == 0 || moves.is_empty() {
            return evaluate(board, root);
        }
        let scores = moves.iter().map(|&sq| {
            let next = apply_move(board, sq, side).unwrap();
            full_minimax(&next, depth - 1, side.opponent(), root)
        });
        if side == root {
            scores.max().unwrap()
        } else {
            scores.min().unwrap()
        }
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let board = Board::new();
        let result = search(&board, 0, Color::Black);
        assert_eq!(result.score, evaluate(&board, Color::Black));
        assert_eq!(result.best_move, None);
        assert_eq!(result.n_nodes, 1);
    }

    #[test]
    fn test_depth_one_picks_best_static_move() {
        let board = Board::new();
        let result = search(&board, 1, Color::Black);
        let best = legal_moves(&board, Color::Black)
            .into_iter()
            .map(|sq| evaluate(&apply_move(&board, sq, Color::Black).unwrap(), Color::Black))
            .max()
            .unwrap();
        assert_eq!(result.score, best);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_alpha_beta_matches_plain_minimax() {
        let mut board = Board::new();
        let mut color = Color::Black;
        for sq in [Square::F5, Square::D6, Square::C3, Square::D3, Square::C4] {
            board = apply_move(&board, sq, color).unwrap();
            color = color.opponent();
        }
        for depth in 1..=3 {
            let result = search(&board, depth, color);
            assert_eq!(result.score, full_minimax(&board, depth, color, color));
        }
    }

    #[test]
    fn test_no_legal_moves_leaf() {
        // White has no move at all; Black has moves.
        let board = Board::from_string(
            "XO------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------",
        )
        .unwrap();
        let result = search(&board, 4, Color::White);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate(&board, Color::White));
    }

    #[test]
    fn test_pass_turn_policy_continues() {
        // White cannot move, Black can: under PassTurn the search keeps
        // going with Black's replies instead of stopping at the root.
        let board = Board::from_string(
            "XO------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------",
        )
        .unwrap();
        let options = SearchOptions {
            pass_policy: PassPolicy::PassTurn,
        };
        let result = search_with_options(&board, 1, Color::White, &options);
        assert_eq!(result.best_move, None);
        assert!(result.n_nodes > 1);

        let after_c1 = apply_move(&board, Square::C1, Color::Black).unwrap();
        assert_eq!(result.score, evaluate(&after_c1, Color::White));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut board = Board::new();
        let mut color = Color::Black;
        for sq in [Square::D3, Square::C5, Square::E6, Square::F5] {
            board = apply_move(&board, sq, color).unwrap();
            color = color.opponent();
        }
        for depth in 0..=4 {
            let seq = search(&board, depth, color);
            let par = search_parallel(&board, depth, color);
            assert_eq!(seq.score, par.score, "depth {depth}");
            assert_eq!(seq.best_move, par.best_move, "depth {depth}");
        }
    }
}
