//! Search result types.

use crate::square::Square;
use crate::types::{Depth, Score};

/// Result of a search operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax score from the searching side's point of view.
    pub score: Score,
    /// Best root move, `None` at depth 0 or when the root side has no move.
    pub best_move: Option<Square>,
    pub n_nodes: u64,
    pub depth: Depth,
}

impl SearchResult {
    /// Creates a SearchResult.
    ///
    /// # Arguments
    ///
    /// * `score` - Score of the best line.
    /// * `best_move` - Best move found during search.
    /// * `n_nodes` - Total nodes searched.
    /// * `depth` - Requested search depth.
    pub fn new(score: Score, best_move: Option<Square>, n_nodes: u64, depth: Depth) -> Self {
        Self {
            score,
            best_move,
            n_nodes,
            depth,
        }
    }
}
