// AI Agent - exhaustive minimax
//
// Plain depth-limited minimax over the shared board: every node applies a
// move, recurses for the opponent and undoes the move before trying the
// next one. No pruning and no position cache, so the result at a given
// depth is exactly the minimax value.
//
// Key features:
// - Deterministic (same position and depth always give the same move)
// - Pluggable evaluation through the `Evaluator` trait
// - Optional root-parallel search on a rayon pool, one board clone per root move

mod evaluation;
mod minimax;
mod minimax_player;
mod search;

#[cfg(test)]
mod tests;

pub use evaluation::{piece_value, Evaluator, MaterialEvaluator};
pub use minimax::{legal_moves, minimax, mate_score, Scored, SearchStats, MATE_SCORE};
pub use minimax_player::{Difficulty, MinimaxPlayer};
pub use search::{search, search_parallel, SearchResult};
