// Search entry points
//
// `search` runs minimax on the caller's board. `search_parallel` splits the
// root: each root move gets its own clone of the board and is searched on
// the current rayon pool (the global one unless the caller runs it inside
// `ThreadPool::install`), then the scores are folded back in enumeration
// order so the chosen move matches the sequential search.

use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use super::evaluation::Evaluator;
use super::minimax::{is_better, legal_moves, minimax, SearchStats};
use crate::error::{Error, Result};
use crate::game_repr::{Board, Color, Move};

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the side to move is mated or stalemated
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

/// Searches `depth` plies (at least 1) on the caller's board.
///
/// The board is back in its original state when this returns `Ok`.
pub fn search<E>(board: &mut Board, color: Color, depth: u8, evaluator: &E) -> Result<SearchResult>
where
    E: Evaluator + ?Sized,
{
    let start_time = Instant::now();
    let depth = depth.max(1);
    let mut stats = SearchStats::default();

    let scored = minimax(board, &legal_moves, evaluator, depth, color, &mut stats)?;

    let result = SearchResult {
        best_move: scored.best_move,
        score: scored.score,
        depth,
        nodes_searched: stats.nodes,
        time_ms: start_time.elapsed().as_millis() as u64,
    };
    print_search_info(&result, color);
    Ok(result)
}

/// Same result as [`search`], with root moves searched in parallel.
pub fn search_parallel<E>(board: &Board, color: Color, depth: u8, evaluator: &E) -> Result<SearchResult>
where
    E: Evaluator + Sync + ?Sized,
{
    let start_time = Instant::now();
    let depth = depth.max(1);

    let moves = legal_moves(board, color)?;
    if moves.is_empty() {
        // mate or stalemate: nothing to split
        return search(&mut board.clone(), color, depth, evaluator);
    }

    debug!(
        "splitting {} root moves over {} threads",
        moves.len(),
        rayon::current_num_threads()
    );
    let root_scores: Vec<Result<(i32, u64)>> = moves
        .as_slice()
        .par_iter()
        .map(|&mv| -> Result<(i32, u64)> {
            let mut worker = board.clone();
            let mut stats = SearchStats::default();
            worker.make_move(mv)?;
            let reply = minimax(
                &mut worker,
                &legal_moves,
                evaluator,
                depth - 1,
                color.opposite(),
                &mut stats,
            )?;
            debug!("root move {mv}: score {} ({} nodes)", reply.score, stats.nodes);
            Ok((reply.score, stats.nodes))
        })
        .collect();

    // the root node itself
    let mut nodes_searched = 1;
    let mut best: Option<(i32, Move)> = None;
    for (&mv, root_score) in moves.iter().zip(root_scores) {
        let (score, nodes) = root_score?;
        nodes_searched += nodes;
        if is_better(color, score, best.map(|(s, _)| s)) {
            best = Some((score, mv));
        }
    }
    let (score, best_move) = best.ok_or(Error::NoMovesAvailable { depth })?;

    let result = SearchResult {
        best_move: Some(best_move),
        score,
        depth,
        nodes_searched,
        time_ms: start_time.elapsed().as_millis() as u64,
    };
    print_search_info(&result, color);
    Ok(result)
}

fn print_search_info(result: &SearchResult, color: Color) {
    match result.best_move {
        Some(mv) => info!(
            "{color:?}: depth {} score {} best {mv} nodes {} time {}ms",
            result.depth, result.score, result.nodes_searched, result.time_ms
        ),
        None => info!(
            "{color:?}: no moves, score {} at depth {}",
            result.score, result.depth
        ),
    }
}
