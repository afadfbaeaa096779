// Minimax over the shared board
//
// One recursive function for both sides: White maximises, Black minimises.
// Each frame owns exactly the move it applied and undoes it before
// returning, so the board is unchanged when the search finishes, including
// when an error propagates out of a deeper frame.
//
// Terminal tests, in order:
// - depth exhausted: static evaluation
// - no legal moves and in check: mate, scored so faster mates weigh more
// - no legal moves otherwise: stalemate, 0

use crate::error::{Error, Result};
use crate::game_repr::{Board, Color, Move, MoveList};

use super::evaluation::Evaluator;

/// Checkmate score - use large value but leave room for mate distance
pub const MATE_SCORE: i32 = 30000;

/// Score of a position where `mated` has been checkmated with `depth` plies
/// of search left. More remaining depth means the mate came sooner.
pub fn mate_score(mated: Color, depth: u8) -> i32 {
    let magnitude = MATE_SCORE + depth as i32;
    match mated {
        Color::White => -magnitude,
        Color::Black => magnitude,
    }
}

/// Score of a node and the move that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    pub score: i32,
    /// `None` for leaves and terminal positions
    pub best_move: Option<Move>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
}

/// Default move generator: every strictly legal move of `color`.
pub fn legal_moves(board: &Board, color: Color) -> Result<MoveList> {
    board.legal_moves_for(color)
}

/// Minimax value of `board` with `color` to move, searched `depth` plies deep.
///
/// # Arguments
///
/// * `board` - Shared board, mutated and restored by every frame
/// * `generate` - Move enumerator for the side to move
/// * `evaluator` - Static scorer for depth-exhausted leaves
/// * `depth` - Remaining plies
/// * `color` - Side to move
/// * `stats` - Node counters, accumulated across calls
///
/// # Returns
///
/// The best score for `color` (max for White, min for Black) and the first
/// move reaching it in enumeration order.
///
/// # Errors
///
/// Any board error from evaluation, move generation or make/unmake, and
/// [`Error::NoMovesAvailable`] if a non-terminal node yields no best move.
pub fn minimax<G, E>(
    board: &mut Board,
    generate: &G,
    evaluator: &E,
    depth: u8,
    color: Color,
    stats: &mut SearchStats,
) -> Result<Scored>
where
    G: Fn(&Board, Color) -> Result<MoveList>,
    E: Evaluator + ?Sized,
{
    stats.nodes += 1;

    if depth == 0 {
        stats.leaves += 1;
        return Ok(Scored {
            score: evaluator.evaluate(board)?,
            best_move: None,
        });
    }

    // Fresh analysis for both kings; move generation below reuses it
    for side in [Color::White, Color::Black] {
        if let Some(king) = board.king_of(side) {
            board.checks_and_pins(king)?;
        }
    }

    let moves = generate(board, color)?;
    if moves.is_empty() {
        let score = if board.is_in_check(color)? {
            mate_score(color, depth)
        } else {
            0
        };
        return Ok(Scored {
            score,
            best_move: None,
        });
    }

    let mut best: Option<(i32, Move)> = None;
    for mv in moves {
        let undo = board.make_move(mv)?;
        let reply = minimax(board, generate, evaluator, depth - 1, color.opposite(), stats);
        board.unmake_move(undo)?;
        let score = reply?.score;

        if is_better(color, score, best.map(|(s, _)| s)) {
            best = Some((score, mv));
        }
    }

    let (score, mv) = best.ok_or(Error::NoMovesAvailable { depth })?;
    Ok(Scored {
        score,
        best_move: Some(mv),
    })
}

/// Strict comparison so ties keep the earlier move
pub(super) fn is_better(color: Color, score: i32, best: Option<i32>) -> bool {
    match (color, best) {
        (_, None) => true,
        (Color::White, Some(best)) => score > best,
        (Color::Black, Some(best)) => score < best,
    }
}
