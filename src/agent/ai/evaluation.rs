// Position evaluation
// Returns a score in centipawns, positive = good for White

use crate::error::Result;
use crate::game_repr::{Board, Color, PieceId, Type};

// Material values in centipawns
const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 300;
const BISHOP_VALUE: i32 = 300;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;

/// Bonus per pseudo-legal move of a knight or slider
const MOBILITY_BONUS: i32 = 4;
/// Bonus per row a pawn has advanced from its own back row
const PAWN_ADVANCE_BONUS: i32 = 10;
const CHECK_PENALTY: i32 = 50;
const PIN_PENALTY: i32 = 20;
/// Penalty per cell a king stands away from the nearest corner of its own back row
const KING_EXPOSURE_PENALTY: i32 = 5;

/// Scores a board from White's point of view.
///
/// Implemented for any `Fn(&Board) -> i32`, so a closure can stand in for
/// a full evaluator in tests. Scores must stay far below
/// [`MATE_SCORE`](super::MATE_SCORE) so mates dominate.
///
/// Board errors met while scoring (an illegal position, say) are returned,
/// and the search propagates them.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> Result<i32>;
}

impl<F> Evaluator for F
where
    F: Fn(&Board) -> i32,
{
    fn evaluate(&self, board: &Board) -> Result<i32> {
        Ok(self(board))
    }
}

/// Get material value for a piece type
pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King => 0,
    }
}

/// Material, mobility, pawn advancement and king exposure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialEvaluator;

impl MaterialEvaluator {
    /// Chebyshev distance from `king` to the nearer corner of its own back row.
    fn king_exposure(board: &Board, king: PieceId, color: Color) -> Result<i32> {
        let square = board.square_of(king)?;
        let back_row = match color {
            Color::White => board.rows() as i32 - 1,
            Color::Black => 0,
        };
        let rows_out = (square.row as i32 - back_row).abs();
        let col = square.col as i32;
        let cols_out = col.min(board.cols() as i32 - 1 - col);
        Ok(rows_out.max(cols_out))
    }

    fn side_score(&self, board: &Board, color: Color) -> Result<i32> {
        let last_row = board.rows() as i32 - 1;
        let mut score = 0;

        for (id, piece, square) in board.occupied().filter(|(_, piece, _)| piece.is(color)) {
            score += piece_value(piece.piece_type);
            match piece.piece_type {
                Type::Pawn => {
                    let advanced = match color {
                        Color::White => last_row - square.row as i32,
                        Color::Black => square.row as i32,
                    };
                    score += PAWN_ADVANCE_BONUS * advanced;
                }
                Type::Knight | Type::Bishop | Type::Rook | Type::Queen => {
                    score += MOBILITY_BONUS * board.possible_moves(id)?.len() as i32;
                }
                Type::King => {}
            }
        }

        if let Some(king) = board.king_of(color) {
            let safety = match board.king_safety(king) {
                Some(cached) => cached.clone(),
                None => board.analyze(king)?,
            };
            score -= CHECK_PENALTY * safety.checks.len() as i32;
            score -= PIN_PENALTY * safety.pins.len() as i32;
            score -= KING_EXPOSURE_PENALTY * Self::king_exposure(board, king, color)?;
        }

        Ok(score)
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board) -> Result<i32> {
        Ok(self.side_score(board, Color::White)? - self.side_score(board, Color::Black)?)
    }
}
