use smallvec::SmallVec;

use super::*;
use crate::error::Result;

/// Move lists handed to the search
pub type MoveList = SmallVec<[Move; 64]>;

impl Board {
    /// Strictly legal destinations of `id`, using a fresh analysis of its own king.
    pub fn moves(&self, id: PieceId) -> Result<Squares> {
        let piece = self.piece(id)?;
        let safety = self.current_safety(piece.color)?;
        self.filter_moves(id, piece, safety.as_ref())
    }

    /// Intersects the pseudo-legal moves of `id` with what its king's checks and pins allow.
    fn filter_moves(&self, id: PieceId, piece: Piece, safety: Option<&KingSafety>) -> Result<Squares> {
        let from = self.square_of(id)?;
        if piece.piece_type == Type::King {
            return Ok(self.safe_king_moves(from, piece.color));
        }

        let mut moves = self.possible_moves(id)?;
        let Some(safety) = safety else {
            return Ok(moves);
        };

        let allowed = match (safety.checks.len(), safety.pin_of(id)) {
            (0, None) => return Ok(moves),
            (0, Some(pin)) => pin_line(from, pin.attacker)?,
            (1, None) => self.check_line_of(piece.color, safety.checks[0])?,
            // pinned and checked, or double check: only the king moves
            _ => return Ok(Squares::new()),
        };

        moves.retain(|target| allowed.contains(target));
        Ok(moves)
    }

    /// Cells that answer a single check by `checker`. A knight cannot be
    /// blocked, so its line is only its own cell.
    fn check_line_of(&self, color: Color, checker: PieceId) -> Result<Squares> {
        let at = self.square_of(checker)?;
        if self.piece(checker)?.piece_type == Type::Knight {
            return Ok(Squares::from_slice(&[at]));
        }
        match self.king_of(color) {
            Some(king) => check_line(self.square_of(king)?, at),
            None => Ok(Squares::from_slice(&[at])),
        }
    }

    /// Every legal move of `color`, pieces in registry order (kings first).
    ///
    /// A pawn move onto the promotion row is listed once per promotion choice.
    pub fn legal_moves_for(&self, color: Color) -> Result<MoveList> {
        let safety = self.current_safety(color)?;
        let promotion_row = self.promotion_row(color);
        let mut all_moves = MoveList::new();

        for id in self.pieces_of_color(color) {
            let piece = self.piece(id)?;
            for to in self.filter_moves(id, piece, safety.as_ref())? {
                if piece.piece_type == Type::Pawn && to.row == promotion_row {
                    all_moves.extend(
                        Type::PROMOTIONS
                            .iter()
                            .map(|&choice| Move::with_promotion(id, to, choice)),
                    );
                } else {
                    all_moves.push(Move::new(id, to));
                }
            }
        }

        Ok(all_moves)
    }

    pub fn has_legal_moves(&self, color: Color) -> Result<bool> {
        Ok(!self.legal_moves_for(color)?.is_empty())
    }

    /// False for a side without a king
    pub fn is_in_check(&self, color: Color) -> Result<bool> {
        Ok(self
            .current_safety(color)?
            .is_some_and(|safety| safety.is_in_check()))
    }

    pub fn is_checkmate(&self, color: Color) -> Result<bool> {
        Ok(self.is_in_check(color)? && !self.has_legal_moves(color)?)
    }

    pub fn is_stalemate(&self, color: Color) -> Result<bool> {
        Ok(!self.is_in_check(color)? && !self.has_legal_moves(color)?)
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth
    /// Used to validate move generation and make/unmake symmetry
    pub fn perft(&mut self, depth: u32, color: Color) -> Result<u64> {
        if depth == 0 {
            return Ok(1);
        }

        let moves = self.legal_moves_for(color)?;
        if depth == 1 {
            return Ok(moves.len() as u64);
        }

        let mut nodes = 0;
        for mv in moves {
            let undo = self.make_move(mv)?;
            nodes += self.perft(depth - 1, color.opposite())?;
            self.unmake_move(undo)?;
        }
        Ok(nodes)
    }
}
