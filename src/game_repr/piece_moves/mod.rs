pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;

use super::{Board, Color, Offset, PieceId, Square, Squares, Type};
use crate::error::Result;

impl Board {
    /// Pseudo-legal destinations of `id`: its movement pattern only, ignoring checks and pins.
    pub fn possible_moves(&self, id: PieceId) -> Result<Squares> {
        let piece = self.piece(id)?;
        let from = self.square_of(id)?;
        Ok(match piece.piece_type {
            Type::King => self.king_moves(from, piece.color),
            Type::Queen => self.queen_moves(from, piece.color),
            Type::Rook => self.rook_moves(from, piece.color),
            Type::Bishop => self.bishop_moves(from, piece.color),
            Type::Knight => self.knight_moves(from, piece.color),
            Type::Pawn => self.pawn_moves(from, piece.color),
        })
    }

    /// Squares `id` attacks, friendly-occupied ones included.
    pub fn attacked_squares(&self, id: PieceId) -> Result<Squares> {
        let piece = self.piece(id)?;
        let from = self.square_of(id)?;
        Ok(match piece.piece_type {
            Type::King => self.king_attacks(from),
            Type::Queen => self.queen_attacks(from),
            Type::Rook => self.rook_attacks(from),
            Type::Bishop => self.bishop_attacks(from),
            Type::Knight => self.knight_attacks(from),
            Type::Pawn => self.pawn_attacks(from, piece.color),
        })
    }

    /// Walks each direction one cell at a time. Empty cells are added and the
    /// walk continues; an enemy cell is added and ends the walk; a friendly
    /// cell ends the walk without being added.
    pub(crate) fn slide_moves_into(
        &self,
        from: Square,
        color: Color,
        directions: &[Offset],
        moves: &mut Squares,
    ) {
        for &direction in directions {
            let mut cursor = from.offset(direction);
            while self.is_valid_position(cursor) {
                match self.occupant(cursor) {
                    None => moves.push(cursor),
                    Some((_, p)) if p.color != color => {
                        moves.push(cursor);
                        break;
                    }
                    Some(_) => break,
                }
                cursor = cursor.offset(direction);
            }
        }
    }

    /// Same walk as [`Self::slide_moves_into`] but the first blocker is always included.
    pub(crate) fn slide_attacks_into(&self, from: Square, directions: &[Offset], attacks: &mut Squares) {
        for &direction in directions {
            let mut cursor = from.offset(direction);
            while self.is_valid_position(cursor) {
                attacks.push(cursor);
                if self.occupant(cursor).is_some() {
                    break;
                }
                cursor = cursor.offset(direction);
            }
        }
    }

    /// Single steps by each offset onto empty or enemy cells
    pub(crate) fn step_moves_into(&self, from: Square, color: Color, offsets: &[Offset], moves: &mut Squares) {
        for &offset in offsets {
            let target = from.offset(offset);
            if !self.is_valid_position(target) {
                continue;
            }
            match self.occupant(target) {
                Some((_, p)) if p.color == color => {}
                _ => moves.push(target),
            }
        }
    }

    pub(crate) fn step_attacks_into(&self, from: Square, offsets: &[Offset], attacks: &mut Squares) {
        attacks.extend(
            offsets
                .iter()
                .map(|&offset| from.offset(offset))
                .filter(|&target| self.is_valid_position(target)),
        );
    }
}
