//! Reversible move application.
//!
//! Every apply returns a record that its undo consumes. Records must be
//! undone in reverse order of application; the search walks one shared board
//! this way instead of copying it per node.

use std::fmt;

use log::trace;

use super::*;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: PieceId,
    pub to: Square,
    /// Replacement kind when a pawn reaches the promotion row
    pub promotion: Option<Type>,
}

impl Move {
    pub fn new(piece: PieceId, to: Square) -> Self {
        Self {
            piece,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(piece: PieceId, to: Square, choice: Type) -> Self {
        Self {
            piece,
            to,
            promotion: Some(choice),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.piece, self.to)?;
        if let Some(choice) = self.promotion {
            write!(f, "={}", choice.symbol().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

/// A captured piece and the registry slot it held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Capture {
    piece: PieceId,
    registry_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    piece: PieceId,
    from: Square,
    to: Square,
    registry_index: usize,
    captured: Option<Capture>,
}

impl MoveRecord {
    pub fn piece(&self) -> PieceId {
        self.piece
    }

    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }

    pub fn captured(&self) -> Option<PieceId> {
        self.captured.map(|c| c.piece)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotionRecord {
    pawn: PieceId,
    from: Square,
    to: Square,
    registry_index: usize,
    promoted: PieceId,
    captured: Option<Capture>,
}

impl PromotionRecord {
    pub fn pawn(&self) -> PieceId {
        self.pawn
    }

    pub fn promoted(&self) -> PieceId {
        self.promoted
    }

    pub fn captured(&self) -> Option<PieceId> {
        self.captured.map(|c| c.piece)
    }
}

/// Undo information returned by [`Board::make_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoInfo {
    Move(MoveRecord),
    Promotion(PromotionRecord),
}

impl Board {
    /// Checks the destination before anything is touched: on the board, and
    /// not holding a piece of the mover's color.
    fn check_destination(&self, color: Color, to: Square) -> Result<()> {
        if let Some(occupant) = self.lookup(to)? {
            if self.piece(occupant)?.color == color {
                return Err(Error::CellOccupied(to));
            }
        }
        Ok(())
    }

    fn take_capture(&mut self, to: Square) -> Result<Option<Capture>> {
        let Some(victim) = self.lookup(to)? else {
            return Ok(None);
        };
        let registry_index = self.forget(victim)?;
        self.remove(to)?;
        Ok(Some(Capture {
            piece: victim,
            registry_index,
        }))
    }

    fn restore_capture(&mut self, to: Square, captured: Option<Capture>) -> Result<()> {
        if let Some(capture) = captured {
            self.place(to, capture.piece)?;
            self.insert_into_registry(capture.piece, capture.registry_index)?;
        }
        Ok(())
    }

    /// Moves `piece` to `to`, capturing whatever enemy piece stands there.
    pub fn apply_move(&mut self, piece: PieceId, to: Square) -> Result<MoveRecord> {
        let color = self.piece(piece)?.color;
        let from = self.square_of(piece)?;
        self.check_destination(color, to)?;

        let registry_index = self.forget(piece)?;
        self.remove(from)?;
        let captured = self.take_capture(to)?;
        self.place(to, piece)?;
        self.insert_into_registry(piece, registry_index)?;

        trace!("apply {piece} {from}->{to} captured={:?}", captured.map(|c| c.piece));
        Ok(MoveRecord {
            piece,
            from,
            to,
            registry_index,
            captured,
        })
    }

    /// Exact inverse of [`Self::apply_move`]: same objects, same registry order.
    pub fn undo_move(&mut self, record: MoveRecord) -> Result<()> {
        self.forget(record.piece)?;
        self.remove(record.to)?;
        self.restore_capture(record.to, record.captured)?;
        self.place(record.from, record.piece)?;
        self.insert_into_registry(record.piece, record.registry_index)?;
        trace!("undo {} {}->{}", record.piece, record.to, record.from);
        Ok(())
    }

    /// Moves `pawn` to `to` and replaces it with a new piece of kind `choice`.
    ///
    /// The choice comes from the caller; it must be a queen, rook, bishop or knight.
    pub fn apply_promotion(&mut self, pawn: PieceId, to: Square, choice: Type) -> Result<PromotionRecord> {
        let piece = self.piece(pawn)?;
        if piece.piece_type != Type::Pawn || !choice.is_promotion_choice() {
            return Err(Error::InvalidPromotion { piece: pawn, choice });
        }
        let from = self.square_of(pawn)?;
        self.check_destination(piece.color, to)?;

        let registry_index = self.forget(pawn)?;
        self.remove(from)?;
        let captured = self.take_capture(to)?;
        let promoted = self.spawn(Piece::new(piece.color, choice));
        self.place(to, promoted)?;
        self.add_to_registry(promoted)?;

        trace!("promote {pawn} {from}->{to} as {promoted} ({choice:?})");
        Ok(PromotionRecord {
            pawn,
            from,
            to,
            registry_index,
            promoted,
            captured,
        })
    }

    /// Inverse of [`Self::apply_promotion`]. The promoted piece is released and
    /// the original pawn object goes back to its cell.
    pub fn undo_promotion(&mut self, record: PromotionRecord) -> Result<()> {
        self.forget(record.promoted)?;
        self.remove(record.to)?;
        self.despawn(record.promoted)?;
        self.restore_capture(record.to, record.captured)?;
        self.place(record.from, record.pawn)?;
        self.insert_into_registry(record.pawn, record.registry_index)?;
        trace!("undo promotion {} at {}", record.pawn, record.to);
        Ok(())
    }

    /// Applies `mv`, dispatching on whether it carries a promotion choice.
    pub fn make_move(&mut self, mv: Move) -> Result<UndoInfo> {
        match mv.promotion {
            Some(choice) => self.apply_promotion(mv.piece, mv.to, choice).map(UndoInfo::Promotion),
            None => self.apply_move(mv.piece, mv.to).map(UndoInfo::Move),
        }
    }

    pub fn unmake_move(&mut self, undo: UndoInfo) -> Result<()> {
        match undo {
            UndoInfo::Move(record) => self.undo_move(record),
            UndoInfo::Promotion(record) => self.undo_promotion(record),
        }
    }
}
