//! Check and pin analysis from a king's point of view.

use smallvec::SmallVec;

use super::board::Snapshot;
use super::*;
use crate::error::{Error, Result};

/// Most checks a reachable position can hold: one discovered line piece plus the mover.
pub const MAX_CHECKS: usize = 2;

/// A friendly piece standing alone between its king and an enemy slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub piece: PieceId,
    pub axis: Axis,
    pub attacker: Square,
}

/// Checks and pins of one king, valid for the board version it was computed at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KingSafety {
    pub checks: SmallVec<[PieceId; 2]>,
    pub pins: SmallVec<[Pin; 4]>,
}

impl KingSafety {
    pub fn is_in_check(&self) -> bool {
        !self.checks.is_empty()
    }

    pub fn pin_of(&self, id: PieceId) -> Option<&Pin> {
        self.pins.iter().find(|pin| pin.piece == id)
    }
}

impl Board {
    /// Scans out from `king` and classifies attackers and shields.
    ///
    /// Along each of the 8 rays: the first friendly piece is a shield
    /// candidate and a second one neutralises the ray; an enemy slider
    /// matching the ray's axis pins the candidate or, with no candidate,
    /// checks the king; any other piece just blocks. Knights and pawns are
    /// tested from their own offsets afterwards.
    ///
    /// Fails with [`Error::IllegalPosition`] when more than [`MAX_CHECKS`]
    /// checks are found.
    pub fn analyze(&self, king: PieceId) -> Result<KingSafety> {
        let piece = self.piece(king)?;
        if piece.piece_type != Type::King {
            return Err(Error::NotAKing(king));
        }
        let color = piece.color;
        let origin = self.square_of(king)?;
        let mut safety = KingSafety::default();

        for &direction in &ALL_DIRECTIONS {
            let axis = Axis::of(direction);
            let mut shield: Option<PieceId> = None;
            let mut cursor = origin.offset(direction);

            while self.is_valid_position(cursor) {
                let here = cursor;
                cursor = cursor.offset(direction);
                let Some((id, p)) = self.occupant(here) else {
                    continue;
                };

                if p.color == color {
                    if shield.is_some() {
                        break;
                    }
                    shield = Some(id);
                    continue;
                }

                if p.piece_type.slides_along(axis) {
                    match shield {
                        Some(pinned) => safety.pins.push(Pin {
                            piece: pinned,
                            axis,
                            attacker: here,
                        }),
                        None => safety.checks.push(id),
                    }
                }
                break;
            }
        }

        for &offset in &KNIGHT_OFFSETS {
            if let Some((id, p)) = self.occupant(origin.offset(offset)) {
                if p == Piece::new(color.opposite(), Type::Knight) {
                    safety.checks.push(id);
                }
            }
        }

        for side in [-1, 1] {
            if let Some((id, p)) = self.occupant(origin.offset((color.forward(), side))) {
                if p == Piece::new(color.opposite(), Type::Pawn) {
                    safety.checks.push(id);
                }
            }
        }

        if safety.checks.len() > MAX_CHECKS {
            return Err(Error::IllegalPosition {
                checks: safety.checks.len(),
            });
        }
        Ok(safety)
    }

    /// Recomputes the analysis of `king` and caches it for the current board version.
    pub fn checks_and_pins(&mut self, king: PieceId) -> Result<&KingSafety> {
        let safety = self.analyze(king)?;
        let version = self.version();
        let snapshot = self.slot_mut(king)?.snapshot.insert(Snapshot { version, safety });
        Ok(&snapshot.safety)
    }

    /// The cached analysis of `king`, or `None` if the board changed since it was computed.
    pub fn king_safety(&self, king: PieceId) -> Option<&KingSafety> {
        let snapshot = self.slot(king).ok()?.snapshot.as_ref()?;
        (snapshot.version == self.version()).then_some(&snapshot.safety)
    }

    /// Fresh analysis of `color`'s king, reusing the cache when it is current.
    /// A side without a king has no constraints.
    pub(crate) fn current_safety(&self, color: Color) -> Result<Option<KingSafety>> {
        let Some(king) = self.king_of(color) else {
            return Ok(None);
        };
        match self.king_safety(king) {
            Some(safety) => Ok(Some(safety.clone())),
            None => self.analyze(king).map(Some),
        }
    }

    /// True if a piece of color `by` attacks `target`.
    ///
    /// Rays: a `by` rook or queen on an orthogonal ray, a `by` bishop or
    /// queen on a diagonal ray, or a `by` king on an adjacent cell. Knights
    /// and pawns are tested from their own offsets.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.attacked_ignoring(target, by, None)
    }

    /// True if `target` is attacked by the opponent of `king`, with the king's
    /// own cell seen as empty.
    pub fn is_square_attacked_for(&self, king: PieceId, target: Square) -> Result<bool> {
        let color = self.piece(king)?.color;
        let from = self.square_of(king)?;
        Ok(self.attacked_ignoring(target, color.opposite(), Some(from)))
    }

    pub(crate) fn attacked_ignoring(&self, target: Square, by: Color, ignore: Option<Square>) -> bool {
        for &direction in &ALL_DIRECTIONS {
            let axis = Axis::of(direction);
            let mut cursor = target.offset(direction);
            let mut distance = 1;

            while self.is_valid_position(cursor) {
                if Some(cursor) != ignore {
                    if let Some((_, p)) = self.occupant(cursor) {
                        let adjacent_king = distance == 1 && p.piece_type == Type::King;
                        if p.color == by && (p.piece_type.slides_along(axis) || adjacent_king) {
                            return true;
                        }
                        break;
                    }
                }
                cursor = cursor.offset(direction);
                distance += 1;
            }
        }

        let knight = Piece::new(by, Type::Knight);
        if KNIGHT_OFFSETS
            .iter()
            .any(|&offset| matches!(self.occupant(target.offset(offset)), Some((_, p)) if p == knight))
        {
            return true;
        }

        // a `by` pawn attacks from one step behind the target, seen from its side
        let pawn = Piece::new(by, Type::Pawn);
        [-1, 1].iter().any(|&side| {
            matches!(self.occupant(target.offset((-by.forward(), side))), Some((_, p)) if p == pawn)
        })
    }
}
