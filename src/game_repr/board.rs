use super::analysis::KingSafety;
use super::*;
use crate::error::{Error, Result};

/*
 * MODULE IS RESPONSIBLE FOR
 * CELLS, PIECE OBJECTS AND THE REGISTRY
 */

/// Board analysis cached on a king, valid only while `version` matches.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    pub(crate) version: u64,
    pub(crate) safety: KingSafety,
}

#[derive(Debug, Clone)]
pub(crate) struct PieceSlot {
    pub(crate) piece: Piece,
    /// Only Board writes this, through `place` and `remove`
    pub(crate) position: Option<Square>,
    pub(crate) registered: bool,
    pub(crate) snapshot: Option<Snapshot>,
}

/// Grid of cells plus a registry of live pieces keyed by (color, kind).
///
/// The grid and the registry are edited by separate primitives so make/unmake
/// can order the edits of a capture however it needs. Invariants kept by
/// those primitives:
/// - a cell holds a piece exactly when that piece's position is the cell
/// - a piece is registered at most once
///
/// Piece objects live in an arena and are addressed by [`PieceId`]. A
/// captured piece keeps its slot, so undo restores the same object.
#[derive(Debug, Clone)]
pub struct Board {
    rows: u8,
    cols: u8,
    grid: Vec<Option<PieceId>>,
    registry: [Vec<PieceId>; Piece::COUNT],
    pieces: Vec<PieceSlot>,
    version: u64,
}

impl Board {
    /// Empty board with the given extents.
    ///
    /// # Panics
    ///
    /// If either extent is zero or larger than 64.
    pub fn new(rows: u8, cols: u8) -> Self {
        assert!(
            (1..=64).contains(&rows) && (1..=64).contains(&cols),
            "board extents must be within 1..=64, got {rows}x{cols}"
        );
        Self {
            rows,
            cols,
            grid: vec![None; rows as usize * cols as usize],
            registry: Default::default(),
            pieces: Vec::new(),
            version: 0,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Mutation counter, bumped by every grid or registry edit
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_valid_position(&self, square: Square) -> bool {
        (0..self.rows as i8).contains(&square.row) && (0..self.cols as i8).contains(&square.col)
    }

    fn index(&self, square: Square) -> Result<usize> {
        if !self.is_valid_position(square) {
            return Err(Error::OutOfBounds {
                square,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(square.row as usize * self.cols as usize + square.col as usize)
    }

    pub fn is_empty(&self, square: Square) -> Result<bool> {
        Ok(self.grid[self.index(square)?].is_none())
    }

    pub fn lookup(&self, square: Square) -> Result<Option<PieceId>> {
        Ok(self.grid[self.index(square)?])
    }

    /// Occupant of a square already known to be on the board
    pub(crate) fn cell(&self, square: Square) -> Option<PieceId> {
        debug_assert!(self.is_valid_position(square));
        self.grid[square.row as usize * self.cols as usize + square.col as usize]
    }

    /// Occupant of a square, `None` for empty or off-board squares
    pub(crate) fn occupant(&self, square: Square) -> Option<(PieceId, Piece)> {
        if !self.is_valid_position(square) {
            return None;
        }
        self.cell(square).map(|id| (id, self.pieces[id.index()].piece))
    }

    /// Grid-only: puts `id` on `square` and sets its position.
    pub fn place(&mut self, square: Square, id: PieceId) -> Result<()> {
        let idx = self.index(square)?;
        if self.grid[idx].is_some() {
            return Err(Error::CellOccupied(square));
        }
        let slot = self.slot_mut(id)?;
        if slot.position.is_some() {
            return Err(Error::AlreadyPlaced(id));
        }
        slot.position = Some(square);
        self.grid[idx] = Some(id);
        self.version += 1;
        Ok(())
    }

    /// Grid-only: clears `square` and the position of the piece that stood there.
    pub fn remove(&mut self, square: Square) -> Result<PieceId> {
        let idx = self.index(square)?;
        let id = self.grid[idx].take().ok_or(Error::EmptyCell(square))?;
        self.pieces[id.index()].position = None;
        self.version += 1;
        Ok(id)
    }

    /// Registry-only: appends `id` to the collection of its key.
    pub fn add_to_registry(&mut self, id: PieceId) -> Result<()> {
        let len = self.pieces_of(self.piece(id)?).len();
        self.insert_into_registry(id, len)
    }

    /// Registry-only: inserts `id` at `index` of its collection (clamped to the end).
    pub fn insert_into_registry(&mut self, id: PieceId, index: usize) -> Result<()> {
        let slot = self.slot_mut(id)?;
        if slot.registered {
            return Err(Error::DuplicateRegistration(id));
        }
        slot.registered = true;
        let key = slot.piece.index();
        let list = &mut self.registry[key];
        list.insert(index.min(list.len()), id);
        self.version += 1;
        Ok(())
    }

    /// Registry-only: drops `id` and returns the index it held.
    pub fn forget(&mut self, id: PieceId) -> Result<usize> {
        let slot = self.slot_mut(id)?;
        if !slot.registered {
            return Err(Error::NotRegistered(id));
        }
        slot.registered = false;
        let key = slot.piece.index();
        let list = &mut self.registry[key];
        let index = list
            .iter()
            .position(|&other| other == id)
            .ok_or(Error::NotRegistered(id))?;
        list.remove(index);
        self.version += 1;
        Ok(index)
    }

    /// Allocates a new off-board, unregistered piece object.
    pub fn spawn(&mut self, piece: Piece) -> PieceId {
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(PieceSlot {
            piece,
            position: None,
            registered: false,
            snapshot: None,
        });
        id
    }

    /// Releases the most recently spawned piece. It must be off the board and unregistered.
    pub fn despawn(&mut self, id: PieceId) -> Result<()> {
        let slot = self.slot(id)?;
        if slot.position.is_some() || slot.registered || id.index() + 1 != self.pieces.len() {
            return Err(Error::UndoOrder(id));
        }
        self.pieces.pop();
        Ok(())
    }

    /// Setup helper: creates `piece`, places it on `square` and registers it.
    pub fn put(&mut self, piece: Piece, square: Square) -> Result<PieceId> {
        if !self.is_empty(square)? {
            return Err(Error::CellOccupied(square));
        }
        let id = self.spawn(piece);
        self.place(square, id)?;
        self.add_to_registry(id)?;
        Ok(id)
    }

    pub(crate) fn slot(&self, id: PieceId) -> Result<&PieceSlot> {
        self.pieces.get(id.index()).ok_or(Error::UnknownPiece(id))
    }

    pub(crate) fn slot_mut(&mut self, id: PieceId) -> Result<&mut PieceSlot> {
        self.pieces.get_mut(id.index()).ok_or(Error::UnknownPiece(id))
    }

    pub fn piece(&self, id: PieceId) -> Result<Piece> {
        Ok(self.slot(id)?.piece)
    }

    /// Current cell of `id`, `None` once captured
    pub fn position(&self, id: PieceId) -> Result<Option<Square>> {
        Ok(self.slot(id)?.position)
    }

    /// Current cell of `id`, failing if it is off the board
    pub fn square_of(&self, id: PieceId) -> Result<Square> {
        self.position(id)?.ok_or(Error::NotOnBoard(id))
    }

    pub fn is_registered(&self, id: PieceId) -> Result<bool> {
        Ok(self.slot(id)?.registered)
    }

    /// Registered pieces of one (color, kind), in registry order
    pub fn pieces_of(&self, piece: Piece) -> &[PieceId] {
        &self.registry[piece.index()]
    }

    /// Registered pieces of `color`: kings first, pawns last
    pub fn pieces_of_color(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        Type::ALL
            .iter()
            .flat_map(move |&t| self.pieces_of(Piece::new(color, t)).iter().copied())
    }

    pub fn king_of(&self, color: Color) -> Option<PieceId> {
        self.pieces_of(Piece::new(color, Type::King)).first().copied()
    }

    /// Every piece currently on the board, scanned row by row
    pub fn occupied(&self) -> impl Iterator<Item = (PieceId, Piece, Square)> + '_ {
        (0..self.rows as i8)
            .flat_map(move |row| (0..self.cols as i8).map(move |col| Square::new(row, col)))
            .filter_map(move |square| {
                self.cell(square)
                    .map(|id| (id, self.pieces[id.index()].piece, square))
            })
    }
}
