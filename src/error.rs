//! Error type shared by the board, the search and the players.
//!
//! Every variant except `Io` describes a programmer error or a corrupted
//! board invariant. None of them are recovered from inside the crate; they
//! are propagated to the caller with `?`. Empty move lists, stalemate and
//! checkmate scores are ordinary data and never show up here.

use crate::game_repr::{Move, PieceId, Square, Type};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Coordinate outside the configured grid
    #[error("square {square} is outside the {rows}x{cols} board")]
    OutOfBounds { square: Square, rows: u8, cols: u8 },

    /// Removal requested on an empty cell
    #[error("no piece to remove at {0}")]
    EmptyCell(Square),

    /// Placement requested on an occupied cell, or a move onto a friendly piece
    #[error("square {0} is already occupied")]
    CellOccupied(Square),

    /// Piece placed while it already stands on another cell
    #[error("piece {0} is already on the board")]
    AlreadyPlaced(PieceId),

    /// Piece registered twice without an intervening `forget`
    #[error("piece {0} is already registered")]
    DuplicateRegistration(PieceId),

    #[error("piece {0} is not registered")]
    NotRegistered(PieceId),

    #[error("piece {0} is not on the board")]
    NotOnBoard(PieceId),

    #[error("unknown piece {0}")]
    UnknownPiece(PieceId),

    #[error("piece {0} is not a king")]
    NotAKing(PieceId),

    /// More simultaneous checks than any reachable position can hold
    #[error("illegal position: {checks} simultaneous checks")]
    IllegalPosition { checks: usize },

    /// Line helpers called on points that share no row, column or diagonal
    #[error("squares {from} and {to} are not aligned")]
    Misaligned { from: Square, to: Square },

    #[error("piece {piece} cannot promote to {choice:?}")]
    InvalidPromotion { piece: PieceId, choice: Type },

    /// Undo records replayed out of LIFO order
    #[error("undo out of order: {0} is not the most recently spawned piece")]
    UndoOrder(PieceId),

    #[error("move {0} is not legal in the current position")]
    IllegalMove(Move),

    /// Search reached a non-terminal node with nothing to expand
    #[error("no legal moves at depth {depth} in a non-terminal position")]
    NoMovesAvailable { depth: u8 },

    #[error("board extents {rows}x{cols} must each be within 1..=64")]
    BoardSize { rows: u8, cols: u8 },

    #[error("invalid layout character {0:?}")]
    LayoutChar(char),

    #[error("layout has {found} rows, expected {expected}")]
    LayoutRows { expected: usize, found: usize },

    #[error("layout row {row} spans {found} columns, expected {expected}")]
    LayoutWidth { row: usize, expected: usize, found: usize },

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
