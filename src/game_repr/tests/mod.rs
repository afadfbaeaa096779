use std::collections::BTreeSet;

use super::*;
pub use crate::error::Error;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty 5x4 board
pub fn empty_board() -> Board {
    Board::new(DEFAULT_ROWS, DEFAULT_COLS)
}

pub fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col)
}

/// Helper function to place a piece
pub fn place_piece(board: &mut Board, color: Color, piece_type: Type, row: i8, col: i8) -> PieceId {
    board
        .put(Piece::new(color, piece_type), sq(row, col))
        .expect("setup square must be free")
}

pub fn square_set(squares: &[Square]) -> BTreeSet<Square> {
    squares.iter().copied().collect()
}

pub fn set_of(cells: &[(i8, i8)]) -> BTreeSet<Square> {
    cells.iter().map(|&(row, col)| sq(row, col)).collect()
}

/// Every cell's occupant plus every registry list, compared by identity
pub fn board_state(board: &Board) -> (Vec<Option<PieceId>>, Vec<Vec<PieceId>>) {
    let mut cells = Vec::new();
    for row in 0..board.rows() as i8 {
        for col in 0..board.cols() as i8 {
            cells.push(board.lookup(sq(row, col)).unwrap());
        }
    }
    let mut registry = Vec::new();
    for color in [Color::White, Color::Black] {
        for piece_type in Type::ALL {
            registry.push(board.pieces_of(Piece::new(color, piece_type)).to_vec());
        }
    }
    (cells, registry)
}

// ==================== TEST MODULES ====================

mod board_primitives;
mod geometry;
mod legal_moves;
