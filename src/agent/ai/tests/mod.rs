use crate::game_repr::{Board, Color, Piece, Square, Type};

pub fn layout(layout: &str) -> Board {
    Board::from_layout(5, 4, layout).expect("test layout must parse")
}

pub fn piece_at(board: &Board, row: i8, col: i8) -> Piece {
    let id = board.lookup(Square::new(row, col)).unwrap().unwrap();
    board.piece(id).unwrap()
}

pub fn is_white_queen(piece: Piece) -> bool {
    piece == Piece::new(Color::White, Type::Queen)
}
