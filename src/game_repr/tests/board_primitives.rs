use super::*;

// ==================== BOARD PRIMITIVE TESTS ====================

#[test]
fn test_place_sets_cell_and_position() {
    let mut board = empty_board();
    let id = board.spawn(Piece::new(Color::White, Type::Rook));

    board.place(sq(2, 1), id).unwrap();

    assert_eq!(board.lookup(sq(2, 1)).unwrap(), Some(id));
    assert_eq!(board.position(id).unwrap(), Some(sq(2, 1)));
    assert!(!board.is_registered(id).unwrap(), "place must not touch the registry");
}

#[test]
fn test_remove_clears_cell_and_position() {
    let mut board = empty_board();
    let id = place_piece(&mut board, Color::Black, Type::Knight, 3, 2);

    assert_eq!(board.remove(sq(3, 2)).unwrap(), id);

    assert!(board.is_empty(sq(3, 2)).unwrap());
    assert_eq!(board.position(id).unwrap(), None);
    assert!(board.is_registered(id).unwrap(), "remove must not touch the registry");
}

#[test]
fn test_out_of_bounds_access_fails() {
    let mut board = empty_board();

    assert!(matches!(board.lookup(sq(5, 0)), Err(Error::OutOfBounds { .. })));
    assert!(matches!(board.is_empty(sq(0, 4)), Err(Error::OutOfBounds { .. })));
    assert!(matches!(board.remove(sq(-1, 0)), Err(Error::OutOfBounds { .. })));
    assert!(!board.is_valid_position(sq(4, 4)));
    assert!(board.is_valid_position(sq(4, 3)));
}

#[test]
fn test_board_size_is_a_parameter() {
    let board = Board::new(8, 8);
    assert!(board.is_valid_position(sq(7, 7)));
    assert!(!board.is_valid_position(sq(8, 0)));
    assert_eq!((board.rows(), board.cols()), (8, 8));
}

#[test]
fn test_remove_empty_cell_fails() {
    let mut board = empty_board();
    assert!(matches!(board.remove(sq(1, 1)), Err(Error::EmptyCell(s)) if s == sq(1, 1)));
}

#[test]
fn test_place_on_occupied_cell_fails() {
    let mut board = empty_board();
    place_piece(&mut board, Color::White, Type::Pawn, 3, 0);
    let other = board.spawn(Piece::new(Color::Black, Type::Pawn));

    assert!(matches!(board.place(sq(3, 0), other), Err(Error::CellOccupied(_))));
    assert!(matches!(
        board.put(Piece::new(Color::Black, Type::Rook), sq(3, 0)),
        Err(Error::CellOccupied(_))
    ));
}

#[test]
fn test_place_twice_without_remove_fails() {
    let mut board = empty_board();
    let id = place_piece(&mut board, Color::White, Type::Queen, 2, 2);
    assert!(matches!(board.place(sq(0, 0), id), Err(Error::AlreadyPlaced(_))));
}

#[test]
fn test_duplicate_registration_fails() {
    let mut board = empty_board();
    let id = place_piece(&mut board, Color::White, Type::Bishop, 4, 1);

    assert!(matches!(
        board.add_to_registry(id),
        Err(Error::DuplicateRegistration(dup)) if dup == id
    ));

    board.forget(id).unwrap();
    board.add_to_registry(id).unwrap();
    assert_eq!(board.pieces_of(Piece::new(Color::White, Type::Bishop)), &[id]);
}

#[test]
fn test_forget_unregistered_fails() {
    let mut board = empty_board();
    let id = board.spawn(Piece::new(Color::Black, Type::King));
    assert!(matches!(board.forget(id), Err(Error::NotRegistered(_))));
}

#[test]
fn test_forget_returns_index_and_insert_restores_order() {
    let mut board = empty_board();
    let a = place_piece(&mut board, Color::White, Type::Pawn, 3, 0);
    let b = place_piece(&mut board, Color::White, Type::Pawn, 3, 1);
    let c = place_piece(&mut board, Color::White, Type::Pawn, 3, 2);
    let key = Piece::new(Color::White, Type::Pawn);

    let index = board.forget(b).unwrap();
    assert_eq!(index, 1);
    assert_eq!(board.pieces_of(key), &[a, c]);

    board.insert_into_registry(b, index).unwrap();
    assert_eq!(board.pieces_of(key), &[a, b, c]);
}

#[test]
fn test_pieces_of_color_lists_kings_first() {
    let mut board = empty_board();
    let pawn = place_piece(&mut board, Color::Black, Type::Pawn, 1, 0);
    let knight = place_piece(&mut board, Color::Black, Type::Knight, 0, 1);
    let king = place_piece(&mut board, Color::Black, Type::King, 0, 0);
    place_piece(&mut board, Color::White, Type::King, 4, 3);

    let order: Vec<PieceId> = board.pieces_of_color(Color::Black).collect();
    assert_eq!(order, vec![king, knight, pawn]);
    assert_eq!(board.king_of(Color::Black), Some(king));
}

#[test]
fn test_despawn_only_releases_last_free_piece() {
    let mut board = empty_board();
    let first = board.spawn(Piece::new(Color::White, Type::Queen));
    let second = board.spawn(Piece::new(Color::White, Type::Rook));

    assert!(matches!(board.despawn(first), Err(Error::UndoOrder(_))));

    board.place(sq(0, 0), second).unwrap();
    assert!(matches!(board.despawn(second), Err(Error::UndoOrder(_))));

    board.remove(sq(0, 0)).unwrap();
    board.despawn(second).unwrap();
    assert!(matches!(board.piece(second), Err(Error::UnknownPiece(_))));
    board.despawn(first).unwrap();
}

#[test]
fn test_every_mutation_bumps_version() {
    let mut board = empty_board();
    let id = board.spawn(Piece::new(Color::White, Type::Knight));
    let mut last = board.version();

    board.place(sq(2, 2), id).unwrap();
    assert!(board.version() > last);
    last = board.version();

    board.add_to_registry(id).unwrap();
    assert!(board.version() > last);
    last = board.version();

    board.forget(id).unwrap();
    assert!(board.version() > last);
    last = board.version();

    board.remove(sq(2, 2)).unwrap();
    assert!(board.version() > last);
}

#[test]
fn test_occupied_scans_row_by_row() {
    let board = Board::starting_position().unwrap();
    let cells: Vec<Square> = board.occupied().map(|(_, _, square)| square).collect();

    assert_eq!(cells.len(), 10);
    assert_eq!(cells.first(), Some(&sq(0, 0)));
    assert_eq!(cells.last(), Some(&sq(4, 3)));
    for (id, piece, square) in board.occupied() {
        assert_eq!(board.position(id).unwrap(), Some(square));
        assert!(board.pieces_of(piece).contains(&id));
    }
}
