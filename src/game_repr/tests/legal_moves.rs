use super::*;

// ==================== LEGAL MOVE TESTS ====================

#[test]
fn test_starting_position_move_counts() {
    let board = Board::starting_position().unwrap();

    assert_eq!(board.legal_moves_for(Color::White).unwrap().len(), 11);
    assert_eq!(board.legal_moves_for(Color::Black).unwrap().len(), 11);
}

#[test]
fn test_starting_position_pawns_are_pinned_but_advance() {
    let board = Board::starting_position().unwrap();
    let white_king = board.king_of(Color::White).unwrap();
    let white_pawn = board.lookup(sq(3, 3)).unwrap().unwrap();

    let safety = board.analyze(white_king).unwrap();
    assert_eq!(safety.pin_of(white_pawn).map(|pin| pin.attacker), Some(sq(0, 3)));
    assert_eq!(board.moves(white_pawn).unwrap().as_slice(), &[sq(2, 3)]);
}

#[test]
fn test_single_check_must_be_blocked_or_captured() {
    let mut board = empty_board();
    let king = place_piece(&mut board, Color::Black, Type::King, 0, 0);
    place_piece(&mut board, Color::White, Type::Rook, 4, 0);
    let rook = place_piece(&mut board, Color::Black, Type::Rook, 1, 3);
    let knight = place_piece(&mut board, Color::Black, Type::Knight, 2, 1);

    assert_eq!(board.moves(rook).unwrap().as_slice(), &[sq(1, 0)]);
    assert_eq!(board.moves(knight).unwrap().as_slice(), &[sq(4, 0)]);
    assert_eq!(square_set(&board.moves(king).unwrap()), set_of(&[(0, 1), (1, 1)]));
    assert_eq!(board.legal_moves_for(Color::Black).unwrap().len(), 4);
}

#[test]
fn test_knight_check_can_only_be_captured() {
    let mut board = empty_board();
    place_piece(&mut board, Color::White, Type::King, 4, 0);
    let checker = place_piece(&mut board, Color::Black, Type::Knight, 2, 1);
    let rook = place_piece(&mut board, Color::White, Type::Rook, 2, 3);
    let bishop = place_piece(&mut board, Color::White, Type::Bishop, 3, 3);

    assert!(board.is_in_check(Color::White).unwrap());
    assert_eq!(board.moves(rook).unwrap().as_slice(), &[sq(2, 1)]);
    assert!(board.moves(bishop).unwrap().is_empty());
    assert_eq!(board.square_of(checker).unwrap(), sq(2, 1));
}

#[test]
fn test_double_check_leaves_only_king_moves() {
    let mut board = empty_board();
    place_piece(&mut board, Color::White, Type::Rook, 0, 0);
    let king = place_piece(&mut board, Color::Black, Type::King, 4, 0);
    place_piece(&mut board, Color::White, Type::Knight, 3, 2);
    place_piece(&mut board, Color::Black, Type::Rook, 2, 3);

    let moves = board.legal_moves_for(Color::Black).unwrap();
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|mv| mv.piece == king));
}

#[test]
fn test_checkmate_with_two_rooks() {
    let mut board = empty_board();
    place_piece(&mut board, Color::Black, Type::King, 0, 0);
    place_piece(&mut board, Color::White, Type::Rook, 4, 0);
    place_piece(&mut board, Color::White, Type::Rook, 4, 1);

    assert!(board.is_in_check(Color::Black).unwrap());
    assert!(board.is_checkmate(Color::Black).unwrap());
    assert!(!board.is_stalemate(Color::Black).unwrap());
    assert!(!board.is_checkmate(Color::White).unwrap());
}

#[test]
fn test_stalemate_with_queen() {
    let mut board = empty_board();
    place_piece(&mut board, Color::Black, Type::King, 0, 0);
    place_piece(&mut board, Color::White, Type::Queen, 2, 1);

    assert!(!board.is_in_check(Color::Black).unwrap());
    assert!(board.is_stalemate(Color::Black).unwrap());
    assert!(!board.is_checkmate(Color::Black).unwrap());
}

#[test]
fn test_promotion_moves_expand_to_every_choice() {
    let mut board = empty_board();
    let pawn = place_piece(&mut board, Color::White, Type::Pawn, 1, 2);

    let moves = board.legal_moves_for(Color::White).unwrap();
    assert_eq!(moves.len(), 4);
    let choices: Vec<Option<Type>> = moves.iter().map(|mv| mv.promotion).collect();
    assert_eq!(
        choices,
        vec![Some(Type::Queen), Some(Type::Rook), Some(Type::Bishop), Some(Type::Knight)]
    );
    assert!(moves.iter().all(|mv| mv.piece == pawn && mv.to == sq(0, 2)));
}

#[test]
fn test_legal_moves_never_leave_king_attacked() {
    let layouts = [
        "knbr/p3/4/3P/RBNK",
        "1k2/1n2/4/1R2/K3",
        "k3/2q1/4/1PB1/K2r",
        "kr2/p3/2N1/b3/K2R",
    ];
    for layout in layouts {
        let mut board = Board::from_layout(5, 4, layout).unwrap();
        for color in [Color::White, Color::Black] {
            for mv in board.legal_moves_for(color).unwrap() {
                let undo = board.make_move(mv).unwrap();
                assert!(
                    !board.is_in_check(color).unwrap(),
                    "{layout}: {mv} leaves {color:?} in check"
                );
                board.unmake_move(undo).unwrap();
            }
        }
    }
}

// ==================== PERFT TESTS ====================

#[test]
fn test_perft_depth_one_matches_move_count() {
    let mut board = Board::starting_position().unwrap();
    assert_eq!(board.perft(0, Color::White).unwrap(), 1);
    assert_eq!(board.perft(1, Color::White).unwrap(), 11);
}

#[test]
fn test_perft_restores_the_board() {
    let mut board = Board::starting_position().unwrap();
    let before = board_state(&board);

    let nodes = board.perft(3, Color::White).unwrap();

    assert!(nodes > 0);
    assert_eq!(board_state(&board), before);
    assert_eq!(board.to_layout(), STARTING_LAYOUT);
}

#[test]
fn test_perft_is_repeatable() {
    let mut board = Board::starting_position().unwrap();
    let first = board.perft(3, Color::White).unwrap();
    let second = board.perft(3, Color::White).unwrap();
    assert_eq!(first, second);
}
