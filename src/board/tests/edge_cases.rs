//! Edge case tests for special chess positions and moves.

use crate::board::{Board, Color, FenError, MoveParseError, Piece, Square, SquareError};

fn moves_from(board: &mut Board, from: Square) -> usize {
    board
        .generate_moves()
        .iter()
        .filter(|m| m.from() == from)
        .count()
}

#[test]
fn test_stalemate_position() {
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!board.is_checkmate());
    assert!(board.is_stalemate());
    assert!(board.generate_moves().is_empty());
}

#[test]
fn test_all_four_promotions_queen_first() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let promotions: Vec<Piece> = board
        .generate_moves()
        .iter()
        .filter_map(|m| m.promotion())
        .collect();
    assert_eq!(
        promotions,
        vec![Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight]
    );
}

#[test]
fn test_capture_promotions() {
    let mut board = Board::from_fen("1n6/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = board.generate_moves();
    let promotions = moves.iter().filter(|m| m.is_promotion()).count();
    let capture_promotions = moves
        .iter()
        .filter(|m| m.is_promotion() && m.captured() == Some(Piece::Knight))
        .count();
    assert_eq!(promotions, 8);
    assert_eq!(capture_promotions, 4);
}

#[test]
fn test_underpromotion_to_knight() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    board.apply_notation("a7a8n").unwrap();
    assert_eq!(
        board.piece_at(Square(7, 0)),
        Some((Color::White, Piece::Knight))
    );
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    let before = board.clone();
    let mv = board
        .generate_moves()
        .iter()
        .copied()
        .find(|m| m.is_en_passant())
        .expect("en passant should be available");

    board.apply(mv).unwrap();
    assert!(board.piece_at(Square(4, 3)).is_none(), "captured pawn removed");
    assert_eq!(board.piece_at(Square(5, 3)).map(|(_, p)| p), Some(Piece::Pawn));

    board.undo().unwrap();
    assert_eq!(board, before);
}

#[test]
fn test_en_passant_rejected_when_it_exposes_king() {
    // Both pawns leave the fifth rank, opening the h5 rook onto a5
    let mut board = Board::from_fen("8/8/8/KPp4r/8/8/8/7k w - c6 0 1");
    let moves = board.generate_moves();
    assert!(!moves.iter().any(|m| m.is_en_passant()));
    assert!(moves.iter().any(|m| m.to() == Square(5, 1)));
}

#[test]
fn test_castling_blocked_by_check() {
    let mut board = Board::from_fen("r3k2r/8/8/8/4Q3/8/8/R3K2R b KQkq - 0 1");
    let moves = board.generate_moves();
    assert!(
        !moves.iter().any(|m| m.is_castling()),
        "Castling should not be available when in check"
    );
}

#[test]
fn test_castling_through_attacked_square() {
    // The f2 rook covers f1, so only the queenside remains
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1");
    let castles: Vec<Square> = board
        .generate_moves()
        .iter()
        .filter(|m| m.is_castling())
        .map(|m| m.to())
        .collect();
    assert_eq!(castles, vec![Square(0, 2)]);
}

#[test]
fn test_castling_blocked_by_pieces() {
    let mut board = Board::new();
    assert!(!board.generate_moves().iter().any(|m| m.is_castling()));
}

#[test]
fn test_castling_needs_rook_on_corner() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1");
    assert!(!board.generate_moves().iter().any(|m| m.is_castling()));
}

#[test]
fn test_double_check_only_king_can_move() {
    // Rook on the d-file plus a knight on c3; the h3 rook could take the
    // knight but that leaves the file check
    let mut board = Board::from_fen("3rk3/8/8/8/8/2n4R/8/3K4 w - - 0 1");
    let moves = board.generate_moves();
    assert!(!moves.is_empty());
    for mv in moves.iter() {
        assert_eq!(
            mv.from(),
            Square(0, 3),
            "Only king should be able to move in double check"
        );
    }
}

#[test]
fn test_knight_and_king_do_not_wrap_edges() {
    let mut board = Board::from_fen("k7/8/8/8/7N/8/8/N6K w - - 0 1");
    assert_eq!(moves_from(&mut board, Square(3, 7)), 4);
    assert_eq!(moves_from(&mut board, Square(0, 0)), 2);
    assert_eq!(moves_from(&mut board, Square(0, 7)), 3);
}

#[test]
fn test_checkmate_back_rank() {
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    board.apply_notation("a1a8").unwrap();
    assert!(board.is_checkmate());
}

#[test]
fn test_fen_parsing_errors() {
    assert!(matches!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
        Err(FenError::TooFewParts { found: 1 })
    ));
    assert!(matches!(
        Board::try_from_fen("rnbxkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        Err(FenError::InvalidPiece { char: 'x' })
    ));
    assert!(matches!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
        Err(FenError::InvalidSideToMove { .. })
    ));
    assert!(matches!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XYZ - 0 1"),
        Err(FenError::InvalidCastling { char: 'X' })
    ));
    assert!(matches!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1"),
        Err(FenError::InvalidEnPassant { .. })
    ));
    assert!(matches!(
        Board::try_from_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        Err(FenError::TooManyFiles { rank: 1, .. })
    ));
}

#[test]
fn test_move_parse_errors() {
    let mut board = Board::new();
    assert_eq!(
        board.parse_move("e2"),
        Err(MoveParseError::InvalidLength { len: 2 })
    );
    assert!(matches!(
        board.parse_move("z2e4"),
        Err(MoveParseError::InvalidSquare { .. })
    ));
    assert!(matches!(
        board.parse_move("e2e5"),
        Err(MoveParseError::IllegalMove { .. })
    ));
    assert_eq!(
        board.parse_move("e2e4k"),
        Err(MoveParseError::InvalidPromotion { char: 'k' })
    );
}

#[test]
fn test_square_parsing() {
    assert_eq!("a1".parse::<Square>(), Ok(Square(0, 0)));
    assert_eq!("h8".parse::<Square>(), Ok(Square(7, 7)));
    assert_eq!("e4".parse::<Square>(), Ok(Square(3, 4)));
    assert!(matches!(
        "i1".parse::<Square>(),
        Err(SquareError::InvalidNotation { .. })
    ));
    assert!("a9".parse::<Square>().is_err());
    assert!("".parse::<Square>().is_err());
    assert_eq!(Square(3, 4).to_string(), "e4");
}

#[test]
fn test_square_try_from() {
    assert_eq!(Square::try_from((7, 7)), Ok(Square(7, 7)));
    assert_eq!(
        Square::try_from((8, 0)),
        Err(SquareError::RankOutOfBounds { rank: 8 })
    );
    assert_eq!(
        Square::try_from((0, 9)),
        Err(SquareError::FileOutOfBounds { file: 9 })
    );
}

#[test]
fn test_move_convenience_methods() {
    let mut board = Board::from_fen("r3k2r/1P6/8/3pP3/8/8/8/R3K2R w KQkq d6 0 1");
    let ep = board.parse_move("e5d6").unwrap();
    assert!(ep.is_en_passant() && ep.is_capture());
    assert_eq!(ep.captured(), Some(Piece::Pawn));

    let promo = board.parse_move("b7a8q").unwrap();
    assert!(promo.is_promotion() && promo.is_capture());
    assert_eq!(promo.captured(), Some(Piece::Rook));
    assert_eq!(promo.to_string(), "b7a8q");

    let castle = board.parse_move("e1g1").unwrap();
    assert!(castle.is_castling() && !castle.is_capture());

    let mut start = Board::new();
    let push = start.parse_move("e2e4").unwrap();
    assert!(push.is_double_pawn_push() && !push.is_capture());
}

#[test]
fn test_movelist_index() {
    let mut board = Board::new();
    let moves = board.generate_moves();
    assert_eq!(moves.len(), 20);
    assert_eq!(moves[0], moves.as_slice()[0]);
    assert_eq!(moves.get(20), None);
}

#[test]
fn test_board_from_str() {
    let board: Board = "8/8/8/8/8/8/8/K1k5 w - - 0 1".parse().unwrap();
    assert_eq!(board.piece_at(Square(0, 0)).map(|(_, p)| p), Some(Piece::King));
    assert!("not a fen".parse::<Board>().is_err());
}
