//! Draw detection tests.

use crate::board::{Board, GameStatus};

fn apply_notation(board: &mut Board, notation: &str) {
    board.apply_notation(notation).expect("move not legal");
}

#[test]
fn test_fen_halfmove_parsing() {
    let board = Board::from_fen("8/8/8/8/8/8/8/K1k5 w - - 57 1");
    assert_eq!(board.halfmove_clock(), 57);
}

#[test]
fn test_fifty_move_rule_draw() {
    let mut board = Board::from_fen("8/8/8/8/8/8/R7/K1k5 w - - 100 60");
    assert!(board.is_draw_by_fifty_move_rule());
    assert_eq!(board.game_status(), GameStatus::FiftyMove);
}

#[test]
fn test_halfmove_resets_on_pawn_move() {
    let mut board = Board::from_fen("8/8/8/8/8/8/4P3/K1k5 w - - 99 1");
    apply_notation(&mut board, "e2e4");
    assert_eq!(board.halfmove_clock(), 0);
    assert!(!board.is_draw_by_fifty_move_rule());
}

#[test]
fn test_halfmove_reaches_hundred() {
    let mut board = Board::from_fen("8/8/8/8/8/8/R7/K1k5 w - - 99 1");
    apply_notation(&mut board, "a2a3");
    assert_eq!(board.halfmove_clock(), 100);
    assert!(board.is_draw_by_fifty_move_rule());
    board.undo().unwrap();
    assert!(!board.is_draw_by_fifty_move_rule());
}

#[test]
fn test_threefold_repetition() {
    let mut board = Board::new();
    apply_notation(&mut board, "g1f3");
    apply_notation(&mut board, "g8f6");
    apply_notation(&mut board, "f3g1");
    apply_notation(&mut board, "f6g8");
    assert!(board.is_draw_by_repetition(2));
    assert!(!board.is_draw_by_repetition(3));

    apply_notation(&mut board, "g1f3");
    apply_notation(&mut board, "g8f6");
    apply_notation(&mut board, "f3g1");
    apply_notation(&mut board, "f6g8");
    assert!(board.is_draw_by_repetition(3));
    assert_eq!(board.game_status(), GameStatus::Repetition);
}

#[test]
fn test_repetition_stops_at_irreversible_move() {
    let mut board = Board::new();
    apply_notation(&mut board, "g1f3");
    apply_notation(&mut board, "g8f6");
    apply_notation(&mut board, "f3g1");
    apply_notation(&mut board, "f6g8");
    // A pawn move resets the window; the earlier start positions can never recur
    apply_notation(&mut board, "e2e4");
    assert!(!board.is_draw_by_repetition(2));
}

#[test]
fn test_side_to_move_matters_for_repetition() {
    let mut board = Board::new();
    apply_notation(&mut board, "g1f3");
    apply_notation(&mut board, "g8f6");
    apply_notation(&mut board, "f3g1");
    // The black knight is still on f6, so no earlier position matches
    assert!(!board.is_draw_by_repetition(2));
}

#[test]
fn test_insufficient_material_draw() {
    let mut board = Board::from_fen("8/8/8/8/8/8/6N1/K1k5 w - - 0 1");
    assert!(board.is_insufficient_material());
    assert_eq!(board.game_status(), GameStatus::InsufficientMaterial);

    assert!(Board::from_fen("8/8/8/8/8/8/8/K1k5 w - - 0 1").is_insufficient_material());
}

#[test]
fn test_same_colored_bishops_are_insufficient() {
    let board = Board::from_fen("5b2/8/8/8/8/8/8/K1B1k3 w - - 0 1");
    assert!(board.is_insufficient_material());

    let opposite = Board::from_fen("2b5/8/8/8/8/8/8/K1B1k3 w - - 0 1");
    assert!(!opposite.is_insufficient_material());
}

#[test]
fn test_sufficient_material() {
    assert!(!Board::new().is_insufficient_material());
    assert!(!Board::from_fen("8/8/8/8/8/8/4P3/K1k5 w - - 0 1").is_insufficient_material());
    assert!(!Board::from_fen("8/8/8/8/8/8/5NN1/K1k5 w - - 0 1").is_insufficient_material());
}

#[test]
fn test_stalemate_status() {
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(board.is_stalemate());
    assert!(!board.is_checkmate());
    assert_eq!(board.game_status(), GameStatus::Stalemate);
    assert!(board.game_status().is_draw());
}

#[test]
fn test_checkmate_status() {
    let mut board =
        Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert!(board.is_in_check());
    assert!(board.is_checkmate());
    assert_eq!(board.game_status(), GameStatus::Checkmate);
    assert!(!board.game_status().is_draw());
}

#[test]
fn test_mate_beats_fifty_move_rule() {
    // Back-rank mate delivered on the hundredth halfmove
    let mut board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 100 80");
    assert!(board.is_draw_by_fifty_move_rule());
    assert_eq!(board.game_status(), GameStatus::Checkmate);
}
