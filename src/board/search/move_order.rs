//! Move ordering for search.
//!
//! Ordering only changes which branches get pruned, never the score of a
//! completed search. The sort is stable, so equal priorities keep
//! generation order and the result is deterministic.

use super::super::eval::material_value;
use super::super::{Board, Move, MoveList, ScoredMoveList};

/// MVV-LVA score for a capture move, 0 for quiet moves
#[must_use]
pub fn mvv_lva_score(board: &Board, mv: Move) -> i32 {
    let Some(victim) = mv.captured() else {
        return 0;
    };
    let Some((_, attacker)) = board.piece_at(mv.from()) else {
        return 0;
    };
    material_value(victim) * 10 - material_value(attacker)
}

/// Full ordering priority: MVV-LVA, promotion value, and a bonus for
/// giving check (found by trying the move).
pub(crate) fn move_priority(board: &mut Board, mv: Move, check_bonus: i32) -> i32 {
    let mut score = mvv_lva_score(board, mv);
    if let Some(promo) = mv.promotion() {
        score += material_value(promo);
    }
    board.make_move(mv);
    if board.is_in_check() {
        score += check_bonus;
    }
    board.unmake_move();
    score
}

/// Score and sort moves, highest priority first.
pub(crate) fn order_moves(board: &mut Board, moves: &MoveList, check_bonus: i32) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for &mv in moves.iter() {
        let priority = move_priority(board, mv, check_bonus);
        scored.push(mv, priority);
    }
    scored.sort_by_score_desc();
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    #[test]
    fn pawn_takes_queen_ranks_first() {
        // Pawn d4 can take the queen on c5; queen a1 can take the pawn on a7
        let mut board = Board::from_fen("4k3/p7/8/2q5/3P4/8/8/Q3K3 w - - 0 1");
        let moves = board.generate_moves();
        let ordered = order_moves(&mut board, &moves, 50);
        let first = ordered.as_slice()[0].mv;
        assert_eq!(first.to_string(), "d4c5");
        assert_eq!(ordered.as_slice()[0].score, 900 * 10 - 100);
    }

    #[test]
    fn ordering_keeps_all_moves_and_board() {
        let mut board = Board::new();
        let before = board.clone();
        let moves = board.generate_moves();
        let ordered = order_moves(&mut board, &moves, 50);
        assert_eq!(ordered.len(), moves.len());
        assert_eq!(board, before);
        // Nothing scores in the opening position, so generation order survives
        for (scored, &mv) in ordered.iter().zip(moves.iter()) {
            assert_eq!(scored.mv, mv);
        }
    }

    #[test]
    fn checking_move_gets_bonus() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        let check = board.parse_move("a1a8").unwrap();
        let quiet = board.parse_move("a1a2").unwrap();
        assert_eq!(move_priority(&mut board, check, 50), 50);
        assert_eq!(move_priority(&mut board, quiet, 50), 0);
    }

    #[test]
    fn promotion_adds_piece_value() {
        let mut board = Board::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1");
        let moves = board.generate_moves();
        let ordered = order_moves(&mut board, &moves, 50);
        let top = ordered.as_slice()[0];
        assert_eq!(top.mv.promotion(), Some(Piece::Queen));
        assert_eq!(top.score, 900);
    }

    #[test]
    fn king_capture_ranks_by_victim_alone() {
        // Only the king can take the rook on e2
        let mut board = Board::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");
        let take = board.parse_move("e1e2").unwrap();
        assert_eq!(mvv_lva_score(&board, take), 500 * 10);
        assert_eq!(material_value(Piece::King), 0);
    }
}
