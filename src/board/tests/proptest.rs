//! Property-based tests using proptest.

use crate::board::{Board, Move};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves, stopping early at game end.
fn random_playout(board: &mut Board, rng: &mut StdRng, num_moves: usize) -> Vec<Move> {
    let mut played = Vec::new();
    for _ in 0..num_moves {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        board.apply(mv).expect("generated move is legal");
        played.push(mv);
    }
    played
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: apply followed by undo restores board state exactly
    #[test]
    fn prop_apply_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = board.clone();

        let played = random_playout(&mut board, &mut rng, num_moves);

        for &mv in played.iter().rev() {
            prop_assert_eq!(board.undo(), Ok(mv));
        }
        prop_assert_eq!(board, initial);
    }

    /// Property: the incremental hash always equals a full recompute
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            board.make_move(moves.as_slice()[rng.gen_range(0..moves.len())]);
            prop_assert_eq!(board.hash(), board.calculate_hash());
        }
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let fen = board.to_fen();
        let restored = Board::from_fen(&fen);

        prop_assert_eq!(board.hash(), restored.hash());
        prop_assert_eq!(restored.to_fen(), fen);
        prop_assert_eq!(board.white_to_move(), restored.white_to_move());
        prop_assert_eq!(board.castling_rights, restored.castling_rights);
        prop_assert_eq!(board.en_passant_target(), restored.en_passant_target());
    }

    /// Property: no generated move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in 0..20usize) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let mover = board.side_to_move();
        for &mv in board.generate_moves().iter() {
            board.make_move(mv);
            prop_assert!(!board.is_king_attacked(mover),
                "Legal move left king in check: {:?}", mv);
            board.unmake_move();
        }
    }

    /// Property: apply accepts exactly the generated moves
    #[test]
    fn prop_apply_rejects_foreign_moves(seed in seed_strategy(), num_moves in 1..20usize) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        // Moves from a position one ply earlier belong to the other side
        let mut previous = board.clone();
        if previous.undo().is_ok() {
            let legal = board.generate_moves();
            for &mv in previous.generate_moves().iter() {
                if !legal.contains(mv) {
                    let before = board.clone();
                    prop_assert!(board.apply(mv).is_err());
                    prop_assert_eq!(&board, &before);
                }
            }
        }
    }

    /// Property: evaluation is negated when only the side to move changes
    #[test]
    fn prop_eval_side_to_move_antisymmetry(seed in seed_strategy(), num_moves in 0..12usize) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let fen = board.to_fen();
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let flipped_side = if fields[1] == "w" { "b" } else { "w" };
        let mut here = Board::from_fen(&format!("{} {} {} - 0 1", fields[0], fields[1], fields[2]));
        let mut flipped = Board::from_fen(&format!("{} {} {} - 0 1", fields[0], flipped_side, fields[2]));

        let both_can_move = here.legal_move_count() > 0 && flipped.legal_move_count() > 0;
        let neither_in_check = !here.is_in_check() && !flipped.is_in_check();
        if both_can_move && neither_in_check {
            prop_assert_eq!(here.evaluate(), -flipped.evaluate());
        }
    }
}
