use super::super::{Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        let push = |moves: &mut MoveList, to: Square, captured: Option<Piece>| {
            if to.rank() == promotion_rank {
                for &promo in &PROMOTION_PIECES {
                    moves.push(Move::new(from, to, captured, Some(promo)));
                }
            } else {
                moves.push(Move::new(from, to, captured, None));
            }
        };

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                push(moves, one, None);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::double_pawn_push(from, two));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(to) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(to) {
                Some((c, piece)) if c != color => push(moves, to, Some(piece)),
                None if self.en_passant_target == Some(to) => {
                    moves.push(Move::en_passant(from, to));
                }
                _ => {}
            }
        }
    }
}
