use super::super::{castle_bit, Board, Color, Move, MoveList, Piece, Square};

/// King steps as linear a1=0 index offsets.
pub(crate) const KING_OFFSETS: [isize; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Resolve a king step, rejecting targets that wrapped around an edge.
#[inline]
pub(crate) fn king_target(from: Square, offset: isize) -> Option<Square> {
    let idx = from.index() as isize + offset;
    if !(0..64).contains(&idx) {
        return None;
    }
    let to = Square::from_index(idx as usize);
    let dr = from.rank().abs_diff(to.rank());
    let df = from.file().abs_diff(to.file());
    (dr <= 1 && df <= 1).then_some(to)
}

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &offset in &KING_OFFSETS {
            if let Some(to) = king_target(from, offset) {
                self.push_step(from, to, color, moves);
            }
        }
        self.generate_castling_moves(from, color, moves);
    }

    /// Castling needs the right, an empty path, a rook in its corner, and a
    /// king that neither starts in, passes through, nor lands on an
    /// attacked square.
    fn generate_castling_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let back_rank = color.back_rank();
        if from != Square(back_rank, 4) {
            return;
        }
        let opponent = color.opponent();

        for kingside in [true, false] {
            if !self.has_castling_right(castle_bit(color, kingside)) {
                continue;
            }
            let (rook_file, between, pass, land): (usize, &[usize], usize, usize) = if kingside {
                (7, &[5, 6], 5, 6)
            } else {
                (0, &[1, 2, 3], 3, 2)
            };
            if self.piece_at(Square(back_rank, rook_file)) != Some((color, Piece::Rook)) {
                continue;
            }
            if between.iter().any(|&f| !self.is_empty(Square(back_rank, f))) {
                continue;
            }
            if self.is_square_attacked(from, opponent)
                || self.is_square_attacked(Square(back_rank, pass), opponent)
                || self.is_square_attacked(Square(back_rank, land), opponent)
            {
                continue;
            }
            moves.push(Move::castle(from, Square(back_rank, land)));
        }
    }
}
