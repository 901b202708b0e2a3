use super::super::{Board, Color, Move, MoveList, Piece, Square};

pub(crate) const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Board {
    /// Walk each ray until the board edge or the first occupied square,
    /// including that square when it holds an enemy piece.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to, None, None)),
                    Some((c, piece)) => {
                        if c != color {
                            moves.push(Move::new(from, to, Some(piece), None));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }

    /// First piece met along a ray from `from`, if any
    pub(crate) fn first_piece_along(
        &self,
        from: Square,
        dr: isize,
        df: isize,
    ) -> Option<(Color, Piece)> {
        let mut current = from;
        while let Some(sq) = current.offset(dr, df) {
            if let Some(found) = self.piece_at(sq) {
                return Some(found);
            }
            current = sq;
        }
        None
    }
}
