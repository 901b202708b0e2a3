mod kings;
mod knights;
mod pawns;
mod sliders;

use kings::{king_target, KING_OFFSETS};
use knights::{knight_target, KNIGHT_OFFSETS};
use sliders::{DIAGONALS, ORTHOGONALS};

use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Push a single-step move (knight or king) unless the target holds a
    /// friendly piece.
    #[inline]
    pub(crate) fn push_step(&self, from: Square, to: Square, color: Color, moves: &mut MoveList) {
        match self.piece_at(to) {
            None => moves.push(Move::new(from, to, None, None)),
            Some((c, piece)) if c != color => moves.push(Move::new(from, to, Some(piece), None)),
            _ => {}
        }
    }

    fn generate_piece_moves(&self, from: Square, color: Color, piece: Piece, moves: &mut MoveList) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => self.generate_sliding_moves(from, color, &DIAGONALS, moves),
            Piece::Rook => self.generate_sliding_moves(from, color, &ORTHOGONALS, moves),
            Piece::Queen => {
                self.generate_sliding_moves(from, color, &ORTHOGONALS, moves);
                self.generate_sliding_moves(from, color, &DIAGONALS, moves);
            }
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// Moves that obey piece movement rules without regard to leaving the
    /// mover's king attacked. Squares are visited a1..h8.
    pub(crate) fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move();
        for from in Square::all() {
            if let Some((c, piece)) = self.piece_at(from) {
                if c == color {
                    self.generate_piece_moves(from, color, piece, &mut moves);
                }
            }
        }
        moves
    }

    /// Legal moves for the side to move, in generation order.
    ///
    /// Each pseudo-legal move is made, tested for leaving the mover's king
    /// attacked, and unmade, so the board is unchanged on return.
    pub fn generate_moves(&mut self) -> MoveList {
        let pseudo = self.generate_pseudo_moves();
        let color = self.side_to_move();
        let mut legal = MoveList::new();
        for &m in pseudo.iter() {
            self.make_move(m);
            if !self.is_king_attacked(color) {
                legal.push(m);
            }
            self.unmake_move();
        }
        legal
    }

    #[must_use]
    pub fn legal_move_count(&mut self) -> usize {
        self.generate_moves().len()
    }

    /// Whether any piece of `attacker` attacks `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, attacker: Color) -> bool {
        // A pawn of `attacker` attacks sq from one rank behind it
        let pawn_rank = -attacker.pawn_direction();
        for df in [-1, 1] {
            if let Some(from) = sq.offset(pawn_rank, df) {
                if self.piece_at(from) == Some((attacker, Piece::Pawn)) {
                    return true;
                }
            }
        }

        for &offset in &KNIGHT_OFFSETS {
            if let Some(from) = knight_target(sq, offset) {
                if self.piece_at(from) == Some((attacker, Piece::Knight)) {
                    return true;
                }
            }
        }

        for &offset in &KING_OFFSETS {
            if let Some(from) = king_target(sq, offset) {
                if self.piece_at(from) == Some((attacker, Piece::King)) {
                    return true;
                }
            }
        }

        for &(dr, df) in &ORTHOGONALS {
            if let Some((c, piece)) = self.first_piece_along(sq, dr, df) {
                if c == attacker && matches!(piece, Piece::Rook | Piece::Queen) {
                    return true;
                }
            }
        }

        for &(dr, df) in &DIAGONALS {
            if let Some((c, piece)) = self.first_piece_along(sq, dr, df) {
                if c == attacker && matches!(piece, Piece::Bishop | Piece::Queen) {
                    return true;
                }
            }
        }

        false
    }

    /// A side without a king on the board is never considered attacked.
    pub(crate) fn is_king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move())
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check() && self.generate_moves().is_empty()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check() && self.generate_moves().is_empty()
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for &m in moves.iter() {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move();
        }
        nodes
    }
}
