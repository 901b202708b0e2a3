//! Static evaluation.
//!
//! Scores are in centipawns from the side to move's point of view. A score
//! for the same placement with the other side to move is the negation.

use super::{Board, Color, Piece, Square, MAX_PLY};

/// Sentinel magnitude for checkmate. Mates found in search are reported as
/// `MATE_SCORE - ply`.
pub const MATE_SCORE: i32 = 30_000;

/// Scores with absolute value >= this are mate scores
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_PLY as i32;

pub(crate) const MOBILITY_WEIGHT: i32 = 10;
pub(crate) const DOUBLED_PAWN_PENALTY: i32 = 20;
pub(crate) const ISOLATED_PAWN_PENALTY: i32 = 15;

// Piece-square tables from White's view, a1 = index 0. Black reads them
// through `sq ^ 56`.
#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
     0,  0,   0,   0,   0,   0,  0,  0,
     5, 10,  10, -20, -20,  10, 10,  5,
     5, -5, -10,   0,   0, -10, -5,  5,
     0,  0,   0,  20,  20,   0,  0,  0,
     5,  5,  10,  25,  25,  10,  5,  5,
    10, 10,  20,  30,  30,  20, 10, 10,
    50, 50,  50,  50,  50,  50, 50, 50,
     0,  0,   0,   0,   0,   0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
    -20, -10, -10, -5, -5, -10, -10, -20,
    -10,   0,   5,  0,  0,   0,   0, -10,
    -10,   5,   5,  5,  5,   5,   0, -10,
      0,   0,   5,  5,  5,   5,   0,  -5,
     -5,   0,   5,  5,  5,   5,   0,  -5,
    -10,   0,   5,  5,  5,   5,   0, -10,
    -10,   0,   0,  0,  0,   0,   0, -10,
    -20, -10, -10, -5, -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_PST: [i32; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];

const PST: [&[i32; 64]; 6] = [
    &PAWN_PST,
    &KNIGHT_PST,
    &BISHOP_PST,
    &ROOK_PST,
    &QUEEN_PST,
    &KING_PST,
];

/// Calculate PST square index for a given color
#[inline]
fn pst_sq(sq: Square, color: Color) -> usize {
    match color {
        Color::White => sq.index(),
        Color::Black => sq.index() ^ 56,
    }
}

/// Material value counted by the evaluator; kings carry none.
#[inline]
pub(crate) fn material_value(piece: Piece) -> i32 {
    match piece {
        Piece::King => 0,
        other => other.value(),
    }
}

impl Board {
    /// Material plus piece-square placement, White minus Black.
    pub(crate) fn material_and_placement(&self) -> i32 {
        let mut score = 0;
        for sq in Square::all() {
            if let Some((color, piece)) = self.piece_at(sq) {
                let value = material_value(piece) + PST[piece.index()][pst_sq(sq, color)];
                score += color.sign() * value;
            }
        }
        score
    }

    /// Doubled and isolated pawn penalties, White minus Black (so a worse
    /// White structure yields a negative number).
    pub(crate) fn pawn_structure(&self) -> i32 {
        let mut files = [[0i32; 8]; 2];
        for sq in Square::all() {
            if let Some((color, Piece::Pawn)) = self.piece_at(sq) {
                files[color.index()][sq.file()] += 1;
            }
        }

        let mut score = 0;
        for color in Color::BOTH {
            let counts = &files[color.index()];
            let mut penalty = 0;
            for file in 0..8 {
                let n = counts[file];
                if n == 0 {
                    continue;
                }
                if n > 1 {
                    penalty += (n - 1) * DOUBLED_PAWN_PENALTY;
                }
                let left = file > 0 && counts[file - 1] > 0;
                let right = file < 7 && counts[file + 1] > 0;
                if !left && !right {
                    penalty += n * ISOLATED_PAWN_PENALTY;
                }
            }
            score -= color.sign() * penalty;
        }
        score
    }

    /// Opponent's legal move count, measured by passing the turn.
    fn opponent_move_count(&mut self) -> usize {
        let info = self.make_null_move();
        let count = self.legal_move_count();
        self.unmake_null_move(info);
        count
    }

    /// Evaluate from the side to move's perspective.
    pub fn evaluate(&mut self) -> i32 {
        let own = self.legal_move_count();
        self.evaluate_with_move_count(own)
    }

    /// Same as [`Board::evaluate`] when the caller has already generated
    /// the side to move's legal moves.
    pub(crate) fn evaluate_with_move_count(&mut self, own_moves: usize) -> i32 {
        if own_moves == 0 {
            return if self.is_in_check() { -MATE_SCORE } else { 0 };
        }
        if self.is_insufficient_material() {
            return 0;
        }

        let stm = self.side_to_move();
        let static_white = self.material_and_placement() + self.pawn_structure();
        let mobility = (own_moves as i32 - self.opponent_move_count() as i32) * MOBILITY_WEIGHT;

        stm.sign() * static_white + mobility
    }

    /// Evaluate from White's perspective, for display.
    pub fn evaluate_white(&mut self) -> i32 {
        self.side_to_move().sign() * self.evaluate()
    }
}
