//! Move types and move lists.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

const FROM_MASK: u32 = 0x3F;
const TO_SHIFT: u32 = 6;
const PROMO_SHIFT: u32 = 12;
const CAPTURE_SHIFT: u32 = 15;
const KIND_SHIFT: u32 = 18;
const FIELD3_MASK: u32 = 0x7;

const KIND_NORMAL: u32 = 0;
const KIND_DOUBLE_PAWN: u32 = 1;
const KIND_CASTLE: u32 = 2;
const KIND_EN_PASSANT: u32 = 3;

/// Compact move representation.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-14: promotion piece index (0 = none)
/// - bits 15-17: captured piece index + 1 (0 = none)
/// - bits 18-19: kind (normal, double pawn push, castle, en passant)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u32);

impl Move {
    /// Create a null/empty move (used for initialization)
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move(0)
    }

    const fn pack(
        from: Square,
        to: Square,
        captured: Option<Piece>,
        promotion: Option<Piece>,
        kind: u32,
    ) -> Self {
        let promo = match promotion {
            Some(piece) => piece.index() as u32,
            None => 0,
        };
        let cap = match captured {
            Some(piece) => piece.index() as u32 + 1,
            None => 0,
        };
        Move(
            from.index() as u32
                | ((to.index() as u32) << TO_SHIFT)
                | (promo << PROMO_SHIFT)
                | (cap << CAPTURE_SHIFT)
                | (kind << KIND_SHIFT),
        )
    }

    /// Create a regular move, optionally capturing and/or promoting
    #[inline]
    #[must_use]
    pub(crate) const fn new(
        from: Square,
        to: Square,
        captured: Option<Piece>,
        promotion: Option<Piece>,
    ) -> Self {
        Move::pack(from, to, captured, promotion, KIND_NORMAL)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move::pack(from, to, None, None, KIND_DOUBLE_PAWN)
    }

    /// Castling is encoded as the king's move; the rook follows implicitly
    #[inline]
    #[must_use]
    pub(crate) const fn castle(from: Square, to: Square) -> Self {
        Move::pack(from, to, None, None, KIND_CASTLE)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn en_passant(from: Square, to: Square) -> Self {
        Move::pack(from, to, Some(Piece::Pawn), None, KIND_EN_PASSANT)
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index((self.0 & FROM_MASK) as usize)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> TO_SHIFT) & FROM_MASK) as usize)
    }

    #[inline]
    const fn kind(self) -> u32 {
        (self.0 >> KIND_SHIFT) & 0x3
    }

    /// The piece removed from the board by this move, if any
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        let cap = (self.0 >> CAPTURE_SHIFT) & FIELD3_MASK;
        if cap == 0 {
            None
        } else {
            Piece::from_index(cap as usize - 1)
        }
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        let promo = (self.0 >> PROMO_SHIFT) & FIELD3_MASK;
        if promo == 0 {
            None
        } else {
            Piece::from_index(promo as usize)
        }
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        (self.0 >> CAPTURE_SHIFT) & FIELD3_MASK != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        (self.0 >> PROMO_SHIFT) & FIELD3_MASK != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.kind() == KIND_CASTLE
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.kind() == KIND_EN_PASSANT
    }

    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        self.kind() == KIND_DOUBLE_PAWN
    }

    /// Get the raw value (for hashing/storage)
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some(cap) = self.captured() {
            write!(f, " x{}", cap.to_char())?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const MAX_PLY: usize = 128;
pub(crate) const EMPTY_MOVE: Move = Move::null();

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

/// A scored move for move ordering.
#[derive(Clone, Copy, Debug)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Fixed-size list of scored moves to avoid heap allocation.
#[derive(Clone, Debug)]
pub struct ScoredMoveList {
    moves: [ScoredMove; MAX_MOVES],
    len: usize,
}

impl ScoredMoveList {
    #[must_use]
    pub fn new() -> Self {
        ScoredMoveList {
            moves: [ScoredMove {
                mv: EMPTY_MOVE,
                score: 0,
            }; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move, score: i32) {
        self.moves[self.len] = ScoredMove { mv, score };
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ScoredMove] {
        &self.moves[..self.len]
    }

    /// Sort moves by score in descending order. The sort is stable, so equal
    /// scores keep generation order.
    pub fn sort_by_score_desc(&mut self) {
        self.moves[..self.len].sort_by(|a, b| b.score.cmp(&a.score));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredMove> {
        self.as_slice().iter()
    }
}

impl Default for ScoredMoveList {
    fn default() -> Self {
        ScoredMoveList::new()
    }
}
