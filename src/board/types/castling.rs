//! Castling rights bitmask helpers.

use super::piece::Color;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Bit for one castling right; `kingside` selects the short side
#[inline]
pub(crate) const fn castle_bit(color: Color, kingside: bool) -> u8 {
    match (color, kingside) {
        (Color::White, true) => CASTLE_WHITE_K,
        (Color::White, false) => CASTLE_WHITE_Q,
        (Color::Black, true) => CASTLE_BLACK_K,
        (Color::Black, false) => CASTLE_BLACK_Q,
    }
}

/// Rights lost when a piece leaves or is captured on `(rank, file)`
#[inline]
pub(crate) const fn rights_touching(rank: usize, file: usize) -> u8 {
    match (rank, file) {
        (0, 0) => CASTLE_WHITE_Q,
        (0, 7) => CASTLE_WHITE_K,
        (0, 4) => CASTLE_WHITE_K | CASTLE_WHITE_Q,
        (7, 0) => CASTLE_BLACK_Q,
        (7, 7) => CASTLE_BLACK_K,
        (7, 4) => CASTLE_BLACK_K | CASTLE_BLACK_Q,
        _ => 0,
    }
}
