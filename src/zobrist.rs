//! Zobrist hashing for chess positions.
//!
//! Provides the incrementally-updatable 64-bit fingerprint used for
//! transposition lookups and repetition detection.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // one key per castling-rights bit (WK, WQ, BK, BQ)
    pub(crate) castling_keys: [u64; 4],
    // en_passant_keys[file_index] (only file matters for EP target)
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // fixed seed, reproducible fingerprints
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [0; 4];
        let mut en_passant_keys = [0; 8];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for key in &mut castling_keys {
            *key = rng.gen();
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.index()]
    }

    /// XOR of the keys for every bit set in a castling-rights mask
    #[inline]
    pub(crate) fn castling(&self, rights: u8) -> u64 {
        let mut key = 0;
        for (bit, k) in self.castling_keys.iter().enumerate() {
            if rights & (1 << bit) != 0 {
                key ^= k;
            }
        }
        key
    }

    #[inline]
    pub(crate) fn en_passant(&self, ep: Option<Square>) -> u64 {
        ep.map_or(0, |sq| self.en_passant_keys[sq.file()])
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
