//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (rank, file) board square
//! - `Move` and `MoveList` - packed move representation and fixed-capacity lists
//! - castling-rights bitmask helpers

mod castling;
mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList, ScoredMove, ScoredMoveList};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use castling::{
    castle_bit, rights_touching, ALL_CASTLING_RIGHTS, CASTLE_BLACK_K, CASTLE_BLACK_Q,
    CASTLE_WHITE_K, CASTLE_WHITE_Q,
};
pub(crate) use moves::MAX_PLY;
pub(crate) use piece::PROMOTION_PIECES;
pub(crate) use square::{file_to_index, rank_to_index};
