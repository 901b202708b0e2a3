pub mod board;
pub mod engine;
pub mod tt;
pub mod zobrist;

pub use board::{Board, Color, GameStatus, Move, Piece, Square};
pub use engine::Engine;
pub use tt::TranspositionTable;
