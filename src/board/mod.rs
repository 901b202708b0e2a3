//! Chess board representation and game logic.
//!
//! Uses an 8x8 mailbox with an explicit undo stack. Supports full chess
//! rules including castling, en passant, and promotions; every generated
//! move is legal.
//!
//! # Example
//! ```
//! use chess_search::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{BoardError, FenError, MoveParseError, SquareError};
pub use eval::{MATE_SCORE, MATE_THRESHOLD};
pub use fen::START_FEN;
pub use state::{Board, GameStatus};
pub use types::{Color, Move, MoveList, Piece, ScoredMove, ScoredMoveList, Square};

// Public API - search functions and configuration
pub use search::{
    find_best_move, find_best_move_with_time, search, search_with_clock, SearchClock,
    SearchConfig, SearchError, SearchInfoCallback, SearchIterationInfo, SearchParams,
    SearchResult, SearchState, SearchStats, DEFAULT_MAX_DEPTH, DEFAULT_TT_MB, INFINITY,
};
pub use search::move_order::mvv_lva_score;

pub(crate) use types::{
    castle_bit, file_to_index, rank_to_index, rights_touching, ALL_CASTLING_RIGHTS,
    CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q, MAX_PLY, PROMOTION_PIECES,
};
