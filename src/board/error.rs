//! Error types for board operations.

use thiserror::Error;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    #[error("FEN must have at least 4 parts, found {found}")]
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    #[error("Invalid piece character '{char}' in FEN")]
    InvalidPiece { char: char },
    /// Invalid castling character
    #[error("Invalid castling character '{char}' in FEN")]
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    #[error("Invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    #[error("Invalid en passant square '{found}'")]
    InvalidEnPassant { found: String },
    /// Wrong number of ranks in the placement field
    #[error("Invalid rank count {ranks} in FEN, expected 8")]
    InvalidRankCount { ranks: usize },
    /// Too many files in a rank
    #[error("Too many files ({files}) in rank {rank}")]
    TooManyFiles { rank: usize, files: usize },
    /// Non-numeric move counter
    #[error("Invalid move counter '{found}' in FEN")]
    InvalidCounter { found: String },
}

/// Error type for coordinate-notation move parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    #[error("Move must be 4-5 characters, found {len}")]
    InvalidLength { len: usize },
    /// Invalid square notation in move
    #[error("Invalid square notation in '{notation}'")]
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    #[error("Invalid promotion piece '{char}'")]
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    #[error("Illegal move '{notation}'")]
    IllegalMove { notation: String },
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    #[error("Rank {rank} out of bounds (must be 0-7)")]
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    #[error("File {file} out of bounds (must be 0-7)")]
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    #[error("Invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}

/// Error type for applying and undoing moves on a live board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The move was not produced by the generator for the current position.
    /// The board is left unchanged.
    #[error("Move {notation} is not legal in the current position")]
    IllegalMove { notation: String },
    /// `undo` was called with no move left to take back
    #[error("Undo stack underflow: no move to take back")]
    UndoStackUnderflow,
}
