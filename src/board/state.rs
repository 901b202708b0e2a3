use std::fmt;

use crate::zobrist::ZOBRIST;

use super::{Color, Move, Piece, Square, ALL_CASTLING_RIGHTS};

/// Undo stack capacity reserved up front so make/unmake never allocates
/// during search.
pub(crate) const UNDO_STACK_CAPACITY: usize = 512;

/// Everything needed to take back one applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct UndoEntry {
    pub(crate) mv: Move,
    pub(crate) captured: Option<(Color, Piece)>,
    pub(crate) previous_castling_rights: u8,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_hash: u64,
}

pub(crate) struct NullMoveInfo {
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_hash: u64,
}

/// Why a game is over, as seen from the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    FiftyMove,
    Repetition,
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    #[must_use]
    pub fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate
                | GameStatus::InsufficientMaterial
                | GameStatus::FiftyMove
                | GameStatus::Repetition
        )
    }
}

/// Mutable position: mailbox board, side to move, rights, and undo stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8], // [rank][file]
    pub(crate) white_to_move: bool,
    pub(crate) castling_rights: u8, // bitmask
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64, // Zobrist fingerprint
    pub(crate) history: Vec<UndoEntry>,
}

impl Board {
    /// Standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, i), Color::White, *piece);
            board.set_piece(Square(7, i), Color::Black, *piece);
            board.set_piece(Square(1, i), Color::White, Piece::Pawn);
            board.set_piece(Square(6, i), Color::Black, Piece::Pawn);
        }

        board.castling_rights = ALL_CASTLING_RIGHTS;
        board.white_to_move = true;
        board.hash = board.calculate_hash();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            white_to_move: true,
            castling_rights: 0,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
            history: Vec::with_capacity(UNDO_STACK_CAPACITY),
        }
    }

    /// Canonical fingerprint of the position (pieces, side to move,
    /// castling rights and en-passant file).
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Recompute the fingerprint from scratch.
    #[must_use]
    pub fn calculate_hash(&self) -> u64 {
        let mut hash: u64 = 0;
        for sq in Square::all() {
            if let Some((color, piece)) = self.piece_at(sq) {
                hash ^= ZOBRIST.piece(color, piece, sq);
            }
        }
        if !self.white_to_move {
            hash ^= ZOBRIST.black_to_move_key;
        }
        hash ^= ZOBRIST.castling(self.castling_rights);
        hash ^= ZOBRIST.en_passant(self.en_passant_target);
        hash
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Number of moves currently on the undo stack.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Applied moves, oldest first.
    pub fn moves_played(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|entry| entry.mv)
    }

    /// The piece (with its color) standing on a square
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.0][sq.1] = None;
    }

    pub(crate) fn has_castling_right(&self, bit: u8) -> bool {
        self.castling_rights & bit != 0
    }

    pub(crate) fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// Halfmove clock has reached 100 plies without a capture or pawn move.
    #[must_use]
    pub fn is_draw_by_fifty_move_rule(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// True when the current position has occurred at least `n` times,
    /// counting the current occurrence. Only positions since the last
    /// irreversible move can repeat, so the scan stops there.
    #[must_use]
    pub fn is_draw_by_repetition(&self, n: u32) -> bool {
        if n <= 1 {
            return true;
        }
        let window = (self.halfmove_clock as usize).min(self.history.len());
        let mut seen = 1;
        for entry in self.history.iter().rev().take(window) {
            if entry.previous_hash == self.hash {
                seen += 1;
                if seen >= n {
                    return true;
                }
            }
        }
        false
    }

    /// Neither side can possibly deliver mate.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut knights = 0;
        let mut bishops_on_light = 0;
        let mut bishops_on_dark = 0;

        for sq in Square::all() {
            match self.piece_at(sq) {
                Some((_, Piece::Pawn | Piece::Rook | Piece::Queen)) => return false,
                Some((_, Piece::Knight)) => knights += 1,
                Some((_, Piece::Bishop)) => {
                    if (sq.rank() + sq.file()) % 2 == 1 {
                        bishops_on_light += 1;
                    } else {
                        bishops_on_dark += 1;
                    }
                }
                _ => {}
            }
        }

        let minors = knights + bishops_on_light + bishops_on_dark;
        if minors <= 1 {
            return true;
        }
        knights == 0 && (bishops_on_light == 0 || bishops_on_dark == 0)
    }

    /// Classify the position. Checkmate and stalemate take precedence over
    /// the draw rules.
    pub fn game_status(&mut self) -> GameStatus {
        self.game_status_with_repetition(3)
    }

    pub(crate) fn game_status_with_repetition(&mut self, repetitions: u32) -> GameStatus {
        if self.generate_moves().is_empty() {
            return if self.is_in_check() {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_insufficient_material() {
            GameStatus::InsufficientMaterial
        } else if self.is_draw_by_fifty_move_rule() {
            GameStatus::FiftyMove
        } else if self.is_draw_by_repetition(repetitions) {
            GameStatus::Repetition
        } else {
            GameStatus::Ongoing
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self
                    .piece_at(Square(rank, file))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
