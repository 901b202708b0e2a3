use crate::zobrist::ZOBRIST;

use super::state::{NullMoveInfo, UndoEntry};
use super::{rights_touching, Board, BoardError, Color, Move, Piece, Square};

/// Rook source and destination files for a castling king landing on `king_file`.
#[inline]
fn castling_rook_files(king_file: usize) -> (usize, usize) {
    if king_file == 6 {
        (7, 5)
    } else {
        (0, 3)
    }
}

/// Square of the pawn removed by an en-passant capture
#[inline]
fn en_passant_victim(m: Move) -> Square {
    Square(m.from().rank(), m.to().file())
}

impl Board {
    #[inline]
    fn put_piece(&mut self, sq: Square, color: Color, piece: Piece, hash: &mut u64) {
        self.set_piece(sq, color, piece);
        *hash ^= ZOBRIST.piece(color, piece, sq);
    }

    #[inline]
    fn take_piece(&mut self, sq: Square, hash: &mut u64) -> Option<(Color, Piece)> {
        let found = self.piece_at(sq);
        if let Some((color, piece)) = found {
            self.clear_square(sq);
            *hash ^= ZOBRIST.piece(color, piece, sq);
        }
        found
    }

    /// Apply a generated move and push its undo record. The fingerprint is
    /// updated incrementally.
    pub(crate) fn make_move(&mut self, m: Move) {
        let color = self.side_to_move();
        let mut current_hash = self.hash;

        let entry_template = UndoEntry {
            mv: m,
            captured: None,
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_halfmove_clock: self.halfmove_clock,
            previous_hash: self.hash,
        };

        current_hash ^= ZOBRIST.black_to_move_key;
        current_hash ^= ZOBRIST.en_passant(self.en_passant_target);
        current_hash ^= ZOBRIST.castling(self.castling_rights);

        let captured = if m.is_en_passant() {
            self.take_piece(en_passant_victim(m), &mut current_hash)
        } else {
            self.take_piece(m.to(), &mut current_hash)
        };

        let (_, moving) = self
            .take_piece(m.from(), &mut current_hash)
            .expect("make_move: 'from' square empty");
        let placed = m.promotion().unwrap_or(moving);
        self.put_piece(m.to(), color, placed, &mut current_hash);

        if m.is_castling() {
            let (rook_from, rook_to) = castling_rook_files(m.to().file());
            let rank = m.to().rank();
            if let Some((rook_color, rook)) = self.take_piece(Square(rank, rook_from), &mut current_hash) {
                self.put_piece(Square(rank, rook_to), rook_color, rook, &mut current_hash);
            }
        }

        self.castling_rights &= !(rights_touching(m.from().rank(), m.from().file())
            | rights_touching(m.to().rank(), m.to().file()));

        self.en_passant_target = if m.is_double_pawn_push() {
            Some(Square((m.from().rank() + m.to().rank()) / 2, m.from().file()))
        } else {
            None
        };

        if moving == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }

        current_hash ^= ZOBRIST.castling(self.castling_rights);
        current_hash ^= ZOBRIST.en_passant(self.en_passant_target);
        self.white_to_move = !self.white_to_move;
        self.hash = current_hash;

        self.history.push(UndoEntry {
            captured,
            ..entry_template
        });
    }

    /// Take back the most recent move. Restores every field bit-for-bit.
    ///
    /// # Panics
    /// Panics if the undo stack is empty; search only ever unmakes moves it
    /// made itself. Use [`Board::undo`] for caller-driven take-backs.
    pub(crate) fn unmake_move(&mut self) -> Move {
        let entry = self
            .history
            .pop()
            .expect("unmake_move: undo stack underflow");
        let m = entry.mv;

        self.white_to_move = !self.white_to_move;
        self.castling_rights = entry.previous_castling_rights;
        self.en_passant_target = entry.previous_en_passant_target;
        self.halfmove_clock = entry.previous_halfmove_clock;
        self.hash = entry.previous_hash;

        let color = self.side_to_move();
        if color == Color::Black {
            self.fullmove_number -= 1;
        }

        let (_, moved) = self
            .piece_at(m.to())
            .expect("unmake_move: 'to' square empty");
        self.clear_square(m.to());
        let original = if m.is_promotion() { Piece::Pawn } else { moved };
        self.set_piece(m.from(), color, original);

        if m.is_castling() {
            let (rook_from, rook_to) = castling_rook_files(m.to().file());
            let rank = m.to().rank();
            if let Some((rook_color, rook)) = self.piece_at(Square(rank, rook_to)) {
                self.clear_square(Square(rank, rook_to));
                self.set_piece(Square(rank, rook_from), rook_color, rook);
            }
        }

        if let Some((cap_color, cap_piece)) = entry.captured {
            let sq = if m.is_en_passant() {
                en_passant_victim(m)
            } else {
                m.to()
            };
            self.set_piece(sq, cap_color, cap_piece);
        }

        m
    }

    /// Apply a move after checking it against the legal move list.
    ///
    /// # Errors
    /// Returns [`BoardError::IllegalMove`] and leaves the board unchanged if
    /// the move is not legal here.
    pub fn apply(&mut self, m: Move) -> Result<(), BoardError> {
        if !self.generate_moves().contains(m) {
            return Err(BoardError::IllegalMove {
                notation: m.to_string(),
            });
        }
        self.make_move(m);
        Ok(())
    }

    /// Take back the most recently applied move.
    ///
    /// # Errors
    /// Returns [`BoardError::UndoStackUnderflow`] when nothing has been applied.
    pub fn undo(&mut self) -> Result<Move, BoardError> {
        if self.history.is_empty() {
            return Err(BoardError::UndoStackUnderflow);
        }
        Ok(self.unmake_move())
    }

    /// Pass the turn without moving. Not recorded on the undo stack.
    pub(crate) fn make_null_move(&mut self) -> NullMoveInfo {
        let previous_hash = self.hash;
        let previous_en_passant_target = self.en_passant_target;

        let mut current_hash = self.hash;
        current_hash ^= ZOBRIST.black_to_move_key;
        current_hash ^= ZOBRIST.en_passant(self.en_passant_target);
        self.en_passant_target = None;
        self.white_to_move = !self.white_to_move;
        self.hash = current_hash;

        NullMoveInfo {
            previous_en_passant_target,
            previous_hash,
        }
    }

    pub(crate) fn unmake_null_move(&mut self, info: NullMoveInfo) {
        self.white_to_move = !self.white_to_move;
        self.en_passant_target = info.previous_en_passant_target;
        self.hash = info.previous_hash;
    }
}
