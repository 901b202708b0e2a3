use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{
    file_to_index, rank_to_index, Board, Color, Move, Piece, Square, CASTLE_BLACK_K,
    CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};

/// FEN of the standard initial position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_counter(field: Option<&&str>, default: u32) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(s) => s.parse().map_err(|_| FenError::InvalidCounter {
            found: (*s).to_string(),
        }),
    }
}

impl Board {
    /// Parse a board position from FEN notation. The two move counters are
    /// optional and default to `0 1`.
    ///
    /// # Errors
    /// Returns a [`FenError`] describing the first malformed field.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { ranks: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        match parts[1] {
            "w" => board.white_to_move = true,
            "b" => board.white_to_move = false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights |= CASTLE_WHITE_K,
                'Q' => board.castling_rights |= CASTLE_WHITE_Q,
                'k' => board.castling_rights |= CASTLE_BLACK_K,
                'q' => board.castling_rights |= CASTLE_BLACK_Q,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(
                parts[3]
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })?,
            )
        };

        board.halfmove_clock = parse_counter(parts.get(4), 0)?;
        board.fullmove_number = parse_counter(parts.get(5), 1)?.max(1);

        board.hash = board.calculate_hash();
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let mut castling = String::new();
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.castling_rights & bit != 0 {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use chess_search::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = notation.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        if !('a'..='h').contains(&chars[0])
            || !('1'..='8').contains(&chars[1])
            || !('a'..='h').contains(&chars[2])
            || !('1'..='8').contains(&chars[3])
        {
            return Err(MoveParseError::InvalidSquare {
                notation: notation.to_string(),
            });
        }

        let from_sq = Square(rank_to_index(chars[1]), file_to_index(chars[0]));
        let to_sq = Square(rank_to_index(chars[3]), file_to_index(chars[2]));

        let promotion = if chars.len() == 5 {
            let piece = Piece::from_char(chars[4])
                .ok_or(MoveParseError::InvalidPromotion { char: chars[4] })?;
            if matches!(piece, Piece::Pawn | Piece::King) {
                return Err(MoveParseError::InvalidPromotion { char: chars[4] });
            }
            Some(piece)
        } else {
            None
        };

        self.generate_moves()
            .iter()
            .copied()
            .find(|m| m.from() == from_sq && m.to() == to_sq && m.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Parse a coordinate-notation move and apply it in one call.
    ///
    /// # Example
    /// ```
    /// use chess_search::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.apply_notation("e2e4").unwrap();
    /// board.apply_notation("e7e5").unwrap();
    /// ```
    pub fn apply_notation(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
