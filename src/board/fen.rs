//! FEN piece-placement parsing and formatting.
//!
//! Only the first FEN field is supported. Its first rank is row 0 of the
//! board, so rows map directly without flipping.

use super::error::FenError;
use super::{Board, Color, Piece, PieceKind, Square, BOARD_SIZE};

/// Placement of the standard starting arrangement.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse a board from a FEN piece-placement field.
    ///
    /// Any further FEN fields (side to move, castling, ...) are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(FenError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut column = 0;
            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 {
                        return Err(FenError::InvalidPiece { char: c });
                    }
                    column += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if column >= BOARD_SIZE {
                    return Err(FenError::TooManyColumns {
                        row,
                        columns: column + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.place(Square::at(row, column), Piece::new(color, kind));
                column += 1;
            }
            if column > BOARD_SIZE {
                return Err(FenError::TooManyColumns {
                    row,
                    columns: column,
                });
            }
            if column < BOARD_SIZE {
                return Err(FenError::TooFewColumns {
                    row,
                    columns: column,
                });
            }
        }

        Ok(board)
    }

    /// Parse a board from a FEN piece-placement field.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN placement")
    }

    /// Format the board as a FEN piece-placement field.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE);
        for row in 0..BOARD_SIZE {
            let mut out = String::new();
            let mut empty = 0;
            for column in 0..BOARD_SIZE {
                if let Some(piece) = self.piece_at(Square::at(row, column)) {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            rows.push(out);
        }
        rows.join("/")
    }
}
