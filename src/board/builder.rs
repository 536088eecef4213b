//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chessboard_core::board::{BoardBuilder, Color, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece((7, 4), Color::White, PieceKind::King)
//!     .piece((0, 4), Color::Black, PieceKind::King)
//!     .piece((6, 0), Color::White, PieceKind::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.occupied().count(), 3);
//! ```

use super::error::SquareError;
use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
///
/// Coordinates are `(row, column)` pairs and are validated by `build`.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<((usize, usize), Color, PieceKind)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial arrangement.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (column, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                builder
                    .pieces
                    .push(((color.back_rank(), column), color, kind));
                builder
                    .pieces
                    .push(((color.pawn_start_rank(), column), color, PieceKind::Pawn));
            }
        }
        builder
    }

    /// Place a piece on the board, replacing anything already there.
    #[must_use]
    pub fn piece(mut self, square: (usize, usize), color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: (usize, usize)) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board, constructing a fresh piece for every entry.
    pub fn build(self) -> Result<Board, SquareError> {
        let mut board = Board::empty();
        for ((row, column), color, kind) in self.pieces {
            board.place(Square::new(row, column)?, Piece::new(color, kind));
        }
        Ok(board)
    }
}
