//! Chess board representation and move rules.
//!
//! The board is a plain 8x8 grid of optional pieces. Row 0 is the top of the
//! board where Black starts; White starts on rows 6 and 7.
//!
//! # Example
//! ```
//! use chessboard_core::board::{Board, Square};
//!
//! let board = Board::new();
//! let e2 = Square::new(6, 4).unwrap();
//! let e4 = Square::new(4, 4).unwrap();
//! let pawn = board.piece_at(e2).unwrap();
//! assert!(board.is_legal(pawn, e2, e4));
//! ```

mod builder;
mod display;
mod error;
mod fen;
pub mod prelude;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, GameError, RulesError, SquareError};
pub use fen::STARTING_PLACEMENT;
pub use rules::{is_castle_attempt, MoveOutcome};
pub use state::Board;
pub use types::{Color, Piece, PieceId, PieceKind, Square, TurnState, BOARD_SIZE, SQUARE_COUNT};
