//! Core board types.
//!
//! - `Piece`, `PieceKind` and `Color` - the piece catalog
//! - `Square` - validated (row, column) position with flat index encoding
//! - `TurnState` - whose turn it is

mod piece;
mod square;
mod turn;

pub use piece::{Color, Piece, PieceId, PieceKind};
pub use square::{Square, BOARD_SIZE, SQUARE_COUNT};
pub use turn::TurnState;
