//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chessboard_core::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, Color, GameError, MoveOutcome, Piece, PieceKind, Square, SquareError,
    TurnState,
};
