//! Rules engine for a two-player, same-device chess game.
//!
//! - [`board`] - the 8x8 board, the piece catalog and move legality
//! - [`game`] - the game controller: turns, captures, move application
//! - [`sync`] - a lock-guarded handle for games driven by several callers
//! - [`assets`] - image names for the presentation layer

#[macro_use]
mod logging;

pub mod assets;
pub mod board;
pub mod game;
pub mod sync;

pub use board::{Board, Color, GameError, MoveOutcome, Piece, PieceKind, Square, TurnState};
pub use game::{AppliedMove, Game, GameEvent, MoveResult};
pub use sync::SharedGame;
