//! Change notifications published by `Game`.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Piece, Square, TurnState};

/// Rook relocation performed as part of a castle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RookMove {
    pub from: Square,
    pub to: Square,
    /// Piece that stood on `to` and was taken off the board
    pub displaced: Option<Piece>,
}

/// A move that has been applied to the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppliedMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// Piece that stood on `to` before the move, if any
    pub captured: Option<Piece>,
    /// Whether the move was applied as a castle
    pub castle: bool,
    /// Rook relocation of a castle; `None` when the corner was empty
    pub rook_move: Option<RookMove>,
    /// Turn state after the move
    pub turn: TurnState,
}

impl AppliedMove {
    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        self.castle
    }
}

/// Outcome of `Game::attempt_move` for a well-formed request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveResult {
    Applied(AppliedMove),
    /// The rules rejected the move; nothing changed.
    Illegal,
}

impl MoveResult {
    #[inline]
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, MoveResult::Applied(_))
    }

    #[must_use]
    pub fn applied(self) -> Option<AppliedMove> {
        match self {
            MoveResult::Applied(mv) => Some(mv),
            MoveResult::Illegal => None,
        }
    }
}

/// Event sent to every subscribed observer after the game state changed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    /// The board was reset and capture lists emptied
    NewGame,
    /// A piece was appended to a capture list
    PieceCaptured(Piece),
    /// A move was applied and the turn flipped
    MoveApplied(AppliedMove),
}

/// Observer callback for game changes.
///
/// Called synchronously on the thread that changed the game. When the game
/// lives in a `SharedGame`, the lock is held during the call, so the callback
/// must not call back into the same handle.
pub type GameObserver = Arc<dyn Fn(&GameEvent) + Send + Sync>;
