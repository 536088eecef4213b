//! Whose turn it is.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Which color may currently move.
///
/// `None` is only a presentation signal to disable all input; the engine
/// itself always alternates strictly between `WhiteToMove` and `BlackToMove`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnState {
    #[default]
    WhiteToMove,
    BlackToMove,
    None,
}

impl TurnState {
    /// Turn state for the given side to move
    #[inline]
    #[must_use]
    pub const fn for_color(color: Color) -> Self {
        match color {
            Color::White => TurnState::WhiteToMove,
            Color::Black => TurnState::BlackToMove,
        }
    }

    /// Color to move, or `None` when input is disabled
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            TurnState::WhiteToMove => Some(Color::White),
            TurnState::BlackToMove => Some(Color::Black),
            TurnState::None => None,
        }
    }

    /// Whether pieces of `color` may be picked up
    #[inline]
    #[must_use]
    pub fn allows(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// The state after a move has been applied.
    ///
    /// `None` stays `None`.
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self.color() {
            Some(color) => TurnState::for_color(color.opponent()),
            None => TurnState::None,
        }
    }
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnState::WhiteToMove => write!(f, "White to move"),
            TurnState::BlackToMove => write!(f, "Black to move"),
            TurnState::None => write!(f, "Input disabled"),
        }
    }
}
