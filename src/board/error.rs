//! Error types for board and game operations.

use std::fmt;

use super::Color;

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { column: usize },
    /// Flat index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColumnOutOfBounds { column } => {
                write!(f, "Column {column} out of bounds (must be 0-7)")
            }
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN piece-placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Placement must describe exactly 8 rows
    WrongRowCount { found: usize },
    /// Invalid piece character in placement string
    InvalidPiece { char: char },
    /// Too many columns in a row
    TooManyColumns { row: usize, columns: usize },
    /// Too few columns in a row
    TooFewColumns { row: usize, columns: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongRowCount { found } => {
                write!(f, "FEN placement must have 8 rows, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::TooManyColumns { row, columns } => {
                write!(f, "Too many columns ({columns}) in row {row}")
            }
            FenError::TooFewColumns { row, columns } => {
                write!(f, "Too few columns ({columns}) in row {row}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Board invariant violations detected by the rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// No king of the given color is on the board
    KingNotFound { color: Color },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::KingNotFound { color } => {
                write!(f, "No {color} king on the board")
            }
        }
    }
}

impl std::error::Error for RulesError {}

/// Error type for rejected game requests.
///
/// An illegal move is not an error; these are requests that cannot be
/// evaluated at all. None of them changes game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A square index or coordinate is off the board
    InvalidSquare(SquareError),
    /// There is no piece on the source square
    EmptySquare { index: usize },
    /// The board violates an invariant the rules depend on
    Rules(RulesError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSquare(e) => write!(f, "Invalid square: {e}"),
            GameError::EmptySquare { index } => write!(f, "No piece on square {index}"),
            GameError::Rules(e) => write!(f, "Rules error: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidSquare(e) => Some(e),
            GameError::Rules(e) => Some(e),
            GameError::EmptySquare { .. } => None,
        }
    }
}

impl From<SquareError> for GameError {
    fn from(e: SquareError) -> Self {
        GameError::InvalidSquare(e)
    }
}

impl From<RulesError> for GameError {
    fn from(e: RulesError) -> Self {
        GameError::Rules(e)
    }
}
