//! Square type and conversions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A square on the board, represented as (row, column).
///
/// Row 0 is the top of the board (Black's back rank), row 7 is White's
/// back rank. The flat index is `row * 8 + column`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSquare"))]
pub struct Square {
    row: u8,
    column: u8,
}

/// Wire form of a square, bounds-checked through `Square::new` on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSquare {
    row: usize,
    column: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSquare> for Square {
    type Error = SquareError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::new(raw.row, raw.column)
    }
}

impl Square {
    /// Create a new square with bounds checking.
    pub fn new(row: usize, column: usize) -> Result<Self, SquareError> {
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if column >= BOARD_SIZE {
            return Err(SquareError::ColumnOutOfBounds { column });
        }
        Ok(Square::at(row, column))
    }

    /// Create a square from a flat index (0-63).
    pub fn from_index(index: usize) -> Result<Self, SquareError> {
        if index >= SQUARE_COUNT {
            return Err(SquareError::IndexOutOfBounds { index });
        }
        Ok(Square::at(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// Unchecked constructor for coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn at(row: usize, column: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && column < BOARD_SIZE);
        Square {
            row: row as u8,
            column: column as u8,
        }
    }

    /// Get the row (0-7, 0 = top)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Get the column (0-7, 0 = left)
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.column as usize
    }

    /// Get the flat index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.column()
    }

    /// Square reached by moving `dr` rows and `dc` columns, if still on the board.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.row() as isize + dr;
        let column = self.column() as isize + dc;
        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&column) {
            Some(Square::at(row as usize, column as usize))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).map(|idx| Square::at(idx / BOARD_SIZE, idx % BOARD_SIZE))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (self.column + b'a') as char,
            BOARD_SIZE - self.row()
        )
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, column): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, column)
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::from_index(index)
    }
}

impl From<Square> for usize {
    fn from(square: Square) -> Self {
        square.index()
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parse algebraic notation ("e2"); file `a` is column 0, rank `8` is row 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let column = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => BOARD_SIZE - (bytes[1] - b'0') as usize,
            _ => return Err(invalid()),
        };

        Ok(Square::at(row, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_encoding() {
        let sq = Square::new(6, 4).unwrap();
        assert_eq!(sq.index(), 52);
        assert_eq!(Square::from_index(52).unwrap(), sq);
        assert_eq!(Square::from_index(0).unwrap(), Square::new(0, 0).unwrap());
        assert_eq!(Square::from_index(63).unwrap(), Square::new(7, 7).unwrap());
    }

    #[test]
    fn test_every_index_round_trips() {
        for (idx, sq) in Square::all().enumerate() {
            assert_eq!(sq.index(), idx);
            assert_eq!(Square::from_index(idx).unwrap(), sq);
        }
        assert_eq!(Square::all().count(), SQUARE_COUNT);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            Square::new(8, 0),
            Err(SquareError::RowOutOfBounds { row: 8 })
        );
        assert_eq!(
            Square::new(0, 9),
            Err(SquareError::ColumnOutOfBounds { column: 9 })
        );
        assert_eq!(
            Square::from_index(64),
            Err(SquareError::IndexOutOfBounds { index: 64 })
        );
        assert!(Square::try_from((7usize, 7usize)).is_ok());
        assert!(Square::try_from(100usize).is_err());
    }

    #[test]
    fn test_algebraic_notation() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!((e2.row(), e2.column()), (6, 4));
        assert_eq!(e2.to_string(), "e2");
        let a8: Square = "a8".parse().unwrap();
        assert_eq!(a8.index(), 0);

        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 2), Some(Square::new(1, 2).unwrap()));
    }
}
