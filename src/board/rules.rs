//! Move legality rules.
//!
//! Legality here is deliberately shallow: a move is judged only by how the
//! piece moves and what stands in its way. There is no en passant, no
//! promotion, and no rejection of moves that leave the mover's own king in
//! check. Castling is accepted whenever the king makes a sideways jump of more
//! than one column from its home column on a back rank.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::RulesError;
use super::{Board, Color, Piece, PieceKind, Square};

/// Column the king starts on.
const KING_HOME_COLUMN: usize = 4;

/// Result of evaluating a candidate move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    Illegal,
    Legal,
    /// Legal king move that castles; the matching rook must move as well.
    LegalCastle,
}

impl MoveOutcome {
    #[inline]
    #[must_use]
    pub const fn is_legal(self) -> bool {
        !matches!(self, MoveOutcome::Illegal)
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveOutcome::LegalCastle)
    }

    const fn from_bool(legal: bool) -> Self {
        if legal {
            MoveOutcome::Legal
        } else {
            MoveOutcome::Illegal
        }
    }
}

/// Absolute (row, column) distance between two squares.
#[inline]
fn deltas(from: Square, to: Square) -> (usize, usize) {
    (
        from.row().abs_diff(to.row()),
        from.column().abs_diff(to.column()),
    )
}

/// True if `piece` moving `from` -> `to` has the shape of a castle: a king
/// leaving its home column sideways by more than one column on a back rank.
///
/// Nothing else is checked: not whether the king or rook moved before, not
/// whether the squares between are empty or attacked.
#[must_use]
pub fn is_castle_attempt(piece: &Piece, from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    piece.kind() == PieceKind::King
        && from.column() == KING_HOME_COLUMN
        && dr == 0
        && dc > 1
        && (from.row() == 0 || from.row() == 7)
}

impl Board {
    /// Evaluate moving `piece` from `from` to `to` on this board.
    ///
    /// `piece` does not have to be the piece currently on `from`; the rules
    /// only use its color and kind.
    #[must_use]
    pub fn evaluate_move(&self, piece: &Piece, from: Square, to: Square) -> MoveOutcome {
        if let Some(target) = self.piece_at(to) {
            if target.color() == piece.color() {
                return MoveOutcome::Illegal;
            }
        }

        let (dr, dc) = deltas(from, to);
        match piece.kind() {
            PieceKind::Pawn => MoveOutcome::from_bool(self.pawn_move_is_legal(piece, from, to)),
            PieceKind::Knight => MoveOutcome::from_bool((dr, dc) == (1, 2) || (dr, dc) == (2, 1)),
            PieceKind::Bishop => MoveOutcome::from_bool(self.diagonal_is_open(from, to)),
            PieceKind::Rook => MoveOutcome::from_bool(self.line_is_open(from, to)),
            PieceKind::Queen => MoveOutcome::from_bool(
                self.diagonal_is_open(from, to) || self.line_is_open(from, to),
            ),
            PieceKind::King => {
                if dr <= 1 && dc <= 1 {
                    MoveOutcome::Legal
                } else if is_castle_attempt(piece, from, to) {
                    MoveOutcome::LegalCastle
                } else {
                    MoveOutcome::Illegal
                }
            }
        }
    }

    /// Whether moving `piece` from `from` to `to` is legal (castles included).
    #[inline]
    #[must_use]
    pub fn is_legal(&self, piece: &Piece, from: Square, to: Square) -> bool {
        self.evaluate_move(piece, from, to).is_legal()
    }

    /// Whether the king of `color` could be taken by any opposing piece.
    ///
    /// Every opposing piece is tried against the king square. Returns
    /// `RulesError::KingNotFound` if there is no king of that color, since the
    /// board is then corrupt.
    pub fn is_king_in_check(&self, color: Color) -> Result<bool, RulesError> {
        let Some(king_square) = self.find_king(color) else {
            error_log!("check detection: no {} king on the board", color);
            return Err(RulesError::KingNotFound { color });
        };

        Ok(self
            .occupied()
            .filter(|(_, piece)| piece.color() != color)
            .any(|(square, piece)| self.is_legal(piece, square, king_square)))
    }

    /// Every square the piece on `from` may legally move to, in index order.
    ///
    /// Empty if `from` is empty.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        Square::all()
            .filter(|&to| self.is_legal(piece, from, to))
            .collect()
    }

    fn pawn_move_is_legal(&self, piece: &Piece, from: Square, to: Square) -> bool {
        let color = piece.color();
        let advance = (to.row() as isize - from.row() as isize) * color.pawn_direction();
        if advance <= 0 {
            return false;
        }
        let max_advance = if from.row() == color.pawn_start_rank() { 2 } else { 1 };
        if advance > max_advance {
            return false;
        }

        // A double step needs the square straight ahead free, diagonal or not
        if advance == 2 {
            let ahead = from.offset(color.pawn_direction(), 0);
            if !ahead.is_some_and(|square| self.is_empty(square)) {
                return false;
            }
        }

        match from.column().abs_diff(to.column()) {
            // Straight pushes never capture
            0 => self.is_empty(to),
            // Sideways by one only captures; the same-color case is already excluded
            1 => !self.is_empty(to),
            _ => false,
        }
    }

    fn diagonal_is_open(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = deltas(from, to);
        dr == dc && dr > 0 && self.path_is_clear(from, to)
    }

    fn line_is_open(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = deltas(from, to);
        (dr == 0) != (dc == 0) && self.path_is_clear(from, to)
    }

    /// True if every square strictly between `from` and `to` is empty.
    ///
    /// `from` and `to` must share a row, column or diagonal.
    pub(crate) fn path_is_clear(&self, from: Square, to: Square) -> bool {
        let step_row = (to.row() as isize - from.row() as isize).signum();
        let step_column = (to.column() as isize - from.column() as isize).signum();

        let mut current = from;
        loop {
            current = match current.offset(step_row, step_column) {
                Some(next) => next,
                None => return true,
            };
            if current == to {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
        }
    }
}
