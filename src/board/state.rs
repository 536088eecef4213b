use super::error::SquareError;
use super::{Color, Piece, PieceKind, Square, BOARD_SIZE};

/// The 8x8 grid of optional pieces, indexed `[row][column]`.
///
/// The board keeps at most one piece per square and nothing else: it does no
/// capture bookkeeping and does not care whether the position is legal chess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board in the standard starting arrangement.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Clear every square, then set up the standard starting arrangement
    /// with freshly constructed pieces.
    pub fn reset(&mut self) {
        self.clear();
        for (column, kind) in PieceKind::BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                self.squares[color.back_rank()][column] = Some(Piece::new(color, *kind));
                self.squares[color.pawn_start_rank()][column] =
                    Some(Piece::new(color, PieceKind::Pawn));
            }
        }
    }

    pub fn clear(&mut self) {
        self.squares = [[None; BOARD_SIZE]; BOARD_SIZE];
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.row()][square.column()].as_ref()
    }

    /// Piece at a flat index (0-63).
    pub fn piece_at_index(&self, index: usize) -> Result<Option<&Piece>, SquareError> {
        Ok(self.piece_at(Square::from_index(index)?))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put `piece` on `square`, returning whatever was there before.
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square.row()][square.column()].replace(piece)
    }

    /// Empty `square`, returning its previous occupant.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.column()].take()
    }

    /// Relocate whatever is on `from` to `to` and clear `from`.
    ///
    /// The previous occupant of `to` is overwritten and returned; recording it
    /// as a capture is the caller's job. Moving from an empty square clears `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.remove(from);
        std::mem::replace(&mut self.squares[to.row()][to.column()], moving)
    }

    /// All occupied squares in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// First square (in index order) holding the king of `color`.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|(_, piece)| piece.kind() == PieceKind::King && piece.color() == color)
            .map(|(sq, _)| sq)
    }

    /// Number of pieces of `color` on the board.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.occupied()
            .filter(|(_, piece)| piece.color() == color)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
