use std::fmt;

use super::{Board, Square, BOARD_SIZE};

/// ASCII grid, row 0 at the top. White pieces are uppercase.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} |", BOARD_SIZE - row)?;
            for column in 0..BOARD_SIZE {
                let ch = self
                    .piece_at(Square::at(row, column))
                    .map_or('.', |piece| piece.to_fen_char());
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
