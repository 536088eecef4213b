//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Per-kind move legality and path clearance
//! - `check.rs` - Check detection
//! - `edge_cases.rs` - Unusual positions and castling quirks
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, Square};

pub(super) fn sq(row: usize, column: usize) -> Square {
    Square::new(row, column).unwrap()
}

/// Legality of moving whatever stands on `from` to `to`.
pub(super) fn legal(board: &Board, from: Square, to: Square) -> bool {
    let piece = board.piece_at(from).expect("no piece on source square");
    board.is_legal(piece, from, to)
}
