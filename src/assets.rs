//! Image names for pieces.
//!
//! The presentation layer resolves these names to actual images; the engine
//! only provides the mapping.

use crate::board::{Color, Piece, PieceKind};

/// Image shown on an empty square.
pub const EMPTY_SQUARE_IMAGE: &str = "ClearPict";

/// Image name for a piece kind and color: the kind name, with a `-black`
/// suffix for Black ("Rook", "Rook-black").
#[must_use]
pub fn piece_image_name(kind: PieceKind, color: Color) -> String {
    match color {
        Color::White => kind.name().to_string(),
        Color::Black => format!("{}-black", kind.name()),
    }
}

/// Image name for the contents of a square.
#[must_use]
pub fn image_name(piece: Option<&Piece>) -> String {
    piece.map_or_else(
        || EMPTY_SQUARE_IMAGE.to_string(),
        |p| piece_image_name(p.kind(), p.color()),
    )
}
