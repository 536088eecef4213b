//! Game controller.
//!
//! `Game` owns the board and both capture lists, keeps track of whose turn it
//! is and applies moves. It is the only thing that mutates game state; the
//! presentation layer reads it and calls its commands.
//!
//! # Example
//! ```
//! use chessboard_core::game::Game;
//! use chessboard_core::board::TurnState;
//!
//! let mut game = Game::new();
//! // e2-e4: row 6, column 4 to row 4, column 4
//! let result = game.attempt_move(52, 36).unwrap();
//! assert!(result.is_applied());
//! assert_eq!(game.turn(), TurnState::BlackToMove);
//! ```

mod events;

use std::fmt;
use std::sync::Arc;

use crate::board::{
    is_castle_attempt, Board, Color, GameError, Piece, Square, SquareError, TurnState,
};

pub use events::{AppliedMove, GameEvent, GameObserver, MoveResult, RookMove};

/// King landing column that castles queenside; any other castle is kingside.
const QUEENSIDE_KING_COLUMN: usize = 1;

/// (rook column, rook destination column) for a castle landing on `king_column`.
const fn castling_rook_columns(king_column: usize) -> (usize, usize) {
    if king_column == QUEENSIDE_KING_COLUMN {
        (0, 2)
    } else {
        (7, 5)
    }
}

pub struct Game {
    board: Board,
    captured_white: Vec<Piece>,
    captured_black: Vec<Piece>,
    turn: TurnState,
    observers: Vec<GameObserver>,
}

impl Game {
    /// Create a game in the starting position with White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut game = Game::from_board(Board::empty(), TurnState::WhiteToMove);
        game.new_game();
        game
    }

    /// Create a game from an arbitrary position, with empty capture lists.
    #[must_use]
    pub fn from_board(board: Board, turn: TurnState) -> Self {
        Game {
            board,
            captured_white: Vec::new(),
            captured_black: Vec::new(),
            turn,
            observers: Vec::new(),
        }
    }

    /// Reset the board to the starting position, empty both capture lists and
    /// give White the move.
    pub fn new_game(&mut self) {
        self.board.reset();
        self.captured_white.clear();
        self.captured_black.clear();
        self.turn = TurnState::WhiteToMove;
        debug_log!("new game");
        self.notify(&GameEvent::NewGame);
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// White pieces captured so far, in capture order.
    #[inline]
    #[must_use]
    pub fn captured_white(&self) -> &[Piece] {
        &self.captured_white
    }

    /// Black pieces captured so far, in capture order.
    #[inline]
    #[must_use]
    pub fn captured_black(&self) -> &[Piece] {
        &self.captured_black
    }

    /// Capture list for pieces of `color`.
    #[must_use]
    pub fn captured(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.captured_white,
            Color::Black => &self.captured_black,
        }
    }

    /// Piece at a flat index (0-63).
    pub fn piece_at_index(&self, index: usize) -> Result<Option<&Piece>, SquareError> {
        self.board.piece_at_index(index)
    }

    /// Whether the piece at `index` belongs to the side to move.
    ///
    /// False for empty squares and invalid indices.
    #[must_use]
    pub fn can_move(&self, index: usize) -> bool {
        matches!(
            self.board.piece_at_index(index),
            Ok(Some(piece)) if self.turn.allows(piece.color())
        )
    }

    /// Register a change observer.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&GameEvent) + Send + Sync + 'static,
    {
        self.observers.push(Arc::new(observer));
    }

    /// Legality of moving `piece` between two flat indices. Never mutates.
    ///
    /// Invalid indices are simply illegal.
    #[must_use]
    pub fn is_legal_move(&self, piece: &Piece, from_index: usize, to_index: usize) -> bool {
        match (Square::from_index(from_index), Square::from_index(to_index)) {
            (Ok(from), Ok(to)) => self.board.is_legal(piece, from, to),
            _ => false,
        }
    }

    /// Squares the piece at `index` may legally move to.
    pub fn legal_destinations(&self, index: usize) -> Result<Vec<Square>, GameError> {
        Ok(self.board.legal_destinations(Square::from_index(index)?))
    }

    /// Whether the king of `color` is attacked. Informational only: moves that
    /// leave the mover in check are not rejected.
    ///
    /// A board without that king yields `GameError::Rules`.
    pub fn is_king_in_check(&self, color: Color) -> Result<bool, GameError> {
        Ok(self.board.is_king_in_check(color)?)
    }

    /// Append `piece` to the capture list of its color.
    pub fn record_capture(&mut self, piece: Piece) {
        match piece.color() {
            Color::White => self.captured_white.push(piece),
            Color::Black => self.captured_black.push(piece),
        }
        debug_log!("captured {}", piece);
        self.notify(&GameEvent::PieceCaptured(piece));
    }

    /// Validate and apply a move between two flat indices.
    ///
    /// Returns an error for off-board indices or an empty source square, and
    /// `MoveResult::Illegal` when the rules reject the move; in all of these
    /// cases nothing changes. Otherwise the captured piece (if any) is
    /// recorded, the piece moves, a castling rook follows the king, and the
    /// turn flips.
    pub fn attempt_move(
        &mut self,
        from_index: usize,
        to_index: usize,
    ) -> Result<MoveResult, GameError> {
        let from = Square::from_index(from_index)?;
        let to = Square::from_index(to_index)?;
        let piece = *self
            .board
            .piece_at(from)
            .ok_or(GameError::EmptySquare { index: from_index })?;

        let outcome = self.board.evaluate_move(&piece, from, to);
        if !outcome.is_legal() {
            trace_log!("rejected {} {} -> {}", piece, from, to);
            return Ok(MoveResult::Illegal);
        }

        if let Some(&target) = self.board.piece_at(to) {
            self.record_capture(target);
        }
        Ok(MoveResult::Applied(self.apply(piece, from, to, outcome.is_castle())))
    }

    /// Apply a move that the caller has already validated.
    ///
    /// Legality is not checked again and the captured destination piece is
    /// not recorded; call `record_capture` first for a move onto an opposing
    /// piece. A king move shaped like a castle also relocates the rook, and
    /// a piece the rook lands on is recorded here since the caller cannot see
    /// it coming.
    pub fn move_piece(
        &mut self,
        from_index: usize,
        to_index: usize,
    ) -> Result<AppliedMove, GameError> {
        let from = Square::from_index(from_index)?;
        let to = Square::from_index(to_index)?;
        let piece = *self
            .board
            .piece_at(from)
            .ok_or(GameError::EmptySquare { index: from_index })?;

        let castle = is_castle_attempt(&piece, from, to);
        Ok(self.apply(piece, from, to, castle))
    }

    fn apply(&mut self, piece: Piece, from: Square, to: Square, castle: bool) -> AppliedMove {
        let captured = self.board.move_piece(from, to);
        let rook_move = if castle {
            self.relocate_castling_rook(to)
        } else {
            None
        };
        self.turn = self.turn.flipped();

        let applied = AppliedMove {
            piece,
            from,
            to,
            captured,
            castle,
            rook_move,
            turn: self.turn,
        };
        debug_log!(
            "{} {} -> {}{}{}",
            piece,
            from,
            to,
            if captured.is_some() { " (capture)" } else { "" },
            if castle { " (castle)" } else { "" }
        );
        self.notify(&GameEvent::MoveApplied(applied));
        applied
    }

    /// Move the corner piece of a castle to its square beside the king.
    ///
    /// Landing on column 1 takes column 0 to column 2; any other landing
    /// column takes column 7 to column 5. Whatever stands in the corner is
    /// moved, and a piece already on the destination is taken off the board
    /// and recorded as captured. Nothing moves when the corner is empty or
    /// the king itself landed there.
    fn relocate_castling_rook(&mut self, king_to: Square) -> Option<RookMove> {
        let (rook_column, target_column) = castling_rook_columns(king_to.column());
        let from = Square::new(king_to.row(), rook_column).ok()?;
        let to = Square::new(king_to.row(), target_column).ok()?;
        if from == king_to || self.board.is_empty(from) {
            debug_log!("castle to {}: no piece on {} to relocate", king_to, from);
            return None;
        }

        let displaced = self.board.move_piece(from, to);
        if let Some(piece) = displaced {
            self.record_capture(piece);
        }
        Some(RookMove {
            from,
            to,
            displaced,
        })
    }

    fn notify(&self, event: &GameEvent) {
        for observer in &self.observers {
            observer(event);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board.to_fen())
            .field("turn", &self.turn)
            .field("captured_white", &self.captured_white.len())
            .field("captured_black", &self.captured_black.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
