//! Shared access to a game from several callers.
//!
//! The engine itself is single-threaded. When more than one caller drives the
//! same game (for example two network peers), `SharedGame` puts the whole game
//! behind one lock so that every move is applied in full before the next one
//! is looked at.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{Board, GameError, Piece, TurnState};
use crate::game::{Game, GameEvent, MoveResult};

/// A cloneable handle to a game guarded by a single mutex.
#[derive(Clone, Debug)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    /// Create a handle to a new game in the starting position.
    #[must_use]
    pub fn new() -> Self {
        SharedGame::from_game(Game::new())
    }

    #[must_use]
    pub fn from_game(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    /// Validate and apply a move; see `Game::attempt_move`.
    pub fn attempt_move(
        &self,
        from_index: usize,
        to_index: usize,
    ) -> Result<MoveResult, GameError> {
        self.0.lock().attempt_move(from_index, to_index)
    }

    pub fn new_game(&self) {
        self.0.lock().new_game();
    }

    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.0.lock().turn()
    }

    /// Copy of the current board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.0.lock().board().clone()
    }

    /// Copies of the (white, black) capture lists.
    #[must_use]
    pub fn captured(&self) -> (Vec<Piece>, Vec<Piece>) {
        let game = self.0.lock();
        (game.captured_white().to_vec(), game.captured_black().to_vec())
    }

    /// Register an observer; it runs while the lock is held.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&GameEvent) + Send + Sync + 'static,
    {
        self.0.lock().subscribe(observer);
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.0.lock())
    }
}

impl Default for SharedGame {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::from_game(game)
    }
}
