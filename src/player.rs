//! Move sources for the game loop
//!
//! A [`Player`] proposes a move for its mark. The game loop validates the
//! move against the board; players never mutate the shared board.

use crate::board::{Board, Mark};
use crate::engine::AIEngine;
use crate::error::GameError;
use crate::search::SearchConfig;

/// A side in a game.
pub trait Player<B: Board> {
    /// Mark this player places
    fn mark(&self) -> Mark;

    /// Propose a move for the current position.
    fn get_move(&mut self, board: &B) -> Result<B::Move, GameError>;
}

/// Computer player backed by [`AIEngine`].
#[derive(Debug, Clone)]
pub struct AiPlayer {
    mark: Mark,
    engine: AIEngine,
}

impl AiPlayer {
    pub fn new(mark: Mark, config: SearchConfig) -> Self {
        Self {
            mark,
            engine: AIEngine::new(config),
        }
    }

    pub fn with_engine(mark: Mark, engine: AIEngine) -> Self {
        Self { mark, engine }
    }

    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }
}

impl<B: Board + Clone> Player<B> for AiPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn get_move(&mut self, board: &B) -> Result<B::Move, GameError> {
        // Search on a scratch copy; the engine restores it anyway
        let mut work_board = board.clone();
        self.engine
            .choose_move(&mut work_board, self.mark)
            .ok_or(GameError::NoLegalMove(self.mark))
    }
}
