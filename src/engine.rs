//! Main AI engine: picks a move for one side
//!
//! The engine drives the minimax searcher across every legal move of the
//! current position. Each candidate is placed on the caller's board,
//! valued one ply down with the opponent to move, and undone. The move with
//! the strictly greatest value wins; among equals the first enumerated move
//! is kept, so repeated calls on the same position return the same move.
//!
//! # Example
//!
//! ```
//! use gridgame::{AIEngine, Board, GravityBoard, Mark, SearchConfig};
//!
//! let mut engine = AIEngine::new(SearchConfig::depth_limited(2));
//! let mut board = GravityBoard::connect_four();
//! board.place(3, Mark::PlayerA).unwrap();
//!
//! let result = engine.choose_move_with_stats(&mut board, Mark::PlayerB);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::time::Instant;

use log::{debug, trace};

use crate::board::{Board, Mark};
use crate::search::{MoveGuard, SearchConfig, Searcher};

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult<M> {
    /// Best move found, `None` when the side had no legal move
    pub best_move: Option<M>,
    /// Minimax value of the best move for the moving side
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl<M> MoveResult<M> {
    /// Result for a position with no legal move
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            time_ms,
            nodes: 0,
        }
    }
}

/// Move selector built on the minimax searcher.
///
/// # Configuration
///
/// - Gravity-drop games: [`SearchConfig::depth_limited`] (shallow cutoff,
///   open-run heuristic)
/// - Free-placement games: [`SearchConfig::exhaustive`] (search to the end,
///   terminal-only scoring)
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }

    /// Engine tuned for Connect Four (six plies below the root).
    #[must_use]
    pub fn connect_four() -> Self {
        Self::new(SearchConfig::depth_limited(6))
    }

    /// Engine tuned for Tic-Tac-Toe (full search).
    #[must_use]
    pub fn tic_tac_toe() -> Self {
        Self::new(SearchConfig::exhaustive())
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.searcher.set_config(config);
    }

    /// Best move for `mark`, or `None` if no legal move exists.
    ///
    /// The board is used as scratch space and is identical on return.
    #[must_use]
    pub fn choose_move<B: Board>(&mut self, board: &mut B, mark: Mark) -> Option<B::Move> {
        self.choose_move_with_stats(board, mark).best_move
    }

    /// Best move for `mark` with search statistics.
    pub fn choose_move_with_stats<B: Board>(
        &mut self,
        board: &mut B,
        mark: Mark,
    ) -> MoveResult<B::Move> {
        let start = Instant::now();
        self.searcher.reset_nodes();

        let moves = board.legal_moves();
        if moves.is_empty() {
            debug!("{mark} has no legal move");
            return MoveResult::no_move(elapsed_ms(start));
        }

        let pruning = self.searcher.config().alpha_beta;
        let mut best: Option<(B::Move, i32)> = None;

        for mv in moves {
            // Children already worse than or equal to the best cannot be chosen
            let alpha = match best {
                Some((_, score)) if pruning => score,
                _ => i32::MIN,
            };

            let score = {
                let Ok(mut child) = MoveGuard::place(board, mv, mark) else {
                    debug_assert!(false, "enumerated move {mv} was refused");
                    continue;
                };
                self.searcher
                    .search(&mut *child, mark, 0, false, alpha, i32::MAX)
            };
            trace!("{mark} candidate {mv}: {score}");

            if best.map_or(true, |(_, current)| score > current) {
                best = Some((mv, score));
            }
        }

        let time_ms = elapsed_ms(start);
        let nodes = self.searcher.nodes();
        match best {
            Some((mv, score)) => {
                debug!("{mark} plays {mv} (score {score}, {nodes} nodes, {time_ms}ms)");
                MoveResult {
                    best_move: Some(mv),
                    score,
                    time_ms,
                    nodes,
                }
            }
            None => MoveResult::no_move(time_ms),
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::connect_four()
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
