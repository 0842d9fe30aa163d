//! Minimax search over a shared, in-place board
//!
//! The searcher alternates maximizing (perspective side to move) and
//! minimizing plies, scoring leaves with the evaluator. Branches are
//! explored by placing and undoing on the caller's board through
//! [`MoveGuard`], never by copying.
//!
//! # Features
//!
//! - Faster wins score higher, slower losses score less badly
//! - Optional depth cutoff with open-run heuristic at the leaves
//! - Optional alpha-beta pruning that returns the same root choice
//!
//! # Example
//!
//! ```
//! use gridgame::board::{Mark, PlacementBoard};
//! use gridgame::search::{SearchConfig, Searcher};
//!
//! let mut board = PlacementBoard::from_rows(&["XX-", "OO-", "---"], 3).unwrap();
//! let mut searcher = Searcher::new(SearchConfig::exhaustive());
//!
//! // X to move wins immediately
//! let value = searcher.minimax(&mut board, Mark::PlayerA, 0, true);
//! assert!(value > 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark};
use crate::eval::{judge, EvalPolicy, PatternScore, Verdict};

use super::MoveGuard;

/// Search bound and leaf scoring, chosen per game discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth at which non-terminal nodes are scored statically.
    /// `None` searches every line to a terminal state.
    pub max_depth: Option<u32>,
    /// Leaf evaluation policy
    pub policy: EvalPolicy,
    /// Prune with alpha-beta bounds. Does not change the chosen move.
    pub alpha_beta: bool,
}

impl SearchConfig {
    /// Shallow cutoff plus open-run heuristic (gravity-drop games).
    #[must_use]
    pub fn depth_limited(max_depth: u32) -> Self {
        Self {
            max_depth: Some(max_depth),
            policy: EvalPolicy::OpenRun,
            alpha_beta: false,
        }
    }

    /// Full-depth search with terminal-only scoring (free-placement games).
    #[must_use]
    pub fn exhaustive() -> Self {
        Self {
            max_depth: None,
            policy: EvalPolicy::TerminalOnly,
            alpha_beta: false,
        }
    }

    #[must_use]
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::exhaustive()
    }
}

/// Depth-first minimax searcher.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Nodes visited since the last reset
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    /// Value of `board` for `perspective`, with `maximizing` true when
    /// `perspective` is the side to move.
    ///
    /// The board is mutated during the search and restored before return.
    pub fn minimax<B: Board>(
        &mut self,
        board: &mut B,
        perspective: Mark,
        depth: u32,
        maximizing: bool,
    ) -> i32 {
        self.search(board, perspective, depth, maximizing, i32::MIN, i32::MAX)
    }

    /// Recursive minimax with an (alpha, beta) window.
    ///
    /// The window only narrows when pruning is enabled; otherwise every
    /// legal move is visited.
    pub(crate) fn search<B: Board>(
        &mut self,
        board: &mut B,
        perspective: Mark,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        let verdict = judge(board, perspective, self.config.policy);
        let value = verdict.score();
        let ply = depth as i32;

        // Prefer faster wins and slower losses
        match verdict {
            Verdict::Win => return PatternScore::WIN - ply + value,
            Verdict::Loss => return -PatternScore::WIN + ply + value,
            Verdict::Open(_) => {}
        }

        let at_cutoff = self.config.max_depth.is_some_and(|max| depth >= max);
        if at_cutoff || !board.has_legal_move() {
            return value;
        }

        let mover = if maximizing {
            perspective
        } else {
            perspective.opponent()
        };

        let mut best: Option<i32> = None;
        for mv in board.legal_moves() {
            let score = {
                let Ok(mut child) = MoveGuard::place(board, mv, mover) else {
                    debug_assert!(false, "enumerated move {mv} was refused");
                    continue;
                };
                self.search(&mut *child, perspective, depth + 1, !maximizing, alpha, beta)
            };

            // Strict comparison: the first of equal moves is kept
            let improved = match best {
                None => true,
                Some(current) if maximizing => score > current,
                Some(current) => score < current,
            };
            if improved {
                best = Some(score);
            }

            if self.config.alpha_beta {
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
                if alpha >= beta {
                    break;
                }
            }
        }

        // No move was searched: fall back to the static value
        best.unwrap_or(value)
    }
}
