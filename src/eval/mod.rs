//! Evaluation module for board positions
//!
//! This module provides win detection and scoring for board positions.
//! The evaluation considers:
//! - Completed runs (win/loss, always checked first)
//! - Open runs one short of winning (depth-limited search only)

pub mod heuristic;
pub mod patterns;

use serde::{Deserialize, Serialize};

pub use heuristic::{evaluate, judge, open_run_score, Verdict};
pub use patterns::PatternScore;

/// Which scoring applies to non-terminal positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalPolicy {
    /// Win/loss/draw only. For searches that always reach a terminal state.
    #[default]
    TerminalOnly,
    /// Adds the open-run bonus. For depth-limited searches.
    OpenRun,
}
