//! Evaluation function for board positions
//!
//! Scores a board from one side's perspective:
//! - Terminal check first: a completed run is a flat win or loss
//! - Otherwise, under [`EvalPolicy::OpenRun`], every run one short of
//!   winning earns a bonus per empty extension cell

use crate::board::{Board, Grid, Mark};
use crate::rules::{find_run, windows};

use super::patterns::PatternScore;
use super::EvalPolicy;

/// Outcome of a static evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The perspective side owns a winning run
    Win,
    /// The opponent owns a winning run
    Loss,
    /// No winning run; heuristic score (zero under terminal-only)
    Open(i32),
}

impl Verdict {
    /// Signed score: `±PatternScore::WIN` for terminal positions.
    #[inline]
    pub fn score(self) -> i32 {
        match self {
            Verdict::Win => PatternScore::WIN,
            Verdict::Loss => -PatternScore::WIN,
            Verdict::Open(score) => score,
        }
    }
}

/// Classify the board from `perspective`'s point of view.
#[must_use]
pub fn judge<B: Board>(board: &B, perspective: Mark, policy: EvalPolicy) -> Verdict {
    debug_assert!(!perspective.is_empty());
    let grid = board.grid();
    let len = board.win_length();

    if let Some(run) = find_run(grid, len) {
        return if run.mark == perspective {
            Verdict::Win
        } else {
            Verdict::Loss
        };
    }

    match policy {
        EvalPolicy::TerminalOnly => Verdict::Open(0),
        EvalPolicy::OpenRun => Verdict::Open(open_run_score(grid, len, perspective)),
    }
}

/// Evaluate the board from the perspective of the given mark.
///
/// Returns a score where:
/// - `PatternScore::WIN` indicates a completed run for `perspective`
/// - `-PatternScore::WIN` indicates a completed run for the opponent
/// - anything else is the heuristic score (zero under terminal-only)
#[must_use]
pub fn evaluate<B: Board>(board: &B, perspective: Mark, policy: EvalPolicy) -> i32 {
    judge(board, perspective, policy).score()
}

/// Open-run heuristic.
///
/// Every window of `win_length - 1` identical non-empty marks scores
/// `PatternScore::OPEN_RUN` for each empty cell directly before or after
/// it, positive for `perspective` and negative for the opponent. Off-board
/// extension cells are not open.
pub fn open_run_score(grid: &Grid, win_length: usize, perspective: Mark) -> i32 {
    if win_length < 2 {
        return 0;
    }

    let mut score = 0;
    for window in windows(grid, win_length - 1) {
        let Some(mark) = window.uniform_mark(grid) else {
            continue;
        };
        let open_ends = [window.before(grid), window.after(grid)]
            .into_iter()
            .flatten()
            .filter(|&pos| grid.at_pos(pos).is_empty())
            .count() as i32;

        let sign = if mark == perspective { 1 } else { -1 };
        score += sign * open_ends * PatternScore::OPEN_RUN;
    }
    score
}
