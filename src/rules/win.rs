//! Win condition checking
//!
//! A side wins by owning `win_length` identical marks in a straight line.
//! Both the game loop and the evaluator go through the same line scanner.

use crate::board::{Board, Mark};

use super::lines::{find_run, find_run_of, Run};

/// First winning run on the board, if any.
pub fn winning_line<B: Board>(board: &B) -> Option<Run> {
    find_run(board.grid(), board.win_length())
}

/// Check for a winner
///
/// Returns `Some(Mark)` for the owner of the first winning run found,
/// `None` otherwise. In normal play at most one side can have a run.
pub fn check_winner<B: Board>(board: &B) -> Option<Mark> {
    winning_line(board).map(|run| run.mark)
}

/// Check if `mark` owns a winning run
pub fn has_winning_run<B: Board>(board: &B, mark: Mark) -> bool {
    find_run_of(board.grid(), board.win_length(), mark).is_some()
}

/// Game over: somebody won or nobody can move.
pub fn is_game_over<B: Board>(board: &B) -> bool {
    check_winner(board).is_some() || !board.has_legal_move()
}
