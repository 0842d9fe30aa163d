//! Scoped placement on a shared board
//!
//! The search explores every branch on one board. [`MoveGuard`] places a
//! piece and undoes it when dropped, so place/undo stay paired in LIFO
//! order even if a branch returns early or unwinds.

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Mark};
use crate::error::MoveError;

/// A placed move that is undone when the guard goes out of scope.
pub struct MoveGuard<'a, B: Board> {
    board: &'a mut B,
    mv: B::Move,
}

impl<'a, B: Board> MoveGuard<'a, B> {
    /// Place `mark` for `mv`. Nothing is held if the board refuses.
    pub fn place(board: &'a mut B, mv: B::Move, mark: Mark) -> Result<Self, MoveError> {
        board.place(mv, mark)?;
        Ok(Self { board, mv })
    }

    #[inline]
    pub fn mv(&self) -> B::Move {
        self.mv
    }
}

impl<B: Board> Deref for MoveGuard<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.board
    }
}

impl<B: Board> DerefMut for MoveGuard<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.board
    }
}

impl<B: Board> Drop for MoveGuard<'_, B> {
    fn drop(&mut self) {
        self.board.undo(self.mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GravityBoard, PlacementBoard, Pos};

    #[test]
    fn test_guard_undoes_on_drop() {
        let mut board = GravityBoard::connect_four();
        {
            let guard = MoveGuard::place(&mut board, 3, Mark::PlayerA).unwrap();
            assert_eq!(guard.get(5, 3), Ok(Mark::PlayerA));
            assert_eq!(guard.mv(), 3);
        }
        assert_eq!(board, GravityBoard::connect_four());
    }

    #[test]
    fn test_nested_guards_unwind_in_order() {
        let mut board = PlacementBoard::tic_tac_toe();
        {
            let mut outer = MoveGuard::place(&mut board, Pos::new(1, 1), Mark::PlayerA).unwrap();
            {
                let inner = MoveGuard::place(&mut *outer, Pos::new(0, 0), Mark::PlayerB).unwrap();
                assert_eq!(inner.grid().count(Mark::Empty), 7);
            }
            assert_eq!(outer.grid().count(Mark::Empty), 8);
        }
        assert_eq!(board, PlacementBoard::tic_tac_toe());
    }

    #[test]
    fn test_refused_placement_holds_nothing() {
        let mut board = PlacementBoard::from_rows(&["X--", "---", "---"], 3).unwrap();
        let before = board.clone();
        assert!(MoveGuard::place(&mut board, Pos::new(0, 0), Mark::PlayerB).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_guard_undoes_during_unwind() {
        let mut board = GravityBoard::connect_four();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = MoveGuard::place(&mut board, 0, Mark::PlayerA).unwrap();
            panic!("branch aborted");
        }));
        assert!(result.is_err());
        assert_eq!(board, GravityBoard::connect_four());
    }
}
