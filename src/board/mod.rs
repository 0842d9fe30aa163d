//! Board representation shared by both game disciplines
//!
//! A [`Board`] is a fixed `rows x cols` grid of [`Mark`]s plus a move
//! discipline:
//! - [`GravityBoard`]: a move names a column, the piece falls to the lowest
//!   empty cell (Connect Four)
//! - [`PlacementBoard`]: a move names an exact cell (Tic-Tac-Toe)
//!
//! The search mutates a single board in place, so every successful
//! [`Board::place`] must be paired with an [`Board::undo`] in LIFO order.

use std::fmt;

pub mod grid;
pub mod gravity;
pub mod placement;

#[cfg(test)]
mod tests;

// Re-exports
pub use grid::Grid;
pub use gravity::GravityBoard;
pub use placement::PlacementBoard;

use crate::error::{BoardError, MoveError};

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::PlayerA => Mark::PlayerB,
            Mark::PlayerB => Mark::PlayerA,
            Mark::Empty => Mark::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Symbol used by `Display` and board layouts.
    pub fn symbol(self) -> char {
        match self {
            Mark::PlayerA => 'X',
            Mark::PlayerB => 'O',
            Mark::Empty => '-',
        }
    }

    /// Parse a layout symbol. `R`/`Y` are accepted as Connect Four colors.
    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            'X' | 'x' | 'R' | 'r' => Some(Mark::PlayerA),
            'O' | 'o' | 'Y' | 'y' => Some(Mark::PlayerB),
            '-' | '.' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Position on the board. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// Capability set shared by both board disciplines.
///
/// One search engine and move selector operate over any implementor.
/// `legal_moves` must enumerate in a fixed order (left to right, then top
/// to bottom) since tie-breaking depends on it.
pub trait Board {
    /// A column for gravity boards, a cell for placement boards.
    type Move: Copy + Eq + fmt::Debug + fmt::Display;

    /// Underlying cells, read by the line scanner and evaluator.
    fn grid(&self) -> &Grid;

    /// Length of a winning run on this board.
    fn win_length(&self) -> usize;

    /// Place `mark` for `mv`. On `Err` the board is unchanged; on `Ok`
    /// exactly one cell changed.
    fn place(&mut self, mv: Self::Move, mark: Mark) -> Result<(), MoveError>;

    /// Revert the most recent successful `place` of `mv`.
    ///
    /// Calling this without a matching prior `place` is a bug in the
    /// caller; it trips a debug assertion and is otherwise a no-op.
    fn undo(&mut self, mv: Self::Move);

    fn is_legal(&self, mv: Self::Move) -> bool;

    /// Every currently legal move, in enumeration order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn has_legal_move(&self) -> bool;

    #[inline]
    fn rows(&self) -> usize {
        self.grid().rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.grid().cols()
    }

    /// Mark at a cell, failing loudly for off-board coordinates.
    #[inline]
    fn get(&self, row: usize, col: usize) -> Result<Mark, BoardError> {
        self.grid().get(row, col)
    }

    /// Reset every cell to `Empty`.
    fn clear(&mut self);
}
