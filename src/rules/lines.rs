//! Line scanner over any grid
//!
//! Enumerates every straight window of a given length: horizontals first,
//! then verticals, then the down-right and up-right diagonal families.
//! Each window is produced exactly once, anchored at its first cell, so
//! edge and corner windows are neither skipped nor double-counted. A grid
//! narrower than the window in some axis simply has no windows in the
//! orientations that need that axis.

use crate::board::{Grid, Mark, Pos};

/// Line orientation, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Bottom-left to top-right
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row, col) step between consecutive cells
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

/// A straight run of `len` on-board cells starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: Pos,
    pub direction: Direction,
    pub len: usize,
}

impl Window {
    /// Cell `i` steps from the start, `i` may run past either end.
    #[inline]
    fn offset(&self, i: isize) -> (isize, isize) {
        let (dr, dc) = self.direction.delta();
        (
            self.start.row as isize + dr * i,
            self.start.col as isize + dc * i,
        )
    }

    /// Cells covered by the window, in order.
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.len as isize).map(move |i| {
            let (r, c) = self.offset(i);
            Pos::new(r as usize, c as usize)
        })
    }

    /// The shared mark if every cell holds the same non-empty mark.
    pub fn uniform_mark(&self, grid: &Grid) -> Option<Mark> {
        let first = grid.at_pos(self.start);
        if first.is_empty() {
            return None;
        }
        self.cells()
            .skip(1)
            .all(|pos| grid.at_pos(pos) == first)
            .then_some(first)
    }

    /// Cell just before the window, if on the board.
    pub fn before(&self, grid: &Grid) -> Option<Pos> {
        self.extension(grid, -1)
    }

    /// Cell just after the window, if on the board.
    pub fn after(&self, grid: &Grid) -> Option<Pos> {
        self.extension(grid, self.len as isize)
    }

    fn extension(&self, grid: &Grid, i: isize) -> Option<Pos> {
        let (r, c) = self.offset(i);
        grid.is_on_board(r, c)
            .then(|| Pos::new(r as usize, c as usize))
    }
}

/// Every window of `len` cells on the grid, in scan order.
pub fn windows(grid: &Grid, len: usize) -> impl Iterator<Item = Window> + '_ {
    Direction::ALL
        .into_iter()
        .flat_map(move |direction| windows_in(grid, len, direction))
}

/// Windows of one orientation, anchored row by row, left to right.
fn windows_in(grid: &Grid, len: usize, direction: Direction) -> impl Iterator<Item = Window> + '_ {
    let rows = grid.rows();
    let cols = grid.cols();
    let (dr, dc) = direction.delta();
    let span = len.max(1) as isize - 1;

    (0..rows).flat_map(move |row| {
        (0..cols).filter_map(move |col| {
            let end_row = row as isize + dr * span;
            let end_col = col as isize + dc * span;
            (len > 0 && grid.is_on_board(end_row, end_col)).then_some(Window {
                start: Pos::new(row, col),
                direction,
                len,
            })
        })
    })
}

/// A run of identical non-empty marks found by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub mark: Mark,
    pub window: Window,
}

impl Run {
    /// Anchor coordinates of the run
    #[inline]
    pub fn anchor(&self) -> Pos {
        self.window.start
    }

    pub fn positions(&self) -> Vec<Pos> {
        self.window.cells().collect()
    }
}

/// First run of `len` identical non-empty marks in scan order.
pub fn find_run(grid: &Grid, len: usize) -> Option<Run> {
    windows(grid, len).find_map(|window| {
        window
            .uniform_mark(grid)
            .map(|mark| Run { mark, window })
    })
}

/// First run of `len` belonging to `mark`.
pub fn find_run_of(grid: &Grid, len: usize, mark: Mark) -> Option<Run> {
    windows(grid, len).find_map(|window| {
        (window.uniform_mark(grid) == Some(mark)).then_some(Run { mark, window })
    })
}
