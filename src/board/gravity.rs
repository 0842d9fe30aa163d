//! Gravity-drop board (Connect Four)
//!
//! A move names a column and the piece falls to the lowest empty cell.
//! Within a column the empty cells always form a contiguous block at the
//! top (no floating pieces).

use std::fmt;

use super::{Board, Grid, Mark};
use crate::error::{BoardError, MoveError};

/// Standard Connect Four dimensions
pub const CONNECT_FOUR_ROWS: usize = 6;
pub const CONNECT_FOUR_COLS: usize = 7;
pub const CONNECT_FOUR_RUN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GravityBoard {
    grid: Grid,
    win_length: usize,
}

impl GravityBoard {
    /// Create an empty board requiring runs of `win_length`.
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, BoardError> {
        let grid = Grid::new(rows, cols)?;
        check_win_length(win_length, rows, cols)?;
        Ok(Self { grid, win_length })
    }

    /// Standard 6x7 board, four in a row wins.
    pub fn connect_four() -> Self {
        Self {
            grid: Grid::blank(CONNECT_FOUR_ROWS, CONNECT_FOUR_COLS),
            win_length: CONNECT_FOUR_RUN,
        }
    }

    /// Build a board from a text layout, top row first. Rejects layouts
    /// with a piece above an empty cell.
    pub fn from_rows(layout: &[&str], win_length: usize) -> Result<Self, BoardError> {
        let grid = Grid::parse(layout)?;
        check_win_length(win_length, grid.rows(), grid.cols())?;

        for col in 0..grid.cols() {
            for row in 1..grid.rows() {
                if grid.at(row, col).is_empty() && !grid.at(row - 1, col).is_empty() {
                    return Err(BoardError::FloatingPiece { row: row - 1, col });
                }
            }
        }
        Ok(Self { grid, win_length })
    }

    /// Row a piece dropped in `col` would land on, if the column has room.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.grid.cols() {
            return None;
        }
        (0..self.grid.rows())
            .rev()
            .find(|&row| self.grid.at(row, col).is_empty())
    }

    /// Topmost occupied row in `col`
    fn top_piece_row(&self, col: usize) -> Option<usize> {
        (0..self.grid.rows()).find(|&row| !self.grid.at(row, col).is_empty())
    }
}

pub(crate) fn check_win_length(win_length: usize, rows: usize, cols: usize) -> Result<(), BoardError> {
    if win_length < 2 || win_length > rows.max(cols) {
        return Err(BoardError::InvalidWinLength {
            win_length,
            rows,
            cols,
        });
    }
    Ok(())
}

impl Board for GravityBoard {
    type Move = usize;

    #[inline]
    fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    fn win_length(&self) -> usize {
        self.win_length
    }

    fn place(&mut self, col: usize, mark: Mark) -> Result<(), MoveError> {
        if mark.is_empty() {
            return Err(MoveError::EmptyMark);
        }
        if col >= self.grid.cols() {
            return Err(MoveError::ColumnOutOfRange {
                col,
                cols: self.grid.cols(),
            });
        }
        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.grid.set(row, col, mark);
        Ok(())
    }

    fn undo(&mut self, col: usize) {
        let top = if col < self.grid.cols() {
            self.top_piece_row(col)
        } else {
            None
        };
        debug_assert!(top.is_some(), "undo on empty column {col}");
        if let Some(row) = top {
            self.grid.set(row, col, Mark::Empty);
        }
    }

    #[inline]
    fn is_legal(&self, col: usize) -> bool {
        col < self.grid.cols() && self.grid.at(0, col).is_empty()
    }

    fn legal_moves(&self) -> Vec<usize> {
        (0..self.grid.cols()).filter(|&col| self.is_legal(col)).collect()
    }

    fn has_legal_move(&self) -> bool {
        (0..self.grid.cols()).any(|col| self.is_legal(col))
    }

    fn clear(&mut self) {
        self.grid.clear();
    }
}

impl Default for GravityBoard {
    fn default() -> Self {
        Self::connect_four()
    }
}

impl fmt::Display for GravityBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
