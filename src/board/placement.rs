//! Free-placement board (Tic-Tac-Toe)

use std::fmt;

use super::gravity::check_win_length;
use super::{Board, Grid, Mark, Pos};
use crate::error::{BoardError, MoveError};

/// Standard Tic-Tac-Toe size
pub const TIC_TAC_TOE_SIZE: usize = 3;

/// Board where a move names an exact cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacementBoard {
    grid: Grid,
    win_length: usize,
}

impl PlacementBoard {
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, BoardError> {
        let grid = Grid::new(rows, cols)?;
        check_win_length(win_length, rows, cols)?;
        Ok(Self { grid, win_length })
    }

    /// Standard 3x3 board, three in a row wins.
    pub fn tic_tac_toe() -> Self {
        Self {
            grid: Grid::blank(TIC_TAC_TOE_SIZE, TIC_TAC_TOE_SIZE),
            win_length: TIC_TAC_TOE_SIZE,
        }
    }

    /// Build a board from a text layout, top row first.
    pub fn from_rows(layout: &[&str], win_length: usize) -> Result<Self, BoardError> {
        let grid = Grid::parse(layout)?;
        check_win_length(win_length, grid.rows(), grid.cols())?;
        Ok(Self { grid, win_length })
    }

    #[inline]
    fn in_range(&self, pos: Pos) -> bool {
        pos.row < self.grid.rows() && pos.col < self.grid.cols()
    }
}

impl Board for PlacementBoard {
    type Move = Pos;

    #[inline]
    fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    fn win_length(&self) -> usize {
        self.win_length
    }

    fn place(&mut self, pos: Pos, mark: Mark) -> Result<(), MoveError> {
        if mark.is_empty() {
            return Err(MoveError::EmptyMark);
        }
        if !self.in_range(pos) {
            return Err(MoveError::CellOutOfRange {
                row: pos.row,
                col: pos.col,
                rows: self.grid.rows(),
                cols: self.grid.cols(),
            });
        }
        if !self.grid.at_pos(pos).is_empty() {
            return Err(MoveError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.grid.set(pos.row, pos.col, mark);
        Ok(())
    }

    fn undo(&mut self, pos: Pos) {
        let occupied = self.in_range(pos) && !self.grid.at_pos(pos).is_empty();
        debug_assert!(occupied, "undo on empty cell {pos}");
        if occupied {
            self.grid.set(pos.row, pos.col, Mark::Empty);
        }
    }

    #[inline]
    fn is_legal(&self, pos: Pos) -> bool {
        self.in_range(pos) && self.grid.at_pos(pos).is_empty()
    }

    fn legal_moves(&self) -> Vec<Pos> {
        let mut moves = Vec::with_capacity(self.grid.rows() * self.grid.cols());
        // Row-major, same order as `Pos`
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let pos = Pos::new(row, col);
                if self.is_legal(pos) {
                    moves.push(pos);
                }
            }
        }
        moves
    }

    fn has_legal_move(&self) -> bool {
        !self.grid.is_full()
    }

    fn clear(&mut self) {
        self.grid.clear();
    }
}

impl Default for PlacementBoard {
    fn default() -> Self {
        Self::tic_tac_toe()
    }
}

impl fmt::Display for PlacementBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
