//! Fixed-size cell storage shared by both board disciplines

use std::fmt;

use super::{Mark, Pos};
use crate::error::BoardError;

/// Row-major `rows x cols` grid of marks. Dimensions never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Mark>,
}

impl Grid {
    /// Create an all-empty grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self::blank(rows, cols))
    }

    /// All-empty grid for dimensions known to be non-zero.
    pub(crate) fn blank(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            rows,
            cols,
            cells: vec![Mark::Empty; rows * cols],
        }
    }

    /// Build a grid from rows of layout symbols (see [`Mark::from_symbol`]).
    /// Whitespace inside a row is ignored.
    pub fn parse(layout: &[&str]) -> Result<Self, BoardError> {
        let parsed: Vec<Vec<char>> = layout
            .iter()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect())
            .collect();
        let Some(first) = parsed.first() else {
            return Err(BoardError::EmptyLayout);
        };
        let cols = first.len();
        let mut grid = Self::new(parsed.len(), cols)?;

        for (row, symbols) in parsed.iter().enumerate() {
            if symbols.len() != cols {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: cols,
                    found: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                let mark = Mark::from_symbol(symbol)
                    .ok_or(BoardError::InvalidSymbol { symbol, row, col })?;
                grid.set(row, col, mark);
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if signed coordinates fall on the grid
    #[inline]
    pub fn is_on_board(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Mark at a cell, or `OutOfRange` for off-board coordinates.
    pub fn get(&self, row: usize, col: usize) -> Result<Mark, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[row * self.cols + col])
    }

    /// Unchecked read for callers that already bounded their coordinates.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Mark {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    #[inline]
    pub(crate) fn at_pos(&self, pos: Pos) -> Mark {
        self.at(pos.row, pos.col)
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, mark: Mark) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = mark;
    }

    pub fn clear(&mut self) {
        self.cells.fill(Mark::Empty);
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Mark::Empty)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.at(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
