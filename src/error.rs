//! Error types for boards, moves, games and configuration

use std::path::PathBuf;

use crate::board::Mark;

/// Errors raised by board construction and coordinate queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is off a {rows}x{cols} board")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("board dimensions must be at least 1x1, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("run length {win_length} does not fit a {rows}x{cols} board")]
    InvalidWinLength {
        win_length: usize,
        rows: usize,
        cols: usize,
    },

    #[error("board layout has no rows")]
    EmptyLayout,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol {symbol:?} at ({row}, {col})")]
    InvalidSymbol { symbol: char, row: usize, col: usize },

    #[error("piece at ({row}, {col}) is floating above an empty cell")]
    FloatingPiece { row: usize, col: usize },
}

/// Reasons a board refuses a placement. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {col} is outside 0..{cols}")]
    ColumnOutOfRange { col: usize, cols: usize },

    #[error("cell ({row}, {col}) is outside a {rows}x{cols} board")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("cannot place an empty mark")]
    EmptyMark,
}

/// Errors raised while running a game between two players.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("{0} has no legal move")]
    NoLegalMove(Mark),

    #[error("{mark} gave {attempts} illegal moves in a row (last: {last})")]
    TooManyIllegalMoves {
        mark: Mark,
        attempts: u32,
        last: MoveError,
    },

    #[error("the game is already over")]
    GameOver,

    #[error("failed to read a move: {0}")]
    Input(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
