//! Minimax engine for two-player grid games
//!
//! Two board disciplines share one search engine:
//! - Connect Four style gravity boards (6x7, four in a row wins)
//! - Tic-Tac-Toe style free-placement boards (3x3, three in a row wins)
//!
//! Any `rows x cols` board with a run length between 2 and the longer side
//! is supported.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Grid storage and the two move disciplines
//! - [`rules`]: Line scanning and win detection
//! - [`eval`]: Static evaluation (terminal scores, open-run heuristic)
//! - [`search`]: Minimax with optional alpha-beta, over one in-place board
//! - [`engine`]: Move selection for the side to move
//! - [`player`] / [`game`]: Players and the turn loop
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use gridgame::{AIEngine, Board, Mark, PlacementBoard, Pos};
//!
//! let mut board = PlacementBoard::tic_tac_toe();
//! let mut engine = AIEngine::tic_tac_toe();
//!
//! board.place(Pos::new(1, 1), Mark::PlayerA).unwrap();
//!
//! // AI responds as O
//! if let Some(pos) = engine.choose_move(&mut board, Mark::PlayerB) {
//!     board.place(pos, Mark::PlayerB).unwrap();
//!     println!("AI plays at {pos}");
//! }
//! ```
//!
//! # Scoring
//!
//! Positions are valued from the searching side's point of view:
//! 1. A completed run is a win or loss, earlier wins scoring higher
//! 2. Depth-limited searches add 50 per open end of a run one short of
//!    winning
//! 3. Everything else is 0

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, GravityBoard, Grid, Mark, PlacementBoard, Pos};
pub use config::{AppConfig, GameConfig};
pub use engine::{AIEngine, MoveResult};
pub use error::{BoardError, ConfigError, GameError, MoveError};
pub use eval::EvalPolicy;
pub use game::{Game, GameOutcome};
pub use player::{AiPlayer, Player};
pub use rules::check_winner;
pub use search::{SearchConfig, Searcher};
