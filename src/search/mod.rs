//! Search module for the game AI
//!
//! Contains:
//! - Scoped place/undo guard for the shared board
//! - Minimax search with optional depth cutoff and alpha-beta pruning

pub mod guard;
pub mod minimax;

pub use guard::MoveGuard;
pub use minimax::{SearchConfig, Searcher};
