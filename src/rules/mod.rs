//! Game rules shared by both board disciplines
//!
//! - Line scanning over horizontals, verticals and both diagonals
//! - Win conditions (a run of the board's required length)

pub mod lines;
pub mod win;

// Re-exports for convenient access
pub use lines::{find_run, find_run_of, windows, Direction, Run, Window};
pub use win::{check_winner, has_winning_run, is_game_over, winning_line};
