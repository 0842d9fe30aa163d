//! Turn-based game loop between two players
//!
//! [`Game`] owns the board, asks the side to move for a move, validates it
//! through [`Board::place`] and checks for a finished game after every
//! placement. PlayerA always moves first.

use std::fmt;

use log::{info, warn};

use crate::board::{Board, Mark};
use crate::error::GameError;
use crate::player::Player;
use crate::rules::check_winner;

/// Default retry budget for a player proposing illegal moves
pub const DEFAULT_MAX_ILLEGAL_ATTEMPTS: u32 = 3;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(mark) => write!(f, "{mark} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// A game in progress.
pub struct Game<B: Board> {
    board: B,
    first: Box<dyn Player<B>>,
    second: Box<dyn Player<B>>,
    turn: Mark,
    history: Vec<(Mark, B::Move)>,
    outcome: Option<GameOutcome>,
    max_illegal_attempts: u32,
}

impl<B: Board> Game<B> {
    /// Start a game on `board`. `first` plays PlayerA, `second` PlayerB.
    pub fn new(board: B, first: Box<dyn Player<B>>, second: Box<dyn Player<B>>) -> Self {
        debug_assert_eq!(first.mark(), Mark::PlayerA);
        debug_assert_eq!(second.mark(), Mark::PlayerB);
        let outcome = outcome_of(&board);
        Self {
            board,
            first,
            second,
            turn: Mark::PlayerA,
            history: Vec::new(),
            outcome,
            max_illegal_attempts: DEFAULT_MAX_ILLEGAL_ATTEMPTS,
        }
    }

    /// Set how many refused moves in a row end the game with an error.
    #[must_use]
    pub fn with_max_illegal_attempts(mut self, attempts: u32) -> Self {
        self.max_illegal_attempts = attempts.max(1);
        self
    }

    #[inline]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> &[(Mark, B::Move)] {
        &self.history
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play one move for the side to move.
    ///
    /// Returns the outcome once the move finished the game.
    pub fn play_turn(&mut self) -> Result<Option<GameOutcome>, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }

        let mark = self.turn;
        let player = match mark {
            Mark::PlayerA => &mut self.first,
            _ => &mut self.second,
        };

        let mut attempts = 0;
        let mv = loop {
            let mv = player.get_move(&self.board)?;
            match self.board.place(mv, mark) {
                Ok(()) => break mv,
                Err(err) => {
                    attempts += 1;
                    warn!("{mark} proposed illegal move {mv}: {err}");
                    if attempts >= self.max_illegal_attempts {
                        return Err(GameError::TooManyIllegalMoves {
                            mark,
                            attempts,
                            last: err,
                        });
                    }
                }
            }
        };

        self.history.push((mark, mv));
        self.turn = mark.opponent();
        self.outcome = outcome_of(&self.board);
        if let Some(outcome) = self.outcome {
            info!("Game over after {} moves: {outcome}", self.history.len());
        }
        Ok(self.outcome)
    }

    /// Play until the game ends.
    pub fn play_to_end(&mut self) -> Result<GameOutcome, GameError> {
        info!(
            "New game on a {}x{} board, {} in a row wins",
            self.board.rows(),
            self.board.cols(),
            self.board.win_length()
        );
        if let Some(outcome) = self.outcome {
            return Ok(outcome);
        }
        loop {
            if let Some(outcome) = self.play_turn()? {
                return Ok(outcome);
            }
        }
    }

    /// Empty the board and start over with PlayerA to move.
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.turn = Mark::PlayerA;
        self.outcome = None;
    }
}

fn outcome_of<B: Board>(board: &B) -> Option<GameOutcome> {
    if let Some(mark) = check_winner(board) {
        Some(GameOutcome::Win(mark))
    } else if !board.has_legal_move() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::board::{GravityBoard, PlacementBoard, Pos};
    use crate::error::MoveError;
    use crate::player::AiPlayer;
    use crate::search::SearchConfig;

    /// Plays a fixed list of moves.
    struct ScriptedPlayer<M> {
        mark: Mark,
        moves: VecDeque<M>,
    }

    impl<M> ScriptedPlayer<M> {
        fn boxed(mark: Mark, moves: Vec<M>) -> Box<Self> {
            Box::new(Self {
                mark,
                moves: moves.into(),
            })
        }
    }

    impl<M, B: Board<Move = M>> Player<B> for ScriptedPlayer<M> {
        fn mark(&self) -> Mark {
            self.mark
        }

        fn get_move(&mut self, _board: &B) -> Result<M, GameError> {
            self.moves
                .pop_front()
                .ok_or_else(|| GameError::Input("script exhausted".to_string()))
        }
    }

    fn p(row: usize, col: usize) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn test_scripted_game_first_player_wins() {
        let mut game = Game::new(
            PlacementBoard::tic_tac_toe(),
            ScriptedPlayer::boxed(Mark::PlayerA, vec![p(0, 0), p(0, 1), p(0, 2)]),
            ScriptedPlayer::boxed(Mark::PlayerB, vec![p(1, 0), p(1, 1)]),
        );
        assert_eq!(game.play_to_end(), Ok(GameOutcome::Win(Mark::PlayerA)));
        assert_eq!(game.history().len(), 5);
        assert_eq!(game.history()[1], (Mark::PlayerB, p(1, 0)));
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Mark::PlayerA)));
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(
            GravityBoard::connect_four(),
            ScriptedPlayer::boxed(Mark::PlayerA, vec![3_usize]),
            ScriptedPlayer::boxed(Mark::PlayerB, vec![3_usize]),
        );
        assert_eq!(game.turn(), Mark::PlayerA);
        assert_eq!(game.play_turn(), Ok(None));
        assert_eq!(game.turn(), Mark::PlayerB);
        assert_eq!(game.play_turn(), Ok(None));
        assert_eq!(game.board().get(5, 3), Ok(Mark::PlayerA));
        assert_eq!(game.board().get(4, 3), Ok(Mark::PlayerB));
    }

    #[test]
    fn test_illegal_move_is_retried() {
        let mut game = Game::new(
            PlacementBoard::tic_tac_toe(),
            ScriptedPlayer::boxed(Mark::PlayerA, vec![p(1, 1)]),
            ScriptedPlayer::boxed(Mark::PlayerB, vec![p(1, 1), p(0, 0)]),
        );
        game.play_turn().unwrap();
        assert_eq!(game.play_turn(), Ok(None));
        assert_eq!(game.history(), &[(Mark::PlayerA, p(1, 1)), (Mark::PlayerB, p(0, 0))]);
    }

    #[test]
    fn test_too_many_illegal_moves() {
        let mut game = Game::new(
            GravityBoard::new(1, 3, 2).unwrap(),
            ScriptedPlayer::boxed(Mark::PlayerA, vec![0_usize]),
            ScriptedPlayer::boxed(Mark::PlayerB, vec![0_usize, 9, 1]),
        )
        .with_max_illegal_attempts(2);
        game.play_turn().unwrap();

        let before = game.board().clone();
        assert_eq!(
            game.play_turn(),
            Err(GameError::TooManyIllegalMoves {
                mark: Mark::PlayerB,
                attempts: 2,
                last: MoveError::ColumnOutOfRange { col: 9, cols: 3 },
            })
        );
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = Game::new(
            PlacementBoard::tic_tac_toe(),
            ScriptedPlayer::boxed(Mark::PlayerA, vec![p(0, 0), p(1, 1), p(2, 2), p(2, 0)]),
            ScriptedPlayer::boxed(Mark::PlayerB, vec![p(0, 1), p(0, 2)]),
        );
        assert_eq!(game.play_to_end(), Ok(GameOutcome::Win(Mark::PlayerA)));
        assert_eq!(game.play_turn(), Err(GameError::GameOver));
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut game = Game::new(
            GravityBoard::new(1, 3, 3).unwrap(),
            ScriptedPlayer::boxed(Mark::PlayerA, vec![0_usize, 2]),
            ScriptedPlayer::boxed(Mark::PlayerB, vec![1_usize]),
        );
        assert_eq!(game.play_to_end(), Ok(GameOutcome::Draw));
    }

    #[test]
    fn test_reset_clears_game() {
        let mut game = Game::new(
            PlacementBoard::tic_tac_toe(),
            ScriptedPlayer::boxed(Mark::PlayerA, vec![p(0, 0), p(2, 2)]),
            ScriptedPlayer::boxed(Mark::PlayerB, vec![p(1, 1)]),
        );
        game.play_turn().unwrap();
        game.play_turn().unwrap();
        game.reset();
        assert!(game.history().is_empty());
        assert_eq!(game.turn(), Mark::PlayerA);
        assert_eq!(game.board(), &PlacementBoard::tic_tac_toe());
        assert_eq!(game.play_turn(), Ok(None));
    }

    #[test]
    fn test_ai_self_play_tic_tac_toe_draws() {
        let config = SearchConfig::exhaustive().with_alpha_beta(true);
        let mut game = Game::new(
            PlacementBoard::tic_tac_toe(),
            Box::new(AiPlayer::new(Mark::PlayerA, config)),
            Box::new(AiPlayer::new(Mark::PlayerB, config)),
        );
        assert_eq!(game.play_to_end(), Ok(GameOutcome::Draw));
        assert_eq!(game.history().len(), 9);
    }

    #[test]
    fn test_ai_converts_open_three() {
        let board = GravityBoard::from_rows(
            &[
                "-------", //
                "-------",
                "-------",
                "-------",
                "-------",
                "O-XX--O",
            ],
            4,
        )
        .unwrap();
        let mut game = Game::new(
            board,
            Box::new(AiPlayer::new(Mark::PlayerA, SearchConfig::depth_limited(2))),
            ScriptedPlayer::boxed(Mark::PlayerB, vec![1_usize]),
        );
        assert_eq!(game.play_to_end(), Ok(GameOutcome::Win(Mark::PlayerA)));
        assert_eq!(
            game.history(),
            &[(Mark::PlayerA, 4), (Mark::PlayerB, 1), (Mark::PlayerA, 5)]
        );
    }
}
