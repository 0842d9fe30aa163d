//! Terminal front end: play Connect Four or Tic-Tac-Toe against the engine
//! or another human.

use std::io::{self, BufRead, Write};
use std::marker::PhantomData;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use gridgame::{
    AiPlayer, AppConfig, Board, Game, GameConfig, GameError, GravityBoard, Mark, PlacementBoard,
    Player, Pos,
};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct CommandArgs {
    /// TOML config file (defaults are used if missing)
    #[arg(long, default_value = "gridgame.toml")]
    config: PathBuf,

    /// Log every chosen move with its score and node count
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Drop pieces into columns, four in a row wins
    ConnectFour(#[clap(flatten)] PlayArg),
    /// Mark cells on a 3x3 grid, three in a row wins
    TicTacToe(#[clap(flatten)] PlayArg),
}

#[derive(Debug, Clone, Args)]
struct PlayArg {
    /// Who plays X (moves first)
    #[arg(long, value_enum, default_value_t = Controller::Human)]
    first: Controller,

    /// Who plays O
    #[arg(long, value_enum, default_value_t = Controller::Ai)]
    second: Controller,

    /// Override the configured search depth
    #[arg(long)]
    depth: Option<u32>,

    /// Enable alpha-beta pruning
    #[arg(long)]
    alpha_beta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Controller {
    Human,
    Ai,
}

/// Text form of a move typed at the prompt.
trait ParseMove: Board {
    const PROMPT: &'static str;

    fn parse_move(input: &str) -> Option<Self::Move>;
}

impl ParseMove for GravityBoard {
    const PROMPT: &'static str = "column";

    fn parse_move(input: &str) -> Option<usize> {
        input.trim().parse().ok()
    }
}

impl ParseMove for PlacementBoard {
    const PROMPT: &'static str = "row col";

    fn parse_move(input: &str) -> Option<Pos> {
        let mut parts = input.split_whitespace().map(str::parse::<usize>);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(row)), Some(Ok(col)), None) => Some(Pos::new(row, col)),
            _ => None,
        }
    }
}

/// Reads moves from stdin, showing the board before each prompt.
struct HumanPlayer<B> {
    mark: Mark,
    _board: PhantomData<B>,
}

impl<B> HumanPlayer<B> {
    fn new(mark: Mark) -> Self {
        Self {
            mark,
            _board: PhantomData,
        }
    }
}

impl<B: ParseMove + std::fmt::Display> Player<B> for HumanPlayer<B> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn get_move(&mut self, board: &B) -> Result<B::Move, GameError> {
        println!("\n{board}");
        let stdin = io::stdin();
        loop {
            print!("{} ({}): ", self.mark, B::PROMPT);
            io::stdout()
                .flush()
                .map_err(|e| GameError::Input(e.to_string()))?;

            let mut line = String::new();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .map_err(|e| GameError::Input(e.to_string()))?;
            if read == 0 {
                return Err(GameError::Input("end of input".to_string()));
            }
            match B::parse_move(&line) {
                Some(mv) => return Ok(mv),
                None => println!("Expected {}", B::PROMPT),
            }
        }
    }
}

fn make_player<B>(controller: Controller, mark: Mark, config: &GameConfig) -> Box<dyn Player<B>>
where
    B: ParseMove + Clone + std::fmt::Display + 'static,
{
    match controller {
        Controller::Human => Box::new(HumanPlayer::new(mark)),
        Controller::Ai => Box::new(AiPlayer::new(mark, config.search)),
    }
}

fn play<B>(board: B, arg: &PlayArg, config: &GameConfig) -> anyhow::Result<()>
where
    B: ParseMove + Clone + std::fmt::Display + 'static,
{
    let mut game = Game::new(
        board,
        make_player(arg.first, Mark::PlayerA, config),
        make_player(arg.second, Mark::PlayerB, config),
    )
    .with_max_illegal_attempts(config.max_illegal_attempts);

    let outcome = game.play_to_end().context("game aborted")?;
    println!("\n{}\nResult: {outcome}", game.board());
    Ok(())
}

fn apply_overrides(mut config: GameConfig, arg: &PlayArg) -> GameConfig {
    if let Some(depth) = arg.depth {
        config.search.max_depth = Some(depth);
    }
    if arg.alpha_beta {
        config.search.alpha_beta = true;
    }
    config
}

fn main() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = AppConfig::load_or_default(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;

    match &args.mode {
        Mode::ConnectFour(arg) => {
            let game_config = apply_overrides(config.connect_four, arg);
            let board = game_config.gravity_board().context("invalid board settings")?;
            play(board, arg, &game_config)
        }
        Mode::TicTacToe(arg) => {
            let game_config = apply_overrides(config.tic_tac_toe, arg);
            let board = game_config
                .placement_board()
                .context("invalid board settings")?;
            play(board, arg, &game_config)
        }
    }
}
