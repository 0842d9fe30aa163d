use std::path::Path;

use log::warn;

use crate::board::gravity::{CONNECT_FOUR_COLS, CONNECT_FOUR_ROWS, CONNECT_FOUR_RUN};
use crate::board::placement::TIC_TAC_TOE_SIZE;
use crate::board::{GravityBoard, PlacementBoard};
use crate::engine::AIEngine;
use crate::error::{BoardError, ConfigError};
use crate::eval::EvalPolicy;
use crate::game::DEFAULT_MAX_ILLEGAL_ATTEMPTS;
use crate::search::SearchConfig;

/// Default Connect Four search depth below the root
pub const CONNECT_FOUR_DEPTH: u32 = 6;

/// Top-level application configuration, loadable from TOML.
///
/// Keys missing from a section keep that game's defaults.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RawAppConfig")]
pub struct AppConfig {
    pub connect_four: GameConfig,
    pub tic_tac_toe: GameConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            connect_four: GameConfig::connect_four(),
            tic_tac_toe: GameConfig::tic_tac_toe(),
        }
    }
}

/// Board shape, search settings and retry budget for one game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
    pub search: SearchConfig,
    pub max_illegal_attempts: u32,
}

impl GameConfig {
    pub fn connect_four() -> Self {
        GameConfig {
            rows: CONNECT_FOUR_ROWS,
            cols: CONNECT_FOUR_COLS,
            win_length: CONNECT_FOUR_RUN,
            search: SearchConfig::depth_limited(CONNECT_FOUR_DEPTH),
            max_illegal_attempts: DEFAULT_MAX_ILLEGAL_ATTEMPTS,
        }
    }

    pub fn tic_tac_toe() -> Self {
        GameConfig {
            rows: TIC_TAC_TOE_SIZE,
            cols: TIC_TAC_TOE_SIZE,
            win_length: TIC_TAC_TOE_SIZE,
            search: SearchConfig::exhaustive(),
            max_illegal_attempts: DEFAULT_MAX_ILLEGAL_ATTEMPTS,
        }
    }

    /// Empty gravity board with this shape.
    pub fn gravity_board(&self) -> Result<GravityBoard, BoardError> {
        GravityBoard::new(self.rows, self.cols, self.win_length)
    }

    /// Empty placement board with this shape.
    pub fn placement_board(&self) -> Result<PlacementBoard, BoardError> {
        PlacementBoard::new(self.rows, self.cols, self.win_length)
    }

    pub fn engine(&self) -> AIEngine {
        AIEngine::new(self.search)
    }

    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Validation(format!(
                "{section}.rows and {section}.cols must be >= 1"
            )));
        }
        if self.win_length < 2 {
            return Err(ConfigError::Validation(format!(
                "{section}.win_length must be >= 2"
            )));
        }
        if self.win_length > self.rows.max(self.cols) {
            return Err(ConfigError::Validation(format!(
                "{section}.win_length must fit the board ({}x{})",
                self.rows, self.cols
            )));
        }
        if self.max_illegal_attempts == 0 {
            return Err(ConfigError::Validation(format!(
                "{section}.max_illegal_attempts must be >= 1"
            )));
        }
        Ok(())
    }
}

/// Config file as written: every key optional.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawAppConfig {
    connect_four: GameSection,
    tic_tac_toe: GameSection,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GameSection {
    rows: Option<usize>,
    cols: Option<usize>,
    win_length: Option<usize>,
    max_illegal_attempts: Option<u32>,
    search: SearchSection,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SearchSection {
    max_depth: Option<u32>,
    policy: Option<EvalPolicy>,
    alpha_beta: Option<bool>,
}

impl GameSection {
    fn apply(self, mut base: GameConfig) -> GameConfig {
        if let Some(rows) = self.rows {
            base.rows = rows;
        }
        if let Some(cols) = self.cols {
            base.cols = cols;
        }
        if let Some(win_length) = self.win_length {
            base.win_length = win_length;
        }
        if let Some(attempts) = self.max_illegal_attempts {
            base.max_illegal_attempts = attempts;
        }
        if let Some(depth) = self.search.max_depth {
            base.search.max_depth = Some(depth);
        }
        if let Some(policy) = self.search.policy {
            base.search.policy = policy;
        }
        if let Some(alpha_beta) = self.search.alpha_beta {
            base.search.alpha_beta = alpha_beta;
        }
        base
    }
}

impl From<RawAppConfig> for AppConfig {
    fn from(raw: RawAppConfig) -> Self {
        AppConfig {
            connect_four: raw.connect_four.apply(GameConfig::connect_four()),
            tic_tac_toe: raw.tic_tac_toe.apply(GameConfig::tic_tac_toe()),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.connect_four.validate("connect_four")?;
        self.tic_tac_toe.validate("tic_tac_toe")?;
        Ok(())
    }
}
