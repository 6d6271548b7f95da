use std::path::Path;

use ratatui::style::Color;

use crate::error::ConfigError;
use crate::game::{CONNECT, DEFAULT_COLS, DEFAULT_ROWS};

/// Smallest board dimension that still fits a winning line.
const MIN_DIMENSION: usize = CONNECT;
/// Cap that keeps the board renderable in a terminal.
const MAX_DIMENSION: usize = 64;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

/// Board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

/// Display settings for the two contestants.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerConfig,
    pub two: PlayerConfig,
}

/// Display settings for a single contestant.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Piece color, parsed as a terminal color name such as "red",
    /// "cyan", or "#ff8800".
    pub color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            players: PlayersConfig::default(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PlayerConfig {
                color: "red".to_string(),
            },
            two: PlayerConfig {
                color: "yellow".to_string(),
            },
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            color: "white".to_string(),
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
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < MIN_DIMENSION || self.board.rows > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows must be between {MIN_DIMENSION} and {MAX_DIMENSION}"
            )));
        }
        if self.board.cols < MIN_DIMENSION || self.board.cols > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.cols must be between {MIN_DIMENSION} and {MAX_DIMENSION}"
            )));
        }
        if self.players.one.color.parse::<Color>().is_err() {
            return Err(ConfigError::Validation(format!(
                "players.one.color '{}' is not a recognized color",
                self.players.one.color
            )));
        }
        if self.players.two.color.parse::<Color>().is_err() {
            return Err(ConfigError::Validation(format!(
                "players.two.color '{}' is not a recognized color",
                self.players.two.color
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
