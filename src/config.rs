use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;

use crate::error::ConfigError;
use crate::game::{DEFAULT_HEIGHT, DEFAULT_WIDTH, WIN_LENGTH};

/// Widest board the digit keys can address.
pub const MAX_WIDTH: usize = 9;

/// Tallest board that still fits a typical terminal.
pub const MAX_HEIGHT: usize = 16;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
    pub computer: ComputerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Piece colors, as ratatui color names (`"red"`, `"light-blue"`) or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one_color: String,
    pub two_color: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one_color: "red".into(),
            two_color: "yellow".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    /// Show the computer player's number after Player 2 moves
    pub enabled: bool,
}

impl Default for ComputerConfig {
    fn default() -> Self {
        ComputerConfig { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence
    pub filter: String,
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".into(),
            file: PathBuf::from("connect_four.log"),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = read_file(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file without validating it, or `None` if the file does
    /// not exist. Callers apply their overrides and then call [`validate`].
    ///
    /// [`validate`]: AppConfig::validate
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(toml::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height < WIN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board.height must be >= {WIN_LENGTH}"
            )));
        }
        if self.board.height > MAX_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "board.height must be <= {MAX_HEIGHT}"
            )));
        }
        if self.board.width < WIN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board.width must be >= {WIN_LENGTH}"
            )));
        }
        if self.board.width > MAX_WIDTH {
            return Err(ConfigError::Validation(format!(
                "board.width must be <= {MAX_WIDTH}"
            )));
        }

        let (one, two) = self.player_colors()?;
        if one == two {
            return Err(ConfigError::Validation(
                "players.one_color and players.two_color must differ".into(),
            ));
        }

        if tracing_subscriber::EnvFilter::try_new(&self.logging.filter).is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.filter '{}' is not a valid filter directive",
                self.logging.filter
            )));
        }

        Ok(())
    }

    /// Parsed piece colors for Player 1 and Player 2.
    pub fn player_colors(&self) -> Result<(Color, Color), ConfigError> {
        Ok((
            parse_color("players.one_color", &self.players.one_color)?,
            parse_color("players.two_color", &self.players.two_color)?,
        ))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::Validation(format!("{key} '{value}' is not a color")))
}
