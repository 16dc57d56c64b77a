use std::path::PathBuf;

use crate::game::GameResult;

/// Moves the caller must not make. A full column is not one of these; see
/// [`crate::game::MoveOutcome::ColumnFull`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("game is already over ({result})")]
    GameAlreadyOver { result: GameResult },
}

/// Errors that can occur when creating a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {height}x{width}: both must be positive and the grid must fit in memory")]
    InvalidDimensions { height: usize, width: usize },
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

    #[error(transparent)]
    Board(#[from] BoardError),
}
