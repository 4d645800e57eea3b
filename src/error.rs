//! Error types for the game engine and its configuration

use std::path::PathBuf;

/// Errors reported by the board and the session controller.
///
/// All of them are recoverable: an operation that fails leaves the
/// session exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("position ({x}, {y}) is outside the board")]
    OutOfBounds { x: i64, y: i64 },

    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: usize, y: usize },

    #[error("no game in progress")]
    GameNotActive,

    #[error("nothing to undo")]
    EmptyHistory,

    #[error("invalid dimensions {height}x{width} with run length {run_length}")]
    InvalidDimensions {
        height: i64,
        width: i64,
        run_length: i64,
    },
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
