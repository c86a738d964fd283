use std::path::PathBuf;

use crate::ENCODED_LENGTH;

/// Errors produced when decoding the external board encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedBoardError {
    #[error("board encoding must be {} characters long, found {found}", ENCODED_LENGTH)]
    WrongLength { found: usize },

    #[error("invalid cell '{found}' at position {index}, expected one of 0, 1, 2")]
    InvalidCell { index: usize, found: char },
}

/// Errors returned by the move service.
#[derive(Debug, thiserror::Error)]
pub enum MoveError {
    #[error("invalid board configuration: {0}")]
    InvalidBoard(#[from] MalformedBoardError),

    #[error("search returned no move for a playable board")]
    NoMoveFound,

    #[error("failed to record game result: {0:#}")]
    Record(anyhow::Error),
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
    Parse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
