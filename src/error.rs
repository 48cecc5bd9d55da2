//! Error types for history, configuration, and scripted runs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by history lookups.
///
/// `undo` on an empty history is not an error; it returns `None`.
/// `NothingToUndo` only comes from the strict `try_undo` variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history is empty")]
    EmptyHistory,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("snapshot index {index} out of range (history has {len})")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid time_format '{0}'")]
    InvalidTimeFormat(String),
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("unknown operation '{0}' (expected set:<value>, backup, undo, restore:<index>, oldest, history)")]
    UnknownOp(String),

    #[error("operation '{0}' needs an argument")]
    MissingArgument(String),

    #[error("invalid snapshot index '{0}'")]
    InvalidIndex(String),

    #[error("failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    History(#[from] HistoryError),
}
