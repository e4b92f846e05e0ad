//! Core error types for quizroom-core.
//!
//! Session transitions never fail: redundant or out-of-order input is a
//! no-op. Errors only come from the outer edges (loading a question bank,
//! reading config, talking to the history store).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for quizroom-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// History store errors
    #[error("History error: {0}")]
    History(#[from] HistoryError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Question bank validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// History store errors.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// Failed to open the backing database
    #[error("Failed to open history at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("History migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("History database is locked")]
    Locked,

    /// Store refused the operation (offline, disabled, injected failure)
    #[error("History store unavailable: {0}")]
    Unavailable(String),

    /// A stored row could not be decoded
    #[error("Corrupt history row {row}: {message}")]
    Corrupt { row: i64, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not determine or create the data directory
    #[error("Data directory unavailable: {0}")]
    DataDir(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the config tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Question bank validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Bank has no questions
    #[error("Question bank is empty")]
    EmptyBank,

    /// Question prompt is blank
    #[error("Question {question} has a blank prompt")]
    BlankPrompt { question: usize },

    /// Multiple-choice question needs at least two options
    #[error("Question {question} has {len} option(s); at least 2 are required")]
    TooFewOptions { question: usize, len: usize },

    /// Correct answer index points past the option list
    #[error("Question {question}: answer index {index} out of bounds (options: {len})")]
    AnswerOutOfBounds {
        question: usize,
        index: usize,
        len: usize,
    },

    /// Unsupported bank file extension
    #[error("Unsupported question bank format: {0}")]
    UnsupportedFormat(String),
}

impl From<rusqlite::Error> for HistoryError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg) => {
                if e.code == rusqlite::ErrorCode::DatabaseBusy
                    || e.code == rusqlite::ErrorCode::DatabaseLocked
                {
                    HistoryError::Locked
                } else {
                    HistoryError::QueryFailed(err.to_string())
                }
            }
            _ => HistoryError::QueryFailed(err.to_string()),
        }
    }
}
