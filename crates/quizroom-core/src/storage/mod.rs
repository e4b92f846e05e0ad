mod config;

pub use config::{Config, HistoryConfig, QuizConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the directory holding config and history.
///
/// `QUIZROOM_DATA_DIR` wins when set. Otherwise `~/.config/quizroom[-dev]/`,
/// with the `-dev` suffix when `QUIZROOM_ENV=dev`.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("QUIZROOM_DATA_DIR") {
        Some(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("QUIZROOM_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("quizroom-dev")
            } else {
                base_dir.join("quizroom")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
