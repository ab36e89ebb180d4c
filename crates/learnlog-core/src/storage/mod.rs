mod config;
pub mod snapshot;

pub use config::{CalendarConfig, Config, TrackerConfig};
pub use snapshot::{ActivitySnapshot, DayRecord, SnapshotStore};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/learnlog[-dev]/` based on LEARNLOG_ENV.
///
/// Set LEARNLOG_ENV=dev to use the development data directory, or
/// LEARNLOG_DATA_DIR to point somewhere else entirely.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("LEARNLOG_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("LEARNLOG_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("learnlog-dev")
            } else {
                base_dir.join("learnlog")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
