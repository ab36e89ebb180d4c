//! JSON snapshot of the tracker state.
//!
//! The engine never touches the disk; the host loads a snapshot at startup
//! and writes one back after every mutating command.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::activity::{CalendarDay, DayStatus, GoalDuration};
use crate::error::Result;

const SNAPSHOT_FILE: &str = "activity.json";

/// One tracked day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: CalendarDay,
    pub status: DayStatus,
}

/// Persisted form of the tracker state.
///
/// The selected day is not stored; a restore always starts on today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySnapshot {
    pub goal: String,
    #[serde(default)]
    pub duration: GoalDuration,
    #[serde(default)]
    pub freezes_used: u32,
    #[serde(default)]
    pub days: Vec<DayRecord>,
}

/// File-backed snapshot storage.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Store at `<data_dir>/activity.json`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self> {
        Ok(Self::at(data_dir()?.join(SNAPSHOT_FILE)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot, `None` if nothing has been saved yet.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<ActivitySnapshot>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let snapshot = serde_json::from_str(&content)?;
        Ok(Some(snapshot))
    }

    /// Write the snapshot, replacing the previous one.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, snapshot: &ActivitySnapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), days = snapshot.days.len(), "snapshot saved");
        Ok(())
    }

    /// Delete the snapshot. Returns whether one existed.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn discard(&self) -> Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
