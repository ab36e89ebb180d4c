//! TOML-based application configuration.
//!
//! Stores:
//! - The freeze budget, goal and goal duration a fresh tracker starts with
//! - The calendar zone used to cut instants down to days
//! - Which weekday starts a week in the calendar views
//!
//! Configuration is stored at `~/.config/learnlog/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::activity::{
    ActivityTracker, DayNormalizer, GoalDuration, WeekStart, DEFAULT_GOAL, DEFAULT_MAX_FREEZES,
};
use crate::error::{ConfigError, CoreError, Result};
use crate::storage::ActivitySnapshot;

/// Tracker defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_max_freezes")]
    pub max_freezes: u32,
    #[serde(default = "default_goal")]
    pub default_goal: String,
    #[serde(default)]
    pub default_duration: GoalDuration,
}

/// Calendar behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub timezone: DayNormalizer,
    #[serde(default)]
    pub week_start: WeekStart,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/learnlog/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

fn default_max_freezes() -> u32 {
    DEFAULT_MAX_FREEZES
}
fn default_goal() -> String {
    DEFAULT_GOAL.into()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_freezes: default_max_freezes(),
            default_goal: default_goal(),
            default_duration: GoalDuration::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;
            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => {
                    let n = value
                        .parse::<u64>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                    serde_json::Value::Number(n.into())
                }
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("cannot set a whole section".into()));
                }
                _ => serde_json::Value::String(value.into()),
            };
            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory, writing defaults if no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// default config cannot be written.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                CoreError::Config(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Update a value by dot-separated key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit the
    /// field (e.g. `calendar.week_start = "friday"`).
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// A fresh tracker seeded with today and the configured defaults.
    pub fn tracker(&self) -> ActivityTracker {
        ActivityTracker::new(
            self.calendar.timezone,
            self.tracker.max_freezes,
            self.tracker.default_goal.clone(),
        )
        .with_duration(self.tracker.default_duration)
    }

    /// Rebuild a tracker from a saved snapshot under this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot is inconsistent with the configured
    /// freeze budget.
    pub fn restore_tracker(&self, snapshot: ActivitySnapshot) -> Result<ActivityTracker> {
        let tracker =
            ActivityTracker::restore(snapshot, self.calendar.timezone, self.tracker.max_freezes)?;
        Ok(tracker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.tracker.max_freezes, 2);
        assert_eq!(parsed.tracker.default_goal, "Learning Swift");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[calendar]\ntimezone = \"utc\"\n").unwrap();
        assert_eq!(parsed.calendar.timezone, DayNormalizer::Utc);
        assert_eq!(parsed.calendar.week_start, WeekStart::Sunday);
        assert_eq!(parsed.tracker.max_freezes, 2);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("tracker.max_freezes").as_deref(), Some("2"));
        assert_eq!(cfg.get("calendar.week_start").as_deref(), Some("sunday"));
        assert_eq!(cfg.get("calendar.timezone").as_deref(), Some("local"));
        assert_eq!(cfg.get("tracker.default_duration").as_deref(), Some("week"));
        assert!(cfg.get("tracker").is_none());
        assert!(cfg.get("tracker.missing_key").is_none());
    }

    #[test]
    fn apply_updates_number_and_string() {
        let mut cfg = Config::default();
        cfg.apply("tracker.max_freezes", "5").unwrap();
        cfg.apply("tracker.default_goal", "Learning Rust").unwrap();
        cfg.apply("calendar.week_start", "monday").unwrap();
        assert_eq!(cfg.tracker.max_freezes, 5);
        assert_eq!(cfg.tracker.default_goal, "Learning Rust");
        assert_eq!(cfg.calendar.week_start, WeekStart::Monday);
    }

    #[test]
    fn apply_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.apply("tracker.nonexistent", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(cfg.apply("", "1").is_err());
    }

    #[test]
    fn apply_rejects_invalid_values() {
        let mut cfg = Config::default();
        assert!(cfg.apply("tracker.max_freezes", "-1").is_err());
        assert!(cfg.apply("calendar.week_start", "friday").is_err());
        assert!(cfg.apply("calendar", "x").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_missing_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn load_from_invalid_toml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tracker\nmax_freezes = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn tracker_uses_configured_budget() {
        let mut cfg = Config::default();
        cfg.apply("tracker.max_freezes", "3").unwrap();
        let t = cfg.tracker();
        assert_eq!(t.max_freezes(), 3);
        assert_eq!(t.remaining_freezes(), 3);
        assert_eq!(t.goal(), "Learning Swift");
        assert_eq!(t.duration(), GoalDuration::Week);
    }

    #[test]
    fn default_duration_is_configurable() {
        let mut cfg = Config::default();
        cfg.apply("tracker.default_duration", "year").unwrap();
        assert_eq!(cfg.tracker.default_duration, GoalDuration::Year);
        assert_eq!(cfg.tracker().duration(), GoalDuration::Year);
        assert!(cfg.apply("tracker.default_duration", "decade").is_err());
        assert_eq!(cfg.tracker.default_duration, GoalDuration::Year);

        let parsed: Config = toml::from_str("[tracker]\ndefault_duration = \"month\"\n").unwrap();
        assert_eq!(parsed.tracker.default_duration, GoalDuration::Month);
    }
}
