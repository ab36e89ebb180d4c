//! # learnlog Core Library
//!
//! Core logic for learnlog, a single-screen learning habit tracker. Every
//! operation is available through the standalone CLI; any GUI is meant to be
//! a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Activity Tracker**: a synchronous engine mapping calendar days to a
//!   status (`learned`, `freezed`), enforcing the freeze budget and resetting
//!   progress when the goal changes
//! - **Calendar views**: week and month grids built from tracker queries
//! - **Storage**: TOML configuration and a JSON snapshot the host writes after
//!   each mutating command; the engine itself never touches the disk
//!
//! ## Key Components
//!
//! - [`ActivityTracker`]: the tracking engine
//! - [`CalendarDay`]: normalized day key
//! - [`Config`]: application configuration management
//! - [`SnapshotStore`]: snapshot persistence for hosts

pub mod activity;
pub mod error;
pub mod events;
pub mod storage;

pub use activity::{
    ActivityTracker, CalendarDay, DayNormalizer, DayStatus, FreezeBlocked, GoalDuration, MonthView,
    WeekStart, WeekView,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use storage::{ActivitySnapshot, Config, SnapshotStore};
