use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::{CalendarDay, DayStatus, GoalDuration};

/// Every state change of the tracker produces an Event.
/// The host re-reads the tracker queries (or persists) when it sees one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    DaySelected {
        day: CalendarDay,
        status: DayStatus,
        at: DateTime<Utc>,
    },
    DayLearned {
        day: CalendarDay,
        /// Status the day had before it was logged.
        previous: DayStatus,
        at: DateTime<Utc>,
    },
    DayFreezed {
        day: CalendarDay,
        freezes_used: u32,
        remaining: u32,
        at: DateTime<Utc>,
    },
    /// Goal replaced; all tracked days were dropped.
    GoalChanged {
        goal: String,
        duration: GoalDuration,
        cleared_days: usize,
        at: DateTime<Utc>,
    },
    /// Full read-only view of the tracker, for rendering.
    StateSnapshot {
        selected_day: CalendarDay,
        selected_status: DayStatus,
        goal: String,
        duration: GoalDuration,
        learned_count: usize,
        freezed_count: usize,
        freezes_used: u32,
        max_freezes: u32,
        remaining_freezes: u32,
        at: DateTime<Utc>,
    },
}
