//! Activity tracking engine.
//!
//! Owns the day→status map, the selected day, the freeze budget and the goal.
//! Presentation code reads through the query methods and mutates only through
//! the commands below; there are no public field writes.
//!
//! ## Per-day transitions
//!
//! ```text
//! none -> learned
//! none -> freezed -> learned   (the spent freeze is not refunded)
//! freezed -> freezed           (no-op on the counter)
//! ```
//!
//! Commands never fail. A command that would break a rule (freezing a learned
//! day, freezing past the budget) leaves the state untouched and returns `None`.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;

use super::day::{CalendarDay, DayNormalizer, DayStatus};
use super::goal::GoalDuration;
use crate::error::ValidationError;
use crate::events::Event;
use crate::storage::snapshot::{ActivitySnapshot, DayRecord};

/// Freeze tokens available per goal unless configured otherwise.
pub const DEFAULT_MAX_FREEZES: u32 = 2;

/// Goal text for a fresh tracker.
pub const DEFAULT_GOAL: &str = "Learning Swift";

/// Why the freeze action is unavailable for the selected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FreezeBlocked {
    #[error("day is already logged as learned")]
    AlreadyLearned,
    #[error("all freezes have been used")]
    BudgetExhausted,
}

/// State owned by the tracker for the lifetime of a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityState {
    /// Only non-`none` statuses are stored.
    statuses: BTreeMap<CalendarDay, DayStatus>,
    selected_day: CalendarDay,
    freezes_used: u32,
    max_freezes: u32,
    goal: String,
    duration: GoalDuration,
}

impl ActivityState {
    pub fn new(today: CalendarDay, max_freezes: u32, goal: impl Into<String>) -> Self {
        Self {
            statuses: BTreeMap::new(),
            selected_day: today,
            freezes_used: 0,
            max_freezes,
            goal: goal.into(),
            duration: GoalDuration::default(),
        }
    }
}

/// The activity tracking engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityTracker {
    state: ActivityState,
    normalizer: DayNormalizer,
}

impl Default for ActivityTracker {
    fn default() -> Self {
        Self::new(DayNormalizer::default(), DEFAULT_MAX_FREEZES, DEFAULT_GOAL)
    }
}

impl ActivityTracker {
    /// Fresh tracker with today selected, no tracked days and no freezes used.
    pub fn new(normalizer: DayNormalizer, max_freezes: u32, goal: impl Into<String>) -> Self {
        Self::starting_on(normalizer.today(), normalizer, max_freezes, goal)
    }

    /// Fresh tracker with an explicit initial selection.
    pub fn starting_on(
        day: CalendarDay,
        normalizer: DayNormalizer,
        max_freezes: u32,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            state: ActivityState::new(day, max_freezes, goal),
            normalizer,
        }
    }

    /// Same tracker with a different goal duration.
    pub fn with_duration(mut self, duration: GoalDuration) -> Self {
        self.state.duration = duration;
        self
    }

    /// Rebuild a tracker from a persisted snapshot. The selection always
    /// starts on today; only tracked days, goal and freezes carry over.
    ///
    /// # Errors
    /// Returns an error if a day is listed twice, or if `freezes_used` is
    /// below the number of freezed days or above `max_freezes`.
    pub fn restore(
        snapshot: ActivitySnapshot,
        normalizer: DayNormalizer,
        max_freezes: u32,
    ) -> Result<Self, ValidationError> {
        let mut statuses = BTreeMap::new();
        for record in snapshot.days {
            if record.status == DayStatus::None {
                continue;
            }
            if statuses.insert(record.day, record.status).is_some() {
                return Err(ValidationError::DuplicateDay(record.day.to_string()));
            }
        }

        let freezed_days = statuses
            .values()
            .filter(|s| **s == DayStatus::Freezed)
            .count();
        let used = snapshot.freezes_used;
        if (used as usize) < freezed_days || used > max_freezes {
            tracing::warn!(used, freezed_days, max_freezes, "rejecting snapshot freeze counter");
            return Err(ValidationError::FreezeCounterOutOfRange {
                used,
                freezed_days,
                max: max_freezes,
            });
        }

        Ok(Self {
            state: ActivityState {
                statuses,
                selected_day: normalizer.today(),
                freezes_used: used,
                max_freezes,
                goal: snapshot.goal,
                duration: snapshot.duration,
            },
            normalizer,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn today(&self) -> CalendarDay {
        self.normalizer.today()
    }

    pub fn selected_day(&self) -> CalendarDay {
        self.state.selected_day
    }

    pub fn goal(&self) -> &str {
        &self.state.goal
    }

    pub fn duration(&self) -> GoalDuration {
        self.state.duration
    }

    /// Goal text for display; a placeholder when the goal is empty.
    pub fn goal_label(&self) -> &str {
        if self.state.goal.trim().is_empty() {
            "Your goal"
        } else {
            &self.state.goal
        }
    }

    pub fn freezes_used(&self) -> u32 {
        self.state.freezes_used
    }

    pub fn max_freezes(&self) -> u32 {
        self.state.max_freezes
    }

    pub fn remaining_freezes(&self) -> u32 {
        self.state.max_freezes.saturating_sub(self.state.freezes_used)
    }

    /// e.g. "1 out of 2 freezes used".
    pub fn freeze_usage_label(&self) -> String {
        format!(
            "{} out of {} freezes used",
            self.state.freezes_used, self.state.max_freezes
        )
    }

    pub fn status_of(&self, day: CalendarDay) -> DayStatus {
        self.state.statuses.get(&day).copied().unwrap_or_default()
    }

    pub fn selected_status(&self) -> DayStatus {
        self.status_of(self.state.selected_day)
    }

    pub fn learned_count(&self) -> usize {
        self.count(DayStatus::Learned)
    }

    pub fn freezed_count(&self) -> usize {
        self.count(DayStatus::Freezed)
    }

    /// Tracked days in calendar order.
    pub fn tracked_days(&self) -> impl Iterator<Item = (CalendarDay, DayStatus)> + '_ {
        self.state.statuses.iter().map(|(d, s)| (*d, *s))
    }

    /// Whether the freeze action is available for the selected day.
    ///
    /// An already freezed day is always available: freezing it again is a
    /// no-op, never a budget violation.
    pub fn freeze_availability(&self) -> Result<(), FreezeBlocked> {
        match self.selected_status() {
            DayStatus::Learned => Err(FreezeBlocked::AlreadyLearned),
            DayStatus::Freezed => Ok(()),
            DayStatus::None if self.state.freezes_used >= self.state.max_freezes => {
                Err(FreezeBlocked::BudgetExhausted)
            }
            DayStatus::None => Ok(()),
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot_event(&self) -> Event {
        Event::StateSnapshot {
            selected_day: self.state.selected_day,
            selected_status: self.selected_status(),
            goal: self.state.goal.clone(),
            duration: self.state.duration,
            learned_count: self.learned_count(),
            freezed_count: self.freezed_count(),
            freezes_used: self.state.freezes_used,
            max_freezes: self.state.max_freezes,
            remaining_freezes: self.remaining_freezes(),
            at: Utc::now(),
        }
    }

    /// Persistable form of the state.
    pub fn snapshot(&self) -> ActivitySnapshot {
        ActivitySnapshot {
            goal: self.state.goal.clone(),
            duration: self.state.duration,
            freezes_used: self.state.freezes_used,
            days: self
                .tracked_days()
                .map(|(day, status)| DayRecord { day, status })
                .collect(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn select_day(&mut self, day: CalendarDay) -> Event {
        self.state.selected_day = day;
        tracing::debug!(%day, "day selected");
        Event::DaySelected {
            day,
            status: self.status_of(day),
            at: Utc::now(),
        }
    }

    /// Select the calendar day an instant falls on.
    pub fn select_instant<Tz: TimeZone>(&mut self, instant: &DateTime<Tz>) -> Event {
        let day = self.normalizer.normalize(instant);
        self.select_day(day)
    }

    /// Move the selection by a signed number of days (±7 for week paging).
    /// Returns `None` and keeps the selection if the target date is out of range.
    pub fn move_selection(&mut self, by_days: i64) -> Option<Event> {
        let target = self.state.selected_day.offset(by_days)?;
        Some(self.select_day(target))
    }

    /// Mark the selected day as learned. `None` if it already was.
    pub fn log_learned(&mut self) -> Option<Event> {
        let day = self.state.selected_day;
        let previous = self.status_of(day);
        if previous == DayStatus::Learned {
            return None;
        }
        // A freeze spent on this day stays spent.
        self.state.statuses.insert(day, DayStatus::Learned);
        tracing::debug!(%day, %previous, "day logged as learned");
        Some(Event::DayLearned {
            day,
            previous,
            at: Utc::now(),
        })
    }

    /// Mark the selected day as freezed, spending one freeze.
    ///
    /// `None` when the day is learned, when the budget is spent, or when the
    /// day was already freezed.
    pub fn log_freezed(&mut self) -> Option<Event> {
        let day = self.state.selected_day;
        if let Err(blocked) = self.freeze_availability() {
            tracing::debug!(%day, reason = %blocked, "freeze rejected");
            return None;
        }
        if self.status_of(day) == DayStatus::Freezed {
            return None;
        }

        self.state.freezes_used += 1;
        self.state.statuses.insert(day, DayStatus::Freezed);
        tracing::debug!(%day, used = self.state.freezes_used, "day logged as freezed");
        Some(Event::DayFreezed {
            day,
            freezes_used: self.state.freezes_used,
            remaining: self.remaining_freezes(),
            at: Utc::now(),
        })
    }

    /// Replace the goal, keeping its duration. Progress belongs to the old
    /// goal, so every tracked day and every spent freeze is dropped.
    pub fn set_goal(&mut self, text: impl Into<String>) -> Event {
        let duration = self.state.duration;
        self.set_goal_for(text, duration)
    }

    /// Replace the goal and its duration, with the same progress reset as
    /// [`set_goal`](Self::set_goal).
    pub fn set_goal_for(&mut self, text: impl Into<String>, duration: GoalDuration) -> Event {
        let goal = text.into();
        let cleared_days = self.state.statuses.len();
        self.state.goal = goal.clone();
        self.state.duration = duration;
        self.state.statuses.clear();
        self.state.freezes_used = 0;
        tracing::info!(goal = %goal, %duration, cleared_days, "goal changed, progress reset");
        Event::GoalChanged {
            goal,
            duration,
            cleared_days,
            at: Utc::now(),
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn count(&self, status: DayStatus) -> usize {
        self.state.statuses.values().filter(|s| **s == status).count()
    }
}
