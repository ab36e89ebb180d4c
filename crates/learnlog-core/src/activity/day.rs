//! Calendar day keys and per-day status.
//!
//! Every date handed to the tracker goes through a [`DayNormalizer`] first, so
//! two instants on the same calendar day always map to the same key.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Status recorded for a single calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    #[default]
    None,
    Learned,
    Freezed,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::None => "none",
            DayStatus::Learned => "learned",
            DayStatus::Freezed => "freezed",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date with the time of day stripped. Used as the status map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a day from year/month/day, `None` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Shift by a signed number of days. `None` when the result leaves
    /// chrono's representable range.
    pub fn offset(&self, days: i64) -> Option<Self> {
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        };
        shifted.map(Self)
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| ValidationError::InvalidValue {
                field: "day".into(),
                message: format!("'{s}' is not a YYYY-MM-DD date: {e}"),
            })
    }
}

/// The fixed zone in which instants are cut down to calendar days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayNormalizer {
    #[default]
    Local,
    Utc,
}

impl DayNormalizer {
    /// Strip the time of day from `instant` in this normalizer's zone.
    pub fn normalize<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> CalendarDay {
        let date = match self {
            DayNormalizer::Local => instant.with_timezone(&Local).date_naive(),
            DayNormalizer::Utc => instant.with_timezone(&Utc).date_naive(),
        };
        CalendarDay(date)
    }

    pub fn today(&self) -> CalendarDay {
        self.normalize(&Utc::now())
    }
}
