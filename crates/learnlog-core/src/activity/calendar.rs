//! Week and month views over the tracker.
//!
//! Views are built from tracker queries only; they hold copies, never
//! references into the status map.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::day::{CalendarDay, DayStatus};
use super::tracker::ActivityTracker;

/// First column of a calendar week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Column headers in display order.
    pub fn headers(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"],
            WeekStart::Monday => ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"],
        }
    }

    fn column_of(&self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }
}

fn short_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "SUN",
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
    }
}

/// The seven days of the week containing `day`.
///
/// Shorter only at the very ends of chrono's date range.
pub fn week_of(day: CalendarDay, start: WeekStart) -> Vec<CalendarDay> {
    let back = i64::from(start.column_of(day.weekday()));
    (0..7)
        .filter_map(|i| day.offset(i - back))
        .collect()
}

/// Number of days in a month, `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Every day of the month containing `day`.
pub fn month_of(day: CalendarDay) -> Vec<CalendarDay> {
    let date = day.date();
    let len = days_in_month(date.year(), date.month()).unwrap_or(0);
    (1..=len)
        .filter_map(|d| CalendarDay::from_ymd(date.year(), date.month(), d))
        .collect()
}

/// Same day of month in another month/year, clamped to that month's length.
///
/// An invalid month (outside 1..=12) or year leaves `day` unchanged.
pub fn jump_to_month(day: CalendarDay, month: u32, year: i32) -> CalendarDay {
    let Some(len) = days_in_month(year, month) else {
        return day;
    };
    let target = day.date().day().min(len);
    CalendarDay::from_ymd(year, month, target).unwrap_or(day)
}

/// Header text such as "October 2025".
pub fn header_title(day: CalendarDay) -> String {
    day.date().format("%B %Y").to_string()
}

/// One rendered day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub day: CalendarDay,
    pub weekday: String,
    pub day_of_month: u32,
    pub status: DayStatus,
    pub is_selected: bool,
    pub is_today: bool,
}

impl DayCell {
    fn build(tracker: &ActivityTracker, day: CalendarDay, today: CalendarDay) -> Self {
        Self {
            day,
            weekday: short_weekday(day.weekday()).to_string(),
            day_of_month: day.date().day(),
            status: tracker.status_of(day),
            is_selected: day == tracker.selected_day(),
            is_today: day == today,
        }
    }
}

/// The week around the selected day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekView {
    pub title: String,
    pub week_start: WeekStart,
    pub days: Vec<DayCell>,
    pub learned_count: usize,
    pub freezed_count: usize,
    pub freeze_usage: String,
    pub goal: String,
}

impl WeekView {
    pub fn build(tracker: &ActivityTracker, week_start: WeekStart) -> Self {
        let today = tracker.today();
        let selected = tracker.selected_day();
        Self {
            title: header_title(selected),
            week_start,
            days: week_of(selected, week_start)
                .into_iter()
                .map(|d| DayCell::build(tracker, d, today))
                .collect(),
            learned_count: tracker.learned_count(),
            freezed_count: tracker.freezed_count(),
            freeze_usage: tracker.freeze_usage_label(),
            goal: tracker.goal_label().to_string(),
        }
    }
}

/// The month around the selected day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub title: String,
    pub week_start: WeekStart,
    /// Blank cells before the first day in the first grid row.
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
    /// Tracked days within this month only.
    pub learned_in_month: usize,
    pub freezed_in_month: usize,
}

impl MonthView {
    pub fn build(tracker: &ActivityTracker, week_start: WeekStart) -> Self {
        let today = tracker.today();
        let selected = tracker.selected_day();
        let days: Vec<DayCell> = month_of(selected)
            .into_iter()
            .map(|d| DayCell::build(tracker, d, today))
            .collect();
        let leading_blanks = days
            .first()
            .map(|c| week_start.column_of(c.day.weekday()))
            .unwrap_or(0);
        let count = |status| days.iter().filter(|c| c.status == status).count();
        Self {
            title: header_title(selected),
            week_start,
            leading_blanks,
            learned_in_month: count(DayStatus::Learned),
            freezed_in_month: count(DayStatus::Freezed),
            days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::DayNormalizer;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn sunday_week_contains_day() {
        // 2025-10-22 is a Wednesday.
        let week = week_of(day(2025, 10, 22), WeekStart::Sunday);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], day(2025, 10, 19));
        assert_eq!(week[6], day(2025, 10, 25));
        assert_eq!(week[0].weekday(), Weekday::Sun);
    }

    #[test]
    fn monday_week_starts_on_monday() {
        let week = week_of(day(2025, 10, 19), WeekStart::Monday);
        assert_eq!(week[0], day(2025, 10, 13));
        assert_eq!(week[6], day(2025, 10, 19));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2025, 2), Some(28));
        assert_eq!(days_in_month(2025, 12), Some(31));
        assert_eq!(days_in_month(2025, 13), None);
        assert_eq!(month_of(day(2025, 4, 10)).len(), 30);
    }

    #[test]
    fn jump_clamps_day_of_month() {
        assert_eq!(jump_to_month(day(2025, 1, 31), 2, 2025), day(2025, 2, 28));
        assert_eq!(jump_to_month(day(2025, 1, 31), 2, 2024), day(2024, 2, 29));
        assert_eq!(jump_to_month(day(2025, 1, 15), 7, 2030), day(2030, 7, 15));
        assert_eq!(jump_to_month(day(2025, 1, 15), 0, 2030), day(2025, 1, 15));
    }

    #[test]
    fn header_uses_month_name() {
        assert_eq!(header_title(day(2025, 10, 1)), "October 2025");
    }

    #[test]
    fn week_view_reflects_tracker() {
        let mut t = ActivityTracker::starting_on(day(2025, 10, 20), DayNormalizer::Utc, 2, "Rust");
        t.log_learned();
        t.move_selection(1);
        t.log_freezed();

        let view = WeekView::build(&t, WeekStart::Sunday);
        assert_eq!(view.title, "October 2025");
        assert_eq!(view.days.len(), 7);
        assert_eq!(view.days[1].status, DayStatus::Learned);
        assert_eq!(view.days[1].weekday, "MON");
        assert_eq!(view.days[2].status, DayStatus::Freezed);
        assert!(view.days[2].is_selected);
        assert_eq!(view.learned_count, 1);
        assert_eq!(view.freeze_usage, "1 out of 2 freezes used");
    }

    #[test]
    fn month_view_counts_only_its_month() {
        let mut t = ActivityTracker::starting_on(day(2025, 9, 30), DayNormalizer::Utc, 2, "Rust");
        t.log_learned();
        t.move_selection(1);
        t.log_learned();

        let view = MonthView::build(&t, WeekStart::Sunday);
        assert_eq!(view.title, "October 2025");
        assert_eq!(view.days.len(), 31);
        // 2025-10-01 is a Wednesday.
        assert_eq!(view.leading_blanks, 3);
        assert_eq!(view.learned_in_month, 1);
        assert_eq!(view.freezed_in_month, 0);
    }
}
