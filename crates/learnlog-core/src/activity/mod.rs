mod calendar;
mod day;
mod goal;
mod tracker;

pub use calendar::{
    days_in_month, header_title, jump_to_month, month_of, week_of, DayCell, MonthView, WeekStart,
    WeekView,
};
pub use day::{CalendarDay, DayNormalizer, DayStatus};
pub use goal::GoalDuration;
pub use tracker::{ActivityState, ActivityTracker, FreezeBlocked, DEFAULT_GOAL, DEFAULT_MAX_FREEZES};
