//! Week and month views.

use learnlog_core::activity::{jump_to_month, DayCell};
use learnlog_core::{DayStatus, MonthView, WeekView};

use super::session::Session;

fn cell(c: &DayCell) -> String {
    let mark = match c.status {
        DayStatus::Learned => 'L',
        DayStatus::Freezed => 'F',
        DayStatus::None if c.is_today => '.',
        DayStatus::None => ' ',
    };
    if c.is_selected {
        format!("[{:>2}{mark}]", c.day_of_month)
    } else {
        format!(" {:>2}{mark} ", c.day_of_month)
    }
}

fn header_row(headers: [&str; 7]) -> String {
    headers
        .iter()
        .map(|h| format!(" {h} "))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_week(view: &WeekView) {
    println!("{}", view.title);
    println!("{}", header_row(view.week_start.headers()));
    let row: Vec<String> = view.days.iter().map(cell).collect();
    println!("{}", row.join(" "));
    println!();
    println!("Days learned: {}", view.learned_count);
    println!("Days freezed: {}", view.freezed_count);
    println!("{}", view.freeze_usage);
    println!("Goal: {}", view.goal);
}

fn print_month(view: &MonthView) {
    println!("{}", view.title);
    println!("{}", header_row(view.week_start.headers()));

    let mut cells: Vec<String> = (0..view.leading_blanks).map(|_| " ".repeat(5)).collect();
    cells.extend(view.days.iter().map(cell));
    for row in cells.chunks(7) {
        println!("{}", row.join(" "));
    }
    println!();
    println!(
        "Learned this month: {}  Freezed this month: {}",
        view.learned_in_month, view.freezed_in_month
    );
}

pub fn week(
    day: Option<&str>,
    next: bool,
    prev: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open(day)?;
    let step = match (next, prev) {
        (true, _) => Some(7),
        (_, true) => Some(-7),
        _ => None,
    };
    if let Some(days) = step {
        if session.tracker.move_selection(days).is_none() {
            return Err("cannot page past the end of the calendar".into());
        }
    }

    let view = WeekView::build(&session.tracker, session.config.calendar.week_start);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_week(&view);
    }
    Ok(())
}

pub fn month(day: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open(day)?;
    show_month(&session, json)
}

fn show_month(session: &Session, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let view = MonthView::build(&session.tracker, session.config.calendar.week_start);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_month(&view);
    }
    Ok(())
}

/// Show another month, keeping the selected day of month where it exists.
pub fn jump(
    day: Option<&str>,
    month: u32,
    year: i32,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !(1..=12).contains(&month) {
        return Err(format!("month must be between 1 and 12, got {month}").into());
    }
    let mut session = Session::open(day)?;
    let target = jump_to_month(session.tracker.selected_day(), month, year);
    session.tracker.select_day(target);
    show_month(&session, json)
}
