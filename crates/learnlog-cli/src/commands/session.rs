//! Loads the tracker for one CLI invocation and writes it back afterwards.
//!
//! Each invocation is a fresh screen: the selection starts on today, or on
//! the day passed with `--day`. Only tracked days, goal and freezes persist.

use learnlog_core::{ActivityTracker, CalendarDay, Config, Event, SnapshotStore};

pub struct Session {
    pub config: Config,
    pub tracker: ActivityTracker,
    store: SnapshotStore,
}

impl Session {
    /// Restore the saved tracker, or start a fresh one, and select `day`.
    pub fn open(day: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let config = Config::load()?;
        let store = SnapshotStore::open()?;
        let mut tracker = match store.load()? {
            Some(snapshot) => config.restore_tracker(snapshot)?,
            None => {
                tracing::debug!(path = %store.path().display(), "no snapshot, starting fresh");
                config.tracker()
            }
        };
        if let Some(input) = day {
            let day = parse_day(input, &tracker)?;
            tracker.select_day(day);
        }
        Ok(Self {
            config,
            tracker,
            store,
        })
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.store.save(&self.tracker.snapshot())?;
        Ok(())
    }
}

fn parse_day(input: &str, tracker: &ActivityTracker) -> Result<CalendarDay, Box<dyn std::error::Error>> {
    if input.eq_ignore_ascii_case("today") {
        return Ok(tracker.today());
    }
    Ok(input.parse::<CalendarDay>()?)
}

pub fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}
