//! Logging days.

use learnlog_core::SnapshotStore;

use super::session::{print_event, Session};

pub fn status(day: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open(day)?;
    print_event(&session.tracker.snapshot_event())
}

pub fn learned(day: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open(day)?;
    match session.tracker.log_learned() {
        Some(event) => {
            session.save()?;
            print_event(&event)
        }
        None => {
            eprintln!("{} is already logged as learned", session.tracker.selected_day());
            print_event(&session.tracker.snapshot_event())
        }
    }
}

pub fn freeze(day: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open(day)?;
    let day = session.tracker.selected_day();
    // Checked first so the notice can say why nothing changed.
    let availability = session.tracker.freeze_availability();
    match session.tracker.log_freezed() {
        Some(event) => {
            session.save()?;
            print_event(&event)
        }
        None => {
            match availability {
                Err(blocked) => eprintln!("cannot freeze {day}: {blocked}"),
                Ok(()) => eprintln!("{day} is already freezed"),
            }
            print_event(&session.tracker.snapshot_event())
        }
    }
}

pub fn discard() -> Result<(), Box<dyn std::error::Error>> {
    let store = SnapshotStore::open()?;
    if store.discard()? {
        println!("tracked state discarded");
    } else {
        println!("nothing to discard");
    }
    Ok(())
}
