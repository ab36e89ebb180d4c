//! Property tests for the activity tracker rules.

use learnlog_core::{ActivityTracker, CalendarDay, DayNormalizer, DayStatus};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Move(i64),
    Learned,
    Freezed,
    Goal(String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-10i64..=10).prop_map(Op::Move),
        3 => Just(Op::Learned),
        4 => Just(Op::Freezed),
        1 => "[a-z]{0,8}".prop_map(Op::Goal),
    ]
}

fn start() -> CalendarDay {
    CalendarDay::from_ymd(2025, 10, 20).unwrap()
}

fn apply(t: &mut ActivityTracker, op: &Op) {
    match op {
        Op::Move(n) => {
            t.move_selection(*n);
        }
        Op::Learned => {
            t.log_learned();
        }
        Op::Freezed => {
            t.log_freezed();
        }
        Op::Goal(g) => {
            t.set_goal(g.clone());
        }
    }
}

proptest! {
    #[test]
    fn freeze_counter_stays_in_budget(max in 0u32..4, ops in prop::collection::vec(op(), 0..60)) {
        let mut t = ActivityTracker::starting_on(start(), DayNormalizer::Utc, max, "g");
        for op in &ops {
            apply(&mut t, op);
            prop_assert!(t.freezes_used() <= t.max_freezes());
            prop_assert!(t.freezed_count() <= t.freezes_used() as usize);
            prop_assert_eq!(t.remaining_freezes(), max - t.freezes_used());
        }
    }

    #[test]
    fn learned_day_survives_freeze(ops in prop::collection::vec(op(), 0..40)) {
        let mut t = ActivityTracker::starting_on(start(), DayNormalizer::Utc, 2, "g");
        for op in &ops {
            apply(&mut t, op);
        }
        t.log_learned();
        let before = t.clone();
        prop_assert!(t.log_freezed().is_none());
        prop_assert_eq!(t.selected_status(), DayStatus::Learned);
        prop_assert_eq!(t, before);
    }

    #[test]
    fn repeated_logging_is_idempotent(ops in prop::collection::vec(op(), 0..40)) {
        let mut t = ActivityTracker::starting_on(start(), DayNormalizer::Utc, 2, "g");
        for op in &ops {
            apply(&mut t, op);
        }

        let mut once = t.clone();
        once.log_freezed();
        let mut twice = once.clone();
        twice.log_freezed();
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.freezes_used() <= t.freezes_used() + 1);

        let mut once = t.clone();
        once.log_learned();
        let mut twice = once.clone();
        twice.log_learned();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn moving_selection_never_changes_statuses(ops in prop::collection::vec(op(), 0..40), by in -400i64..400) {
        let mut t = ActivityTracker::starting_on(start(), DayNormalizer::Utc, 2, "g");
        for op in &ops {
            apply(&mut t, op);
        }
        let before: Vec<_> = t.tracked_days().collect();
        let from = t.selected_day();
        t.move_selection(by);
        prop_assert_eq!(t.tracked_days().collect::<Vec<_>>(), before);
        prop_assert_eq!(Some(t.selected_day()), from.offset(by));
        if by % 7 == 0 {
            prop_assert_eq!(t.selected_day().weekday(), from.weekday());
        }
    }

    #[test]
    fn snapshot_restore_preserves_state(ops in prop::collection::vec(op(), 0..40)) {
        let mut t = ActivityTracker::starting_on(start(), DayNormalizer::Utc, 2, "g");
        for op in &ops {
            apply(&mut t, op);
        }
        let restored = ActivityTracker::restore(t.snapshot(), DayNormalizer::Utc, 2).unwrap();
        prop_assert_eq!(restored.snapshot(), t.snapshot());
        prop_assert_eq!(restored.freezes_used(), t.freezes_used());
        prop_assert_eq!(restored.selected_day(), DayNormalizer::Utc.today());
    }
}

#[test]
fn budget_exhaustion_with_two_freezes() {
    let mut t = ActivityTracker::starting_on(start(), DayNormalizer::Utc, 2, "g");
    assert!(t.log_freezed().is_some());
    t.move_selection(3);
    assert!(t.log_freezed().is_some());
    assert_eq!(t.freezes_used(), 2);

    t.move_selection(-10);
    let third = t.selected_day();
    assert!(t.log_freezed().is_none());
    assert_eq!(t.freezes_used(), 2);
    assert_eq!(t.status_of(third), DayStatus::None);
}
