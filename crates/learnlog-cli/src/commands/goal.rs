use clap::{Subcommand, ValueEnum};
use learnlog_core::GoalDuration;

use super::session::{print_event, Session};

#[derive(Clone, Copy, ValueEnum)]
pub enum DurationArg {
    Week,
    Month,
    Year,
}

impl From<DurationArg> for GoalDuration {
    fn from(arg: DurationArg) -> Self {
        match arg {
            DurationArg::Week => GoalDuration::Week,
            DurationArg::Month => GoalDuration::Month,
            DurationArg::Year => GoalDuration::Year,
        }
    }
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// Print the current goal and its duration
    Show,
    /// Replace the goal. Clears every tracked day and spent freeze.
    Set {
        /// New goal text
        text: String,
        /// Time to learn it in; keeps the current duration if omitted
        #[arg(long, value_enum)]
        duration: Option<DurationArg>,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open(None)?;

    match action {
        GoalAction::Show => {
            println!("{}", session.tracker.goal_label());
            println!("{}", session.tracker.duration().label());
        }
        GoalAction::Set { text, duration } => {
            let duration = duration.map_or(session.tracker.duration(), GoalDuration::from);
            let event = session.tracker.set_goal_for(text.trim(), duration);
            session.save()?;
            print_event(&event)?;
        }
    }
    Ok(())
}
