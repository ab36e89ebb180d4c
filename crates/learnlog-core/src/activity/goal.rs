use std::fmt;

use serde::{Deserialize, Serialize};

/// How long the user gives themselves to learn the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalDuration {
    #[default]
    Week,
    Month,
    Year,
}

impl GoalDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalDuration::Week => "week",
            GoalDuration::Month => "month",
            GoalDuration::Year => "year",
        }
    }

    /// e.g. "I want to learn it in a Month".
    pub fn label(&self) -> &'static str {
        match self {
            GoalDuration::Week => "I want to learn it in a Week",
            GoalDuration::Month => "I want to learn it in a Month",
            GoalDuration::Year => "I want to learn it in a Year",
        }
    }
}

impl fmt::Display for GoalDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
