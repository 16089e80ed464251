use serde::{Deserialize, Serialize};

/// Which work-period task list applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkMode {
    Wfh,
    Office,
}

impl WorkMode {
    /// Display name for the profile view
    pub fn name(&self) -> &'static str {
        match self {
            WorkMode::Wfh => "Work From Home",
            WorkMode::Office => "Office",
        }
    }

    /// Short label for headers and reports
    pub fn short_name(&self) -> &'static str {
        match self {
            WorkMode::Wfh => "WFH",
            WorkMode::Office => "Office",
        }
    }
}

/// Daily period a task belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskCategory {
    Morning,
    Work,
    Evening,
}

impl TaskCategory {
    /// Section heading shown on the schedule
    pub fn heading(&self) -> &'static str {
        match self {
            TaskCategory::Morning => "Morning Routine",
            TaskCategory::Work => "Work Block",
            TaskCategory::Evening => "Evening Routine",
        }
    }

    /// All categories in schedule order
    pub fn all() -> &'static [TaskCategory] {
        &[
            TaskCategory::Morning,
            TaskCategory::Work,
            TaskCategory::Evening,
        ]
    }
}

/// One of the three ten-day bands of the challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengePhase {
    Discipline,
    Growth,
    Transformation,
}

impl ChallengePhase {
    pub fn name(&self) -> &'static str {
        match self {
            ChallengePhase::Discipline => "Discipline",
            ChallengePhase::Growth => "Growth",
            ChallengePhase::Transformation => "Transformation",
        }
    }
}

/// Render status of a single challenge day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// The day the challenge is currently on
    Today,
    /// A recorded day with score above the completion bar
    Completed,
    /// An elapsed day without a passing record
    PastIncomplete,
    /// A future day, no record expected
    Locked,
}

/// Top-level views reachable from the tab row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Schedule,
    Challenge,
    Stats,
    Profile,
}

impl View {
    /// Parse a route string from the CLI; unknown routes fall back to the schedule
    pub fn from_route(route: &str) -> Self {
        match route.trim().trim_start_matches('/').to_lowercase().as_str() {
            "" | "schedule" | "today" => View::Schedule,
            "challenge" | "path" => View::Challenge,
            "stats" | "week" => View::Stats,
            "profile" | "settings" => View::Profile,
            _ => View::Schedule,
        }
    }

    /// Tab title
    pub fn title(&self) -> &'static str {
        match self {
            View::Schedule => "Schedule",
            View::Challenge => "Challenge",
            View::Stats => "Stats",
            View::Profile => "Profile",
        }
    }

    /// All views in tab order
    pub fn all() -> &'static [View] {
        &[View::Schedule, View::Challenge, View::Stats, View::Profile]
    }

    /// Position in the tab row
    pub fn index(&self) -> usize {
        match self {
            View::Schedule => 0,
            View::Challenge => 1,
            View::Stats => 2,
            View::Profile => 3,
        }
    }

    /// Next view in tab order, wrapping
    pub fn next(&self) -> Self {
        let all = View::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Previous view in tab order, wrapping
    pub fn previous(&self) -> Self {
        let all = View::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingNote,
    EditingProfile,
    ConfirmReset, // Blocking y/n prompt before the destructive reset
}
