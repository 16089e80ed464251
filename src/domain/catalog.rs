use super::enums::{ChallengePhase, DayStatus, TaskCategory, WorkMode};
use super::state::CustomTask;

/// Total length of the challenge in days
pub const CHALLENGE_DAYS: i64 = 30;

/// Score a day must beat to count as completed on the challenge map
pub const COMPLETION_BAR: f64 = 50.0;

/// A fixed task from the built-in routine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinTask {
    pub id: &'static str,
    pub time_range: &'static str,
    pub title: &'static str,
}

pub const MORNING_ROUTINE: &[BuiltinTask] = &[
    BuiltinTask {
        id: "m1",
        time_range: "5:30 – 5:45",
        title: "Wake up + water + breathing (no phone)",
    },
    BuiltinTask {
        id: "m2",
        time_range: "5:45 – 6:30",
        title: "Exercise (cardio + bodyweight)",
    },
    BuiltinTask {
        id: "m3",
        time_range: "6:30 – 6:45",
        title: "Stretch / cool down",
    },
    BuiltinTask {
        id: "m4",
        time_range: "6:45 – 7:00",
        title: "Freshen up",
    },
    BuiltinTask {
        id: "m5",
        time_range: "7:00 – 8:15",
        title: "Deep Coding / Learning",
    },
    BuiltinTask {
        id: "m6",
        time_range: "8:15 – 8:30",
        title: "Breakfast (light & healthy)",
    },
];

pub const WORK_WFH: &[BuiltinTask] = &[
    BuiltinTask {
        id: "wfh1",
        time_range: "9:00 – 11:00",
        title: "Work – Deep focus",
    },
    BuiltinTask {
        id: "wfh2",
        time_range: "11:00 – 11:10",
        title: "Walk + stretch",
    },
    BuiltinTask {
        id: "wfh3",
        time_range: "11:10 – 1:00",
        title: "Work",
    },
    BuiltinTask {
        id: "wfh4",
        time_range: "1:00 – 2:00",
        title: "Lunch + short rest",
    },
    BuiltinTask {
        id: "wfh5",
        time_range: "2:00 – 5:00",
        title: "Work",
    },
    BuiltinTask {
        id: "wfh6",
        time_range: "5:00 – 5:30",
        title: "Break / walk",
    },
];

pub const WORK_OFFICE: &[BuiltinTask] = &[
    BuiltinTask {
        id: "off1",
        time_range: "9:00",
        title: "Commute / Start Work",
    },
    BuiltinTask {
        id: "off2",
        time_range: "9:30 – 6:30",
        title: "Job (focus mode)",
    },
    BuiltinTask {
        id: "off3",
        time_range: "hourly",
        title: "Water + movement every 1 hour",
    },
    BuiltinTask {
        id: "off4",
        time_range: "1:00",
        title: "Lunch + 10min Walk",
    },
];

pub const EVENING_ROUTINE: &[BuiltinTask] = &[
    BuiltinTask {
        id: "e1",
        time_range: "7:00 – 8:00",
        title: "Video Editing / Creative Skill",
    },
    BuiltinTask {
        id: "e2",
        time_range: "8:00 – 8:30",
        title: "Dinner + family time",
    },
    BuiltinTask {
        id: "e3",
        time_range: "8:30 – 9:30",
        title: "Light learning / reading",
    },
    BuiltinTask {
        id: "e4",
        time_range: "9:30 – 9:45",
        title: "Daily review + gratitude",
    },
    BuiltinTask {
        id: "e5",
        time_range: "10:00 – 10:30",
        title: "Wind down + sleep",
    },
];

/// Work-period list for the given mode
pub fn work_routine(mode: WorkMode) -> &'static [BuiltinTask] {
    match mode {
        WorkMode::Wfh => WORK_WFH,
        WorkMode::Office => WORK_OFFICE,
    }
}

/// Built-in list for one category under the given work mode
pub fn builtin_tasks(category: TaskCategory, mode: WorkMode) -> &'static [BuiltinTask] {
    match category {
        TaskCategory::Morning => MORNING_ROUTINE,
        TaskCategory::Work => work_routine(mode),
        TaskCategory::Evening => EVENING_ROUTINE,
    }
}

/// Metadata for one ten-day phase of the challenge
#[derive(Debug, Clone, Copy)]
pub struct PhaseInfo {
    pub phase: ChallengePhase,
    pub first_day: i64,
    pub last_day: i64,
    pub goal: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}

pub const CHALLENGE_PHASES: [PhaseInfo; 3] = [
    PhaseInfo {
        phase: ChallengePhase::Discipline,
        first_day: 1,
        last_day: 10,
        goal: "Build consistency",
        description: "Focus on showing up, not perfection.",
        prompt: "What did I complete today?",
    },
    PhaseInfo {
        phase: ChallengePhase::Growth,
        first_day: 11,
        last_day: 20,
        goal: "Skill improvement",
        description: "Increase intensity. Reduce distractions.",
        prompt: "What skill improved today?",
    },
    PhaseInfo {
        phase: ChallengePhase::Transformation,
        first_day: 21,
        last_day: 30,
        goal: "Identity change",
        description: "You should feel different.",
        prompt: "How am I better than Day 1?",
    },
];

/// Phase containing the given 1-based day; anything past day 30 stays in the last phase
pub fn phase_for_day(day: i64) -> &'static PhaseInfo {
    CHALLENGE_PHASES
        .iter()
        .find(|p| day >= p.first_day && day <= p.last_day)
        .unwrap_or(&CHALLENGE_PHASES[CHALLENGE_PHASES.len() - 1])
}

/// Static weekly targets shown on the stats view
pub const WEEKLY_TARGETS: &[&str] = &[
    "Exercised 5 days",
    "Learned coding 7 days",
    "Edited 5+ videos",
    "Slept on time",
    "Improved discipline",
];

/// A flattened row for rendering the schedule checklist
#[derive(Debug, Clone)]
pub enum ScheduleRow {
    /// Section heading; counts are derived at render time
    Header(TaskCategory),
    /// A selectable task line
    Task(TaskEntry),
}

/// One task line on the schedule, built-in or custom
#[derive(Debug, Clone)]
pub struct TaskEntry {
    pub id: String,
    pub title: String,
    pub time_range: String,
    pub category: TaskCategory,
    pub is_custom: bool,
}

impl TaskEntry {
    fn from_builtin(task: &BuiltinTask, category: TaskCategory) -> Self {
        TaskEntry {
            id: task.id.to_string(),
            title: task.title.to_string(),
            time_range: task.time_range.to_string(),
            category,
            is_custom: false,
        }
    }

    fn from_custom(task: &CustomTask) -> Self {
        TaskEntry {
            id: task.id.clone(),
            title: task.title.clone(),
            time_range: task.time_range.clone(),
            category: task.category,
            is_custom: true,
        }
    }
}

/// Flatten the applicable catalog plus custom tasks into schedule rows.
/// Custom tasks keep insertion order at the end of their section.
pub fn flatten_schedule(mode: WorkMode, custom_tasks: &[CustomTask]) -> Vec<ScheduleRow> {
    let mut rows = Vec::new();

    for &category in TaskCategory::all() {
        rows.push(ScheduleRow::Header(category));

        for task in builtin_tasks(category, mode) {
            rows.push(ScheduleRow::Task(TaskEntry::from_builtin(task, category)));
        }

        for task in custom_tasks.iter().filter(|t| t.category == category) {
            rows.push(ScheduleRow::Task(TaskEntry::from_custom(task)));
        }
    }

    rows
}

/// Only the selectable task entries, in schedule order
pub fn schedule_entries(mode: WorkMode, custom_tasks: &[CustomTask]) -> Vec<TaskEntry> {
    flatten_schedule(mode, custom_tasks)
        .into_iter()
        .filter_map(|row| match row {
            ScheduleRow::Task(entry) => Some(entry),
            ScheduleRow::Header(_) => None,
        })
        .collect()
}

/// Marker for a challenge day in compact listings
pub fn status_glyph(status: DayStatus, use_emoji: bool) -> &'static str {
    match status {
        DayStatus::Today => "▶",
        DayStatus::Completed => "✓",
        DayStatus::PastIncomplete => "✗",
        DayStatus::Locked => {
            if use_emoji {
                "🔒"
            } else {
                "·"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(id: &str, category: TaskCategory) -> CustomTask {
        CustomTask {
            id: id.to_string(),
            title: format!("Task {}", id),
            time_range: "Anytime".to_string(),
            category,
        }
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(MORNING_ROUTINE.len(), 6);
        assert_eq!(WORK_WFH.len(), 6);
        assert_eq!(WORK_OFFICE.len(), 4);
        assert_eq!(EVENING_ROUTINE.len(), 5);
    }

    #[test]
    fn test_builtin_ids_have_fixed_prefixes() {
        assert!(MORNING_ROUTINE.iter().all(|t| t.id.starts_with('m')));
        assert!(WORK_WFH.iter().all(|t| t.id.starts_with("wfh")));
        assert!(WORK_OFFICE.iter().all(|t| t.id.starts_with("off")));
        assert!(EVENING_ROUTINE.iter().all(|t| t.id.starts_with('e')));
    }

    #[test]
    fn test_work_routine_follows_mode() {
        assert_eq!(work_routine(WorkMode::Wfh)[0].id, "wfh1");
        assert_eq!(work_routine(WorkMode::Office)[0].id, "off1");
    }

    #[test]
    fn test_phase_for_day_bands() {
        assert_eq!(phase_for_day(1).phase, ChallengePhase::Discipline);
        assert_eq!(phase_for_day(10).phase, ChallengePhase::Discipline);
        assert_eq!(phase_for_day(11).phase, ChallengePhase::Growth);
        assert_eq!(phase_for_day(20).phase, ChallengePhase::Growth);
        assert_eq!(phase_for_day(21).phase, ChallengePhase::Transformation);
        assert_eq!(phase_for_day(30).phase, ChallengePhase::Transformation);
    }

    #[test]
    fn test_phase_for_day_past_end_stays_in_last_phase() {
        assert_eq!(phase_for_day(31).phase, ChallengePhase::Transformation);
        assert_eq!(phase_for_day(99).phase, ChallengePhase::Transformation);
    }

    #[test]
    fn test_flatten_schedule_orders_sections() {
        let customs = vec![custom("custom-1", TaskCategory::Morning)];
        let rows = flatten_schedule(WorkMode::Wfh, &customs);

        // 3 headers + 6 morning + 1 custom + 6 work + 5 evening
        assert_eq!(rows.len(), 21);
        assert!(matches!(rows[0], ScheduleRow::Header(TaskCategory::Morning)));

        // Custom task lands at the end of its section, before the work header
        match &rows[7] {
            ScheduleRow::Task(entry) => {
                assert_eq!(entry.id, "custom-1");
                assert!(entry.is_custom);
            }
            ScheduleRow::Header(_) => panic!("expected the custom task row"),
        }
        assert!(matches!(rows[8], ScheduleRow::Header(TaskCategory::Work)));
    }

    #[test]
    fn test_schedule_entries_counts_by_mode() {
        assert_eq!(schedule_entries(WorkMode::Wfh, &[]).len(), 17);
        assert_eq!(schedule_entries(WorkMode::Office, &[]).len(), 15);
    }

    #[test]
    fn test_status_glyph_ascii_fallback() {
        assert_eq!(status_glyph(DayStatus::Locked, true), "🔒");
        assert_eq!(status_glyph(DayStatus::Locked, false), "·");
        assert_eq!(status_glyph(DayStatus::Completed, false), "✓");
    }
}
