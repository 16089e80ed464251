pub mod catalog;
pub mod challenge;
pub mod enums;
pub mod progress;
pub mod state;

pub use catalog::{
    flatten_schedule, phase_for_day, schedule_entries, status_glyph, ScheduleRow, TaskEntry,
    CHALLENGE_DAYS, CHALLENGE_PHASES, COMPLETION_BAR, WEEKLY_TARGETS,
};
pub use challenge::{date_for_day, day_status, days_since_start, display_day};
pub use enums::{ChallengePhase, DayStatus, TaskCategory, UiMode, View, WorkMode};
pub use progress::{completion_score, toggle_completed, total_applicable_tasks};
pub use state::{day_key, AppData, CustomTask, DayData, UserSettings};
