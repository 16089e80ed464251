use super::enums::{TaskCategory, WorkMode};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Prefix that distinguishes user-authored task ids from built-in ones
pub const CUSTOM_ID_PREFIX: &str = "custom-";

/// Canonical YYYY-MM-DD key for a calendar day, local time
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Profile settings, singleton inside the state blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub goal: String,
    pub work_mode: WorkMode,
    pub start_date: String, // RFC3339 timestamp, parsed at the edges
}

impl UserSettings {
    /// Default settings anchored at the given start moment
    pub fn with_start(start: DateTime<Local>) -> Self {
        Self {
            name: String::new(),
            goal: String::new(),
            work_mode: WorkMode::Wfh,
            start_date: start.to_rfc3339(),
        }
    }

    /// Parse the stored start date; None if the string is not valid RFC3339
    pub fn start_datetime(&self) -> Option<DateTime<Local>> {
        DateTime::parse_from_rfc3339(&self.start_date)
            .ok()
            .map(|dt| dt.with_timezone(&Local))
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self::with_start(Local::now())
    }
}

/// A user-authored task alongside the fixed built-ins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTask {
    pub id: String,
    pub title: String,
    pub time_range: String,
    pub category: TaskCategory,
}

impl CustomTask {
    /// Build a custom task; the id is derived from the creation timestamp,
    /// bumped past any id already taken so tasks created within the same
    /// millisecond stay distinct. An empty time range gets the "Anytime"
    /// placeholder label.
    pub fn new(
        title: String,
        time_range: String,
        category: TaskCategory,
        created: DateTime<Local>,
        existing: &[CustomTask],
    ) -> Self {
        let time_range = if time_range.trim().is_empty() {
            "Anytime".to_string()
        } else {
            time_range
        };

        let mut millis = created.timestamp_millis();
        let mut id = format!("{}{}", CUSTOM_ID_PREFIX, millis);
        while existing.iter().any(|task| task.id == id) {
            millis += 1;
            id = format!("{}{}", CUSTOM_ID_PREFIX, millis);
        }

        Self {
            id,
            title,
            time_range,
            category,
        }
    }
}

/// Check whether an id names a custom task rather than a built-in
pub fn is_custom_id(id: &str) -> bool {
    id.starts_with(CUSTOM_ID_PREFIX)
}

/// Persisted record for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayData {
    pub date: String,
    #[serde(default)]
    pub completed_task_ids: Vec<String>,
    #[serde(default)]
    pub daily_note: String,
    #[serde(default)]
    pub score: f64,
}

impl DayData {
    pub fn new(date: &str) -> Self {
        Self {
            date: date.to_string(),
            completed_task_ids: Vec::new(),
            daily_note: String::new(),
            score: 0.0,
        }
    }
}

/// Root aggregate, persisted wholesale on every mutation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub settings: UserSettings,
    #[serde(default)]
    pub history: HashMap<String, DayData>,
    #[serde(default)]
    pub custom_tasks: Vec<CustomTask>,
}

impl AppData {
    /// Stored start date, falling back to now when the string is unparseable
    pub fn start_datetime(&self) -> DateTime<Local> {
        self.settings.start_datetime().unwrap_or_else(Local::now)
    }

    pub fn day(&self, key: &str) -> Option<&DayData> {
        self.history.get(key)
    }

    /// Day record for the key, created lazily on first interaction
    pub fn day_mut(&mut self, key: &str) -> &mut DayData {
        self.history
            .entry(key.to_string())
            .or_insert_with(|| DayData::new(key))
    }

    /// Discard history and custom tasks, restore default settings with a fresh start date
    pub fn reset(&mut self, now: DateTime<Local>) {
        self.settings = UserSettings::with_start(now);
        self.history.clear();
        self.custom_tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn moment() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 1, 6, 30, 0).unwrap()
    }

    #[test]
    fn test_day_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(day_key(date), "2024-03-07");
    }

    #[test]
    fn test_settings_start_round_trip() {
        let settings = UserSettings::with_start(moment());
        assert_eq!(settings.start_datetime(), Some(moment()));
        assert_eq!(settings.work_mode, WorkMode::Wfh);
        assert!(settings.name.is_empty());
    }

    #[test]
    fn test_settings_bad_start_date_parses_to_none() {
        let mut settings = UserSettings::with_start(moment());
        settings.start_date = "not a date".to_string();
        assert_eq!(settings.start_datetime(), None);
    }

    #[test]
    fn test_custom_task_id_prefix_and_placeholder() {
        let task = CustomTask::new(
            "Read".to_string(),
            "   ".to_string(),
            TaskCategory::Evening,
            moment(),
            &[],
        );
        assert!(is_custom_id(&task.id));
        assert_eq!(
            task.id,
            format!("custom-{}", moment().timestamp_millis())
        );
        assert_eq!(task.time_range, "Anytime");
        assert!(!is_custom_id("m1"));
    }

    #[test]
    fn test_tasks_created_same_millisecond_get_distinct_ids() {
        let mut tasks = vec![CustomTask::new(
            "Read".to_string(),
            String::new(),
            TaskCategory::Evening,
            moment(),
            &[],
        )];
        let second = CustomTask::new(
            "Write".to_string(),
            String::new(),
            TaskCategory::Evening,
            moment(),
            &tasks,
        );
        tasks.push(second);

        assert_ne!(tasks[0].id, tasks[1].id);
        // The millis value bumps until the id is free
        assert_eq!(
            tasks[1].id,
            format!("custom-{}", moment().timestamp_millis() + 1)
        );
    }

    #[test]
    fn test_day_mut_creates_lazily() {
        let mut data = AppData::default();
        assert!(data.day("2024-01-05").is_none());

        data.day_mut("2024-01-05").daily_note = "note".to_string();
        let day = data.day("2024-01-05").unwrap();
        assert_eq!(day.date, "2024-01-05");
        assert_eq!(day.daily_note, "note");
        assert_eq!(day.score, 0.0);
    }

    #[test]
    fn test_reset_restores_defaults_with_fresh_start() {
        let mut data = AppData::default();
        data.settings.name = "Sam".to_string();
        data.settings.work_mode = WorkMode::Office;
        data.day_mut("2024-01-02").score = 80.0;
        data.custom_tasks.push(CustomTask::new(
            "Extra".to_string(),
            "Anytime".to_string(),
            TaskCategory::Morning,
            moment(),
            &[],
        ));

        data.reset(moment());

        assert!(data.history.is_empty());
        assert!(data.custom_tasks.is_empty());
        assert!(data.settings.name.is_empty());
        assert_eq!(data.settings.work_mode, WorkMode::Wfh);
        assert_eq!(data.settings.start_datetime(), Some(moment()));
    }

    #[test]
    fn test_app_data_json_round_trip() {
        let mut data = AppData::default();
        data.settings = UserSettings::with_start(moment());
        data.settings.name = "Sam".to_string();
        data.day_mut("2024-01-01").completed_task_ids = vec!["m1".to_string()];
        data.custom_tasks.push(CustomTask::new(
            "Extra".to_string(),
            "6:00".to_string(),
            TaskCategory::Work,
            moment(),
            &[],
        ));

        let json = serde_json::to_string_pretty(&data).unwrap();
        let loaded: AppData = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let json = r#"{
            "settings": {
                "work_mode": "Wfh",
                "start_date": "2024-01-01T06:30:00+00:00"
            }
        }"#;

        let loaded: AppData = serde_json::from_str(json).unwrap();
        assert!(loaded.history.is_empty());
        assert!(loaded.custom_tasks.is_empty());
        assert!(loaded.settings.name.is_empty());
    }
}
