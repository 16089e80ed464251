use super::catalog::{CHALLENGE_DAYS, COMPLETION_BAR};
use super::enums::DayStatus;
use super::state::{day_key, DayData};
use chrono::{DateTime, Duration, Local, NaiveDate};
use std::collections::HashMap;

/// Days elapsed since the challenge started, 1-based and unbounded above.
/// Ceil of the elapsed time in days, so any part of a day past the start
/// moment counts as that day.
pub fn days_since_start(start: DateTime<Local>, now: DateTime<Local>) -> i64 {
    let millis = (now - start).num_milliseconds().abs();
    let days = (millis as f64 / 86_400_000.0).ceil() as i64;
    days.max(1)
}

/// Day number clamped to the challenge window, for display only
pub fn display_day(day: i64) -> i64 {
    day.clamp(1, CHALLENGE_DAYS)
}

/// Calendar date of a 1-based challenge day
pub fn date_for_day(start: DateTime<Local>, day: i64) -> NaiveDate {
    start.date_naive() + Duration::days(day - 1)
}

/// Status of one challenge day, recomputed on every render.
/// Precedence: today, then completed, then past-incomplete, then locked.
pub fn day_status(
    start: DateTime<Local>,
    history: &HashMap<String, DayData>,
    day: i64,
    now: DateTime<Local>,
) -> DayStatus {
    let current = days_since_start(start, now);
    if day == current {
        return DayStatus::Today;
    }

    let key = day_key(date_for_day(start, day));
    if let Some(record) = history.get(&key) {
        if record.score > COMPLETION_BAR {
            return DayStatus::Completed;
        }
    }

    if day < current {
        DayStatus::PastIncomplete
    } else {
        DayStatus::Locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn record(date: &str, score: f64) -> (String, DayData) {
        let mut day = DayData::new(date);
        day.score = score;
        (date.to_string(), day)
    }

    #[test]
    fn test_days_since_start_is_one_based() {
        let start = at(2024, 1, 1, 8);
        assert_eq!(days_since_start(start, start), 1);
        assert_eq!(days_since_start(start, at(2024, 1, 1, 9)), 1);
        assert_eq!(days_since_start(start, at(2024, 1, 2, 9)), 2);
    }

    #[test]
    fn test_days_since_start_ceils_partial_days() {
        let start = at(2024, 1, 1, 8);
        // Four full days plus an hour lands in day five
        assert_eq!(days_since_start(start, at(2024, 1, 5, 9)), 5);
        // Not yet past the start hour, still day four
        assert_eq!(days_since_start(start, at(2024, 1, 5, 7)), 4);
    }

    #[test]
    fn test_days_since_start_unbounded_display_clamped() {
        let start = at(2024, 1, 1, 8);
        let day = days_since_start(start, at(2024, 3, 1, 9));
        assert!(day > CHALLENGE_DAYS);
        assert_eq!(display_day(day), CHALLENGE_DAYS);
        assert_eq!(display_day(1), 1);
    }

    #[test]
    fn test_date_for_day() {
        let start = at(2024, 1, 1, 8);
        assert_eq!(
            date_for_day(start, 1),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(
            date_for_day(start, 30),
            NaiveDate::from_ymd_opt(2024, 1, 30).unwrap()
        );
    }

    #[test]
    fn test_day_status_precedence() {
        let start = at(2024, 1, 1, 8);
        let now = at(2024, 1, 5, 9);
        let history: HashMap<String, DayData> =
            [record("2024-01-03", 60.0), record("2024-01-02", 40.0)]
                .into_iter()
                .collect();

        assert_eq!(day_status(start, &history, 5, now), DayStatus::Today);
        assert_eq!(day_status(start, &history, 3, now), DayStatus::Completed);
        // A record at or below the bar does not complete the day
        assert_eq!(day_status(start, &history, 2, now), DayStatus::PastIncomplete);
        assert_eq!(day_status(start, &history, 4, now), DayStatus::PastIncomplete);
        assert_eq!(day_status(start, &history, 10, now), DayStatus::Locked);
    }

    #[test]
    fn test_today_wins_over_completed() {
        let start = at(2024, 1, 1, 8);
        let now = at(2024, 1, 5, 9);
        let history: HashMap<String, DayData> =
            [record("2024-01-05", 90.0)].into_iter().collect();

        assert_eq!(day_status(start, &history, 5, now), DayStatus::Today);
    }
}
