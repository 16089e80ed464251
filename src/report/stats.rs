use crate::domain::{
    date_for_day, day_key, days_since_start, display_day, DayData, CHALLENGE_DAYS, COMPLETION_BAR,
};
use chrono::{DateTime, Duration, Local, NaiveDate};
use std::collections::HashMap;

/// One bar of the weekly chart: a calendar day and its rounded score
#[derive(Debug, Clone, PartialEq)]
pub struct DayScore {
    pub date: NaiveDate,
    pub label: String,
    pub score: u16,
}

/// Summary over the seven-day window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekSummary {
    /// Days with a rounded score above 10
    pub active_days: usize,
    /// Rounded mean of the rounded day scores
    pub average_score: u16,
}

/// Progress counters across the 30-day window
#[derive(Debug, Clone, Copy)]
pub struct ChallengeSummary {
    /// Unclamped day count since the start date
    pub current_day: i64,
    /// Day number shown in headers, clamped to the window
    pub shown_day: i64,
    /// Recorded days with a score above the completion bar
    pub completed_days: usize,
    /// Days inside the window that have any record
    pub recorded_days: usize,
}

/// Scores for the last seven calendar days ending at the given day.
/// Days without a record score zero; recorded scores are rounded.
pub fn weekly_scores(history: &HashMap<String, DayData>, ending: NaiveDate) -> Vec<DayScore> {
    (0..7)
        .map(|i| {
            let date = ending - Duration::days(6 - i);
            let score = history
                .get(&day_key(date))
                .map(|day| day.score)
                .unwrap_or(0.0);

            DayScore {
                date,
                label: date.format("%a").to_string(),
                score: score.round() as u16,
            }
        })
        .collect()
}

/// Reduce the weekly scores to the two stat-tile numbers
pub fn summarize_week(scores: &[DayScore]) -> WeekSummary {
    let active_days = scores.iter().filter(|s| s.score > 10).count();
    let total: u32 = scores.iter().map(|s| u32::from(s.score)).sum();
    let average_score = if scores.is_empty() {
        0
    } else {
        (f64::from(total) / scores.len() as f64).round() as u16
    };

    WeekSummary {
        active_days,
        average_score,
    }
}

/// Count completed and recorded days across the challenge window
pub fn challenge_summary(
    start: DateTime<Local>,
    history: &HashMap<String, DayData>,
    now: DateTime<Local>,
) -> ChallengeSummary {
    let current_day = days_since_start(start, now);

    let mut completed_days = 0;
    let mut recorded_days = 0;
    for day in 1..=CHALLENGE_DAYS {
        if let Some(record) = history.get(&day_key(date_for_day(start, day))) {
            recorded_days += 1;
            if record.score > COMPLETION_BAR {
                completed_days += 1;
            }
        }
    }

    ChallengeSummary {
        current_day,
        shown_day: display_day(current_day),
        completed_days,
        recorded_days,
    }
}
