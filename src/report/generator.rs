use crate::domain::{
    date_for_day, day_key, day_status, phase_for_day, status_glyph, AppData, DayStatus,
    CHALLENGE_DAYS, WEEKLY_TARGETS,
};
use crate::persistence::{report_file, Store};
use crate::report::stats::{challenge_summary, summarize_week, weekly_scores};
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use std::fs;
use std::path::PathBuf;

/// Format a 0-100 score with no decimals
fn format_percent(value: f64) -> String {
    format!("{:.0}%", value)
}

/// Show a profile field, or a placeholder when it was never filled in
fn field_or_unset(value: &str) -> &str {
    if value.trim().is_empty() {
        "(not set)"
    } else {
        value
    }
}

/// Generate a progress report with the weekly window ending at the specified date
pub fn generate_report(date: Option<NaiveDate>, output_path: Option<PathBuf>) -> Result<PathBuf> {
    let report_date = date.unwrap_or_else(|| Local::now().date_naive());

    // Same fallback policy as the TUI: a broken blob reports as a fresh state
    let store = Store::open_default()?;
    let data = store.load_or_default();

    let report = build_report(&data, report_date, Local::now());

    let output = if let Some(path) = output_path {
        path
    } else {
        report_file(report_date)?
    };

    fs::write(&output, report)?;

    Ok(output)
}

/// Assemble the markdown body. Pure over its inputs so tests feed fixed dates.
pub fn build_report(data: &AppData, report_date: NaiveDate, now: DateTime<Local>) -> String {
    let start = data.start_datetime();
    let summary = challenge_summary(start, &data.history, now);
    let phase = phase_for_day(summary.shown_day);
    let week = weekly_scores(&data.history, report_date);
    let week_summary = summarize_week(&week);

    let mut report = String::new();

    // Header
    report.push_str(&format!("# 30-Day Challenge Report - {}\n\n", report_date));

    // Profile Section
    report.push_str("## Profile\n\n");
    report.push_str(&format!(
        "- **Name:** {}\n",
        field_or_unset(&data.settings.name)
    ));
    report.push_str(&format!(
        "- **Goal:** {}\n",
        field_or_unset(&data.settings.goal)
    ));
    report.push_str(&format!(
        "- **Work Mode:** {}\n",
        data.settings.work_mode.name()
    ));
    report.push_str(&format!("- **Started:** {}\n", start.date_naive()));
    report.push_str(&format!(
        "- **Challenge Day:** {} of {} ({} Phase)\n\n",
        summary.shown_day,
        CHALLENGE_DAYS,
        phase.phase.name()
    ));

    // Challenge Progress Section
    report.push_str("## Challenge Progress\n\n");
    report.push_str(&format!(
        "- **Days Completed:** {} of {}\n",
        summary.completed_days, CHALLENGE_DAYS
    ));
    report.push_str(&format!(
        "- **Days Recorded:** {}\n\n",
        summary.recorded_days
    ));

    for day in 1..=CHALLENGE_DAYS {
        let status = day_status(start, &data.history, day, now);
        if status == DayStatus::Locked {
            continue;
        }

        let date = date_for_day(start, day);
        let record = data.history.get(&day_key(date));
        let score = record.map(|r| r.score).unwrap_or(0.0);

        let mut line = format!(
            "- Day {:>2} ({}) {} {}",
            day,
            date,
            status_glyph(status, false),
            format_percent(score)
        );

        if let Some(record) = record {
            if !record.daily_note.trim().is_empty() {
                line.push_str(&format!(" | {}", record.daily_note.replace('\n', " ")));
            }
        }

        line.push('\n');
        report.push_str(&line);
    }
    report.push('\n');

    // Last 7 Days Section
    report.push_str("## Last 7 Days\n\n");
    for day in &week {
        report.push_str(&format!("- {} {}: {}%\n", day.label, day.date, day.score));
    }
    report.push_str(&format!(
        "\n- **Active Days:** {}/7\n",
        week_summary.active_days
    ));
    report.push_str(&format!(
        "- **Average Completion:** {}%\n\n",
        week_summary.average_score
    ));

    // Weekly Targets Section
    report.push_str("## Weekly Targets\n\n");
    for target in WEEKLY_TARGETS {
        report.push_str(&format!("- [ ] {}\n", target));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserSettings;
    use chrono::TimeZone;

    fn fixed_data() -> (AppData, DateTime<Local>) {
        let start = Local.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let now = Local.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();

        let mut data = AppData::default();
        data.settings = UserSettings::with_start(start);
        data.settings.name = "Sam".to_string();

        let day = data.day_mut("2024-01-03");
        day.score = 67.0;
        day.daily_note = "Solid session".to_string();

        (data, now)
    }

    #[test]
    fn test_build_report_header_and_profile() {
        let (data, now) = fixed_data();
        let report = build_report(&data, now.date_naive(), now);

        assert!(report.starts_with("# 30-Day Challenge Report - 2024-01-05"));
        assert!(report.contains("- **Name:** Sam"));
        assert!(report.contains("- **Goal:** (not set)"));
        assert!(report.contains("- **Challenge Day:** 5 of 30 (Discipline Phase)"));
    }

    #[test]
    fn test_build_report_lists_only_unlocked_days() {
        let (data, now) = fixed_data();
        let report = build_report(&data, now.date_naive(), now);

        assert!(report.contains("- Day  3 (2024-01-03) ✓ 67% | Solid session"));
        assert!(report.contains("- Day  2 (2024-01-02) ✗ 0%"));
        assert!(report.contains("- Day  5 (2024-01-05) ▶ 0%"));
        // Locked future days stay out of the report
        assert!(!report.contains("- Day  6"));
        assert!(!report.contains("2024-01-10"));
    }

    #[test]
    fn test_build_report_week_and_targets() {
        let (data, now) = fixed_data();
        let report = build_report(&data, now.date_naive(), now);

        assert!(report.contains("## Last 7 Days"));
        assert!(report.contains("2024-01-03: 67%"));
        assert!(report.contains("- **Active Days:** 1/7"));
        // round(67 / 7)
        assert!(report.contains("- **Average Completion:** 10%"));
        assert!(report.contains("- [ ] Exercised 5 days"));
    }
}
