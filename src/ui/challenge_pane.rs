use crate::app::AppState;
use crate::domain::{
    day_status, phase_for_day, status_glyph, DayData, CHALLENGE_DAYS, CHALLENGE_PHASES,
};
use crate::report::stats::challenge_summary;
use crate::ui::styles::{
    border_style, day_status_style, hint_style, phase_style, title_style,
};
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::collections::HashMap;

/// Days per grid row
const GRID_COLUMNS: i64 = 10;

/// Build the three ten-day rows of the challenge grid
fn grid_lines(
    start: DateTime<Local>,
    history: &HashMap<String, DayData>,
    now: DateTime<Local>,
    use_emoji: bool,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for row in 0..(CHALLENGE_DAYS / GRID_COLUMNS) {
        let mut spans = vec![Span::raw(" ")];
        for col in 0..GRID_COLUMNS {
            let day = row * GRID_COLUMNS + col + 1;
            let status = day_status(start, history, day, now);
            spans.push(Span::styled(
                format!("{:>2}{}  ", day, status_glyph(status, use_emoji)),
                day_status_style(status),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// Render the challenge view: progress grid and the three phases
pub fn render_challenge_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let now = Local::now();
    let start = app.start_datetime();
    let summary = challenge_summary(start, &app.data.history, now);
    let current_phase = phase_for_day(summary.shown_day).phase;

    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Day ", title_style()),
        Span::raw(format!("{} of {}", summary.shown_day, CHALLENGE_DAYS)),
        Span::raw(format!(
            "   {} completed, {} recorded",
            summary.completed_days, summary.recorded_days
        )),
    ]));
    lines.push(Line::raw(""));

    lines.extend(grid_lines(start, &app.data.history, now, app.use_emoji));

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        " ▶ today   ✓ done   ✗ missed   rest locked",
        hint_style(),
    )));
    lines.push(Line::raw(""));

    for info in &CHALLENGE_PHASES {
        let is_current = info.phase == current_phase;

        let name_style = if is_current {
            phase_style(info.phase).add_modifier(Modifier::BOLD)
        } else {
            phase_style(info.phase)
        };

        let mut header = vec![
            Span::styled(
                format!(" Days {}-{}  ", info.first_day, info.last_day),
                hint_style(),
            ),
            Span::styled(info.phase.name().to_string(), name_style),
        ];
        if is_current {
            header.push(Span::raw(" ← Current"));
        }
        lines.push(Line::from(header));

        lines.push(Line::from(vec![
            Span::styled("   Goal: ", title_style()),
            Span::raw(info.goal),
        ]));
        lines.push(Line::from(Span::raw(format!("   {}", info.description))));
        lines.push(Line::from(Span::styled(
            format!("   \"{}\"", info.prompt),
            hint_style(),
        )));
        lines.push(Line::raw(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" 30-Day Challenge ", title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_grid_lines_cover_all_days() {
        let start = Local.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let now = Local.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let lines = grid_lines(start, &HashMap::new(), now, false);

        assert_eq!(lines.len(), 3);

        let all = format!("{:?}", lines);
        assert!(all.contains("1▶"));
        assert!(all.contains("30·"));
    }
}
