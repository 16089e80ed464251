use crate::app::AppState;
use crate::report::stats::{summarize_week, weekly_scores};
use crate::ui::styles::{
    border_style, gauge_style, hint_style, score_style, section_style, title_style,
};
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Width of a full weekly bar in cells
const BAR_WIDTH: usize = 30;

/// Filled and empty widths of one bar
fn bar_widths(score: u16) -> (usize, usize) {
    let filled = (usize::from(score.min(100)) * BAR_WIDTH) / 100;
    (filled, BAR_WIDTH - filled)
}

/// Render the stats view: seven-day chart, stat tiles and weekly targets
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let today = Local::now().date_naive();
    let weekly = weekly_scores(&app.data.history, today);
    let summary = summarize_week(&weekly);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Weekly Stats ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Average gauge
            Constraint::Length(1), // Spacing
            Constraint::Min(0),    // Chart and targets
        ])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .percent(summary.average_score.min(100))
        .label("");
    f.render_widget(gauge, chunks[0]);

    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Consistency: ", title_style()),
        Span::raw(format!("{}/7 days   ", summary.active_days)),
        Span::styled("Avg. Completion: ", title_style()),
        Span::raw(format!("{}%", summary.average_score)),
    ]));
    lines.push(Line::raw(""));

    for day in &weekly {
        let (filled, empty) = bar_widths(day.score);
        let marker = if day.date == today { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::raw(format!("{}{:<4}", marker, day.label)),
            Span::styled("█".repeat(filled), score_style(day.score)),
            Span::styled("░".repeat(empty), hint_style()),
            Span::raw(format!(" {:>3}%", day.score)),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Weekly Targets",
        section_style(),
    )));
    for target in crate::domain::WEEKLY_TARGETS {
        lines.push(Line::from(Span::raw(format!("  [ ] {}", target))));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(paragraph, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_widths() {
        assert_eq!(bar_widths(0), (0, BAR_WIDTH));
        assert_eq!(bar_widths(100), (BAR_WIDTH, 0));
        assert_eq!(bar_widths(50), (BAR_WIDTH / 2, BAR_WIDTH / 2));
    }

    #[test]
    fn test_bar_widths_clamp_overflow() {
        assert_eq!(bar_widths(250), (BAR_WIDTH, 0));
    }
}
