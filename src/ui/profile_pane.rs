use crate::app::AppState;
use crate::domain::{display_day, phase_for_day, CHALLENGE_DAYS};
use crate::ui::styles::{border_style, hint_style, phase_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Placeholder for profile fields the user has not filled in yet
fn display_or_unset(value: &str) -> &str {
    if value.trim().is_empty() {
        "(not set)"
    } else {
        value
    }
}

/// Render the profile view
pub fn render_profile_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let settings = &app.data.settings;
    let shown_day = display_day(app.current_day());
    let phase = phase_for_day(shown_day);

    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Name:      ", title_style()),
        Span::raw(display_or_unset(&settings.name).to_string()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Goal:      ", title_style()),
        Span::raw(display_or_unset(&settings.goal).to_string()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Work Mode: ", title_style()),
        Span::raw(settings.work_mode.name()),
    ]));

    let started = app.start_datetime().format("%b %d, %Y").to_string();
    lines.push(Line::from(vec![
        Span::styled("Started:   ", title_style()),
        Span::raw(started),
    ]));

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Day:       ", title_style()),
        Span::raw(format!("{} of {} ", shown_day, CHALLENGE_DAYS)),
        Span::styled(
            format!("({} Phase)", phase.phase.name()),
            phase_style(phase.phase),
        ),
    ]));

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Restarting wipes history, custom tasks and the profile.",
        hint_style(),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Profile ", title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_or_unset() {
        assert_eq!(display_or_unset(""), "(not set)");
        assert_eq!(display_or_unset("   "), "(not set)");
        assert_eq!(display_or_unset("Ana"), "Ana");
    }
}
