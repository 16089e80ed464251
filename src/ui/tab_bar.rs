use crate::app::AppState;
use crate::domain::View;
use crate::ui::styles::{hint_style, selected_style};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the tab row with the active view highlighted
pub fn render_tab_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    for (idx, view) in View::all().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }

        let label = format!(" [{}] {} ", idx + 1, view.title());
        if *view == app.view {
            spans.push(Span::styled(label, selected_style()));
        } else {
            spans.push(Span::styled(label, hint_style()));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);

    // Clock on the right edge
    let clock = Local::now().format("%a %b %d  %H:%M ").to_string();
    let clock_paragraph = Paragraph::new(Line::from(Span::styled(clock, hint_style())))
        .alignment(Alignment::Right);
    f.render_widget(clock_paragraph, area);
}
