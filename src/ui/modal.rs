use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the reset confirmation modal
pub fn render_reset_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode == UiMode::ConfirmReset {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        // Message
        lines.push(Line::raw(""));
        lines.push(Line::raw("  Restart the 30-day challenge?"));
        lines.push(Line::raw(""));
        lines.push(Line::raw("  This deletes all recorded days, custom tasks"));
        lines.push(Line::raw("  and your profile, and starts over from Day 1."));
        lines.push(Line::raw(""));

        // Options
        lines.push(Line::from(vec![
            Span::styled("  [y]", modal_title_style()),
            Span::raw(" Yes, start over  "),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  [n]", modal_title_style()),
            Span::raw(" No, keep going  "),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" ⟲ Restart Challenge ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
