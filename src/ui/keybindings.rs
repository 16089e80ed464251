use crate::app::AppState;
use crate::domain::{UiMode, View};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the current view and mode
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = match app.ui_mode {
        UiMode::AddingTask | UiMode::EditingProfile => Line::from(vec![
            Span::raw(" Tab switch field   "),
            Span::raw("Enter submit   "),
            Span::raw("Esc cancel"),
        ]),
        UiMode::EditingNote => Line::from(vec![
            Span::raw(" ←/→ Home/End move   "),
            Span::raw("Enter newline   "),
            Span::raw("Esc done"),
        ]),
        UiMode::ConfirmReset => Line::from(vec![
            Span::raw(" y confirm   "),
            Span::raw("n/Esc cancel"),
        ]),
        UiMode::Normal => match app.view {
            View::Schedule => Line::from(vec![
                Span::raw(" ↑/↓ select   "),
                Span::raw("Enter/Space toggle   "),
                Span::raw("a add   "),
                Span::raw("x remove   "),
                Span::raw("n note   "),
                Span::raw("1-4/Tab view   "),
                Span::raw("q quit"),
            ]),
            View::Profile => Line::from(vec![
                Span::raw(" e edit   "),
                Span::raw("w home   "),
                Span::raw("o office   "),
                Span::raw("r restart   "),
                Span::raw("1-4/Tab view   "),
                Span::raw("q quit"),
            ]),
            View::Challenge | View::Stats => Line::from(vec![
                Span::raw(" 1-4/Tab view   "),
                Span::raw("q quit"),
            ]),
        },
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
