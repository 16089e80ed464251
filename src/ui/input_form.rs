use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Append one labelled field with a cursor on the active one
fn push_field(lines: &mut Vec<Line<'static>>, label: &str, value: &str, active: bool) {
    let label_text = if active {
        format!("{}: (editing)", label)
    } else {
        format!("{}:", label)
    };
    lines.push(Line::raw(label_text));

    let mut spans = vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
    ];
    if active {
        spans.push(Span::styled("█", modal_title_style())); // Cursor
    }
    lines.push(Line::from(spans));
    lines.push(Line::raw(""));
}

/// Render the add-task form
pub fn render_task_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.task_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            format!(" Section: {}", form.category.heading()),
            hint_style(),
        )));
        lines.push(Line::raw(""));

        push_field(&mut lines, "Title", &form.title, form.editing_field == 0);
        push_field(&mut lines, "Time", &form.time_range, form.editing_field == 1);

        lines.push(Line::raw(
            "Tab to switch fields  ·  Enter to submit  ·  Esc to cancel",
        ));
        lines.push(Line::from(vec![
            Span::raw("(Empty time becomes "),
            Span::styled("Anytime", modal_title_style()),
            Span::raw(")"),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

/// Render the profile edit form
pub fn render_profile_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.profile_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));

        push_field(&mut lines, "Name", &form.name, form.editing_field == 0);
        push_field(&mut lines, "Goal", &form.goal, form.editing_field == 1);

        lines.push(Line::raw(
            "Tab to switch fields  ·  Enter to submit  ·  Esc to cancel",
        ));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Edit Profile ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
