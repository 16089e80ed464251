use crate::app::AppState;
use crate::domain::{
    display_day, flatten_schedule, ScheduleRow, TaskCategory, TaskEntry, UiMode, CHALLENGE_DAYS,
};
use crate::ui::styles::{
    border_style, default_style, done_style, gauge_style, hint_style, section_style,
    selected_style, title_style,
};
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Checkbox marker for a schedule row
fn checkbox_glyph(done: bool, use_emoji: bool) -> &'static str {
    match (done, use_emoji) {
        (true, true) => "✅",
        (true, false) => "[x]",
        (false, true) => "⬜",
        (false, false) => "[ ]",
    }
}

/// Completed and total counts for one section of the checklist
fn section_counts(
    entries: &[TaskEntry],
    completed: &[String],
    category: TaskCategory,
) -> (usize, usize) {
    let mut done = 0;
    let mut total = 0;
    for entry in entries.iter().filter(|e| e.category == category) {
        total += 1;
        if completed.iter().any(|id| id == &entry.id) {
            done += 1;
        }
    }
    (done, total)
}

/// Create a single checklist line
fn create_task_line(entry: &TaskEntry, is_completed: bool, use_emoji: bool) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(Span::raw(format!(
        " {} ",
        checkbox_glyph(is_completed, use_emoji)
    )));
    spans.push(Span::raw(format!("{:<14}", entry.time_range)));

    if is_completed {
        spans.push(Span::styled(entry.title.clone(), done_style()));
    } else {
        spans.push(Span::raw(entry.title.clone()));
    }

    if entry.is_custom {
        spans.push(Span::styled("  [custom]".to_string(), hint_style()));
    }

    Line::from(spans)
}

/// Render the schedule view: completion gauge, checklist and today's note
pub fn render_schedule_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Checklist
            Constraint::Length(7), // Daily note
        ])
        .split(area);

    render_checklist(f, app, chunks[0]);
    render_note(f, app, chunks[1]);
}

fn render_checklist(f: &mut Frame, app: &AppState, area: Rect) {
    let rows = flatten_schedule(app.data.settings.work_mode, &app.data.custom_tasks);
    let entries = app.entries();
    let completed = app.today_completed();
    let score = app.today_score();

    let shown_day = display_day(app.current_day());
    let date = Local::now().format("%a %b %d");
    let title = format!(
        " Today's Schedule ({}) - Day {} of {} ",
        date, shown_day, CHALLENGE_DAYS
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Completion gauge
            Constraint::Length(1), // Spacing
            Constraint::Min(0),    // Rows
        ])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .percent(score.round().min(100.0) as u16)
        .label(format!("{:.0}% complete", score));
    f.render_widget(gauge, inner_chunks[0]);

    // Selection counts task rows only, so track them separately from headers
    let mut task_idx = 0;
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match row {
            ScheduleRow::Header(category) => {
                let (done, total) = section_counts(&entries, &completed, *category);
                let line = Line::from(Span::styled(
                    format!(" {}  {}/{}", category.heading(), done, total),
                    section_style(),
                ));
                ListItem::new(line)
            }
            ScheduleRow::Task(entry) => {
                let is_completed = completed.iter().any(|id| id == &entry.id);
                let line = create_task_line(entry, is_completed, app.use_emoji);
                let style = if task_idx == app.selected_index && app.ui_mode == UiMode::Normal {
                    selected_style()
                } else {
                    default_style()
                };
                task_idx += 1;
                ListItem::new(line).style(style)
            }
        })
        .collect();

    f.render_widget(List::new(items), inner_chunks[2]);
}

fn render_note(f: &mut Frame, app: &AppState, area: Rect) {
    let is_editing = app.ui_mode == UiMode::EditingNote;
    let note = app.today_note();

    let today = Local::now().format("%Y-%m-%d");
    let title = if is_editing {
        format!(" ✍️ Daily Note ({}) - [Editing] ", today)
    } else {
        format!(" ✍️ Daily Note ({}) ", today)
    };

    let style = if is_editing {
        selected_style()
    } else {
        border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(style);

    // Empty note shows the reflection prompt as a placeholder
    let paragraph = if note.is_empty() && !is_editing {
        Paragraph::new(Line::from(Span::styled(
            "\"What did I complete today?\"",
            hint_style(),
        )))
        .block(block)
        .wrap(Wrap { trim: false })
    } else {
        let lines: Vec<Line> = note.lines().map(|line| Line::raw(line.to_string())).collect();
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false })
    };

    f.render_widget(paragraph, area);

    // Show cursor when editing
    if is_editing {
        let mut pos = app.note_cursor.min(note.len());
        while pos > 0 && !note.is_char_boundary(pos) {
            pos -= 1;
        }
        let text_before_cursor = &note[..pos];
        let line_number = text_before_cursor.matches('\n').count();
        let column = text_before_cursor
            .rsplit('\n')
            .next()
            .unwrap_or("")
            .chars()
            .count();

        // Account for the border
        let cursor_x = area.x + 1 + column as u16;
        let cursor_y = area.y + 1 + line_number as u16;

        if cursor_x < area.x + area.width - 1 && cursor_y < area.y + area.height - 1 {
            f.set_cursor(cursor_x, cursor_y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str, category: TaskCategory) -> TaskEntry {
        TaskEntry {
            id: id.to_string(),
            title: title.to_string(),
            time_range: "06:00".to_string(),
            category,
            is_custom: false,
        }
    }

    #[test]
    fn test_create_task_line() {
        let e = entry("m1", "Drink water", TaskCategory::Morning);
        let line = create_task_line(&e, false, true);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("Drink water"));
    }

    #[test]
    fn test_section_counts() {
        let entries = vec![
            entry("m1", "One", TaskCategory::Morning),
            entry("m2", "Two", TaskCategory::Morning),
            entry("e1", "Three", TaskCategory::Evening),
        ];
        let completed = vec!["m1".to_string(), "e1".to_string()];

        assert_eq!(
            section_counts(&entries, &completed, TaskCategory::Morning),
            (1, 2)
        );
        assert_eq!(
            section_counts(&entries, &completed, TaskCategory::Evening),
            (1, 1)
        );
        assert_eq!(
            section_counts(&entries, &completed, TaskCategory::Work),
            (0, 0)
        );
    }
}
