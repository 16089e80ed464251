use crate::app::AppState;
use crate::domain::{UiMode, View, WorkMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_task_form_mode(app, key),
        UiMode::EditingProfile => handle_profile_form_mode(app, key),
        UiMode::EditingNote => handle_note_editing_mode(app, key),
        UiMode::ConfirmReset => handle_confirm_reset_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // View switching works from every tab
    match key.code {
        KeyCode::Char('1') => {
            app.set_view(View::Schedule);
            return Ok(false);
        }
        KeyCode::Char('2') => {
            app.set_view(View::Challenge);
            return Ok(false);
        }
        KeyCode::Char('3') => {
            app.set_view(View::Stats);
            return Ok(false);
        }
        KeyCode::Char('4') => {
            app.set_view(View::Profile);
            return Ok(false);
        }
        KeyCode::Tab => {
            app.next_view();
            return Ok(false);
        }
        KeyCode::BackTab => {
            app.previous_view();
            return Ok(false);
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),

        _ => {}
    }

    match app.view {
        View::Schedule => handle_schedule_keys(app, key),
        View::Profile => handle_profile_keys(app, key),
        // Challenge and stats tabs are read-only
        View::Challenge | View::Stats => Ok(false),
    }
}

/// Keys specific to the schedule tab
fn handle_schedule_keys(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle completion
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected_task();
            Ok(false)
        }

        // Add custom task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Remove custom task (built-ins cannot be removed)
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.remove_selected_task();
            Ok(false)
        }

        // Edit today's note
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.start_edit_note();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Keys specific to the profile tab
fn handle_profile_keys(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Edit name and goal
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_profile();
            Ok(false)
        }

        // Switch work mode
        KeyCode::Char('w') | KeyCode::Char('W') => {
            app.set_work_mode(WorkMode::Wfh);
            Ok(false)
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            app.set_work_mode(WorkMode::Office);
            Ok(false)
        }

        // Restart the challenge (asks for confirmation)
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.request_reset();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the add-task form
fn handle_task_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_task_form();
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_task_form();
            Ok(false)
        }

        // Switch between title and time
        KeyCode::Tab => {
            app.task_form_toggle_field();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.task_form_backspace();
            Ok(false)
        }

        // Add character
        KeyCode::Char(c) => {
            app.task_form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the profile form
fn handle_profile_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_profile_form();
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_profile_form();
            Ok(false)
        }

        // Switch between name and goal
        KeyCode::Tab => {
            app.profile_form_toggle_field();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.profile_form_backspace();
            Ok(false)
        }

        // Add character
        KeyCode::Char(c) => {
            app.profile_form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys while editing today's note
fn handle_note_editing_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Exit note editing (only Esc)
        KeyCode::Esc => {
            app.stop_edit_note();
            Ok(false)
        }

        // Move cursor left
        KeyCode::Left => {
            app.note_cursor_left();
            Ok(false)
        }

        // Move cursor right
        KeyCode::Right => {
            app.note_cursor_right();
            Ok(false)
        }

        // Move cursor to start
        KeyCode::Home => {
            app.note_cursor_home();
            Ok(false)
        }

        // Move cursor to end
        KeyCode::End => {
            app.note_cursor_end();
            Ok(false)
        }

        // Add newline
        KeyCode::Enter => {
            app.note_insert_char('\n');
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.note_backspace();
            Ok(false)
        }

        // Delete
        KeyCode::Delete => {
            app.note_delete();
            Ok(false)
        }

        // Add character (without Ctrl modifier so Ctrl+C still works)
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.note_insert_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the reset confirmation prompt
fn handle_confirm_reset_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Yes, wipe progress and restart
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.confirm_reset();
            Ok(false)
        }

        // No, keep everything
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_reset();
            Ok(false)
        }

        _ => Ok(false),
    }
}
