use crate::domain::{
    completion_score, day_key, days_since_start, schedule_entries, toggle_completed,
    total_applicable_tasks, AppData, CustomTask, TaskCategory, TaskEntry, UiMode, View, WorkMode,
};
use crate::persistence::{StorageError, Store};
use chrono::{DateTime, Local};

/// Input form state for adding a custom task
#[derive(Debug, Clone)]
pub struct TaskFormState {
    pub title: String,
    pub time_range: String,
    pub category: TaskCategory,
    pub editing_field: usize, // 0 = title, 1 = time range
}

/// Input form state for editing the profile
#[derive(Debug, Clone)]
pub struct ProfileFormState {
    pub name: String,
    pub goal: String,
    pub editing_field: usize, // 0 = name, 1 = goal
}

/// Main application state
pub struct AppState {
    pub store: Store,
    pub data: AppData,
    pub view: View,
    pub ui_mode: UiMode,
    pub selected_index: usize, // Position in the schedule checklist
    pub task_form: Option<TaskFormState>,
    pub profile_form: Option<ProfileFormState>,
    pub note_cursor: usize, // Byte offset into today's note
    pub use_emoji: bool,
    pub needs_save: bool,
}

impl AppState {
    pub fn new(store: Store, data: AppData, view: View) -> Self {
        Self {
            store,
            data,
            view,
            ui_mode: UiMode::Normal,
            selected_index: 0,
            task_form: None,
            profile_form: None,
            note_cursor: 0,
            use_emoji: true,
            needs_save: false,
        }
    }

    /// Key of the current calendar day; re-derived on every call so the
    /// checklist rolls over at midnight
    pub fn today_key(&self) -> String {
        day_key(Local::now().date_naive())
    }

    /// Challenge start moment from settings
    pub fn start_datetime(&self) -> DateTime<Local> {
        self.data.start_datetime()
    }

    /// Unclamped 1-based challenge day
    pub fn current_day(&self) -> i64 {
        days_since_start(self.start_datetime(), Local::now())
    }

    /// All selectable task entries in schedule order
    pub fn entries(&self) -> Vec<TaskEntry> {
        schedule_entries(self.data.settings.work_mode, &self.data.custom_tasks)
    }

    /// Entry under the cursor
    pub fn selected_entry(&self) -> Option<TaskEntry> {
        self.entries().into_iter().nth(self.selected_index)
    }

    /// Today's recorded score, zero before the first interaction of the day
    pub fn today_score(&self) -> f64 {
        self.data
            .day(&self.today_key())
            .map(|day| day.score)
            .unwrap_or(0.0)
    }

    /// Today's note text, empty before the first note edit
    pub fn today_note(&self) -> String {
        self.data
            .day(&self.today_key())
            .map(|day| day.daily_note.clone())
            .unwrap_or_default()
    }

    /// Completed ids recorded for today
    pub fn today_completed(&self) -> Vec<String> {
        self.data
            .day(&self.today_key())
            .map(|day| day.completed_task_ids.clone())
            .unwrap_or_default()
    }

    // === Selection ===

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.entries().len() {
            self.selected_index += 1;
        }
    }

    /// Keep the cursor inside the list after it shrinks
    fn clamp_selection(&mut self) {
        let count = self.entries().len();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    // === View switching ===

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn next_view(&mut self) {
        self.view = self.view.next();
    }

    pub fn previous_view(&mut self) {
        self.view = self.view.previous();
    }

    // === Task completion ===

    /// Toggle completion of the selected task for today and recompute the
    /// score synchronously
    pub fn toggle_selected_task(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };

        let total = total_applicable_tasks(self.data.settings.work_mode, &self.data.custom_tasks);
        let key = self.today_key();

        let day = self.data.day_mut(&key);
        toggle_completed(&mut day.completed_task_ids, &entry.id);
        day.score = completion_score(day.completed_task_ids.len(), total);

        self.needs_save = true;
    }

    // === Custom tasks ===

    /// Open the add-task form, targeted at the section under the cursor
    pub fn start_add_task(&mut self) {
        let category = self
            .selected_entry()
            .map(|entry| entry.category)
            .unwrap_or(TaskCategory::Morning);

        self.task_form = Some(TaskFormState {
            title: String::new(),
            time_range: String::new(),
            category,
            editing_field: 0,
        });
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn task_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.task_form {
            match form.editing_field {
                0 => form.title.push(c),
                _ => form.time_range.push(c),
            }
        }
    }

    pub fn task_form_backspace(&mut self) {
        if let Some(form) = &mut self.task_form {
            match form.editing_field {
                0 => {
                    form.title.pop();
                }
                _ => {
                    form.time_range.pop();
                }
            }
        }
    }

    pub fn task_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.task_form {
            form.editing_field = (form.editing_field + 1) % 2;
        }
    }

    /// Submit the add-task form. An empty title creates nothing; an empty
    /// time range gets the placeholder label.
    pub fn submit_task_form(&mut self) {
        let Some(form) = self.task_form.take() else {
            self.ui_mode = UiMode::Normal;
            return;
        };

        if !form.title.trim().is_empty() {
            let task = CustomTask::new(
                form.title,
                form.time_range,
                form.category,
                Local::now(),
                &self.data.custom_tasks,
            );
            self.data.custom_tasks.push(task);
            self.needs_save = true;
        }

        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_task_form(&mut self) {
        self.task_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Remove the selected task if it is a custom one; built-ins are fixed
    pub fn remove_selected_task(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        if !entry.is_custom {
            return;
        }

        self.data.custom_tasks.retain(|task| task.id != entry.id);
        self.clamp_selection();
        self.needs_save = true;
    }

    // === Daily note ===

    /// Enter note editing with the cursor at the end of today's note
    pub fn start_edit_note(&mut self) {
        self.note_cursor = self.today_note().len();
        self.ui_mode = UiMode::EditingNote;
    }

    pub fn stop_edit_note(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn note_insert_char(&mut self, c: char) {
        let key = self.today_key();
        let day = self.data.day_mut(&key);
        let pos = clamp_offset(&day.daily_note, self.note_cursor);

        day.daily_note.insert(pos, c);
        self.note_cursor = pos + c.len_utf8();
        self.needs_save = true;
    }

    pub fn note_backspace(&mut self) {
        let key = self.today_key();
        let day = self.data.day_mut(&key);
        let pos = clamp_offset(&day.daily_note, self.note_cursor);

        if pos > 0 {
            let prev = prev_char_boundary(&day.daily_note, pos);
            day.daily_note.remove(prev);
            self.note_cursor = prev;
            self.needs_save = true;
        }
    }

    pub fn note_delete(&mut self) {
        let key = self.today_key();
        let day = self.data.day_mut(&key);
        let pos = clamp_offset(&day.daily_note, self.note_cursor);

        if pos < day.daily_note.len() {
            day.daily_note.remove(pos);
            self.note_cursor = pos;
            self.needs_save = true;
        }
    }

    pub fn note_cursor_left(&mut self) {
        let note = self.today_note();
        let pos = clamp_offset(&note, self.note_cursor);
        self.note_cursor = prev_char_boundary(&note, pos);
    }

    pub fn note_cursor_right(&mut self) {
        let note = self.today_note();
        let pos = clamp_offset(&note, self.note_cursor);
        if pos < note.len() {
            self.note_cursor = next_char_boundary(&note, pos);
        }
    }

    pub fn note_cursor_home(&mut self) {
        self.note_cursor = 0;
    }

    pub fn note_cursor_end(&mut self) {
        self.note_cursor = self.today_note().len();
    }

    // === Profile ===

    pub fn start_edit_profile(&mut self) {
        self.profile_form = Some(ProfileFormState {
            name: self.data.settings.name.clone(),
            goal: self.data.settings.goal.clone(),
            editing_field: 0,
        });
        self.ui_mode = UiMode::EditingProfile;
    }

    pub fn profile_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.profile_form {
            match form.editing_field {
                0 => form.name.push(c),
                _ => form.goal.push(c),
            }
        }
    }

    pub fn profile_form_backspace(&mut self) {
        if let Some(form) = &mut self.profile_form {
            match form.editing_field {
                0 => {
                    form.name.pop();
                }
                _ => {
                    form.goal.pop();
                }
            }
        }
    }

    pub fn profile_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.profile_form {
            form.editing_field = (form.editing_field + 1) % 2;
        }
    }

    /// Apply the profile form; any text is accepted, including empty
    pub fn submit_profile_form(&mut self) {
        if let Some(form) = self.profile_form.take() {
            self.data.settings.name = form.name;
            self.data.settings.goal = form.goal;
            self.needs_save = true;
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_profile_form(&mut self) {
        self.profile_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Switch the work-period task list. Historical scores are not
    /// recomputed for the new catalog size.
    pub fn set_work_mode(&mut self, mode: WorkMode) {
        if self.data.settings.work_mode != mode {
            self.data.settings.work_mode = mode;
            self.clamp_selection();
            self.needs_save = true;
        }
    }

    // === Reset ===

    /// Ask for confirmation before the destructive reset
    pub fn request_reset(&mut self) {
        self.ui_mode = UiMode::ConfirmReset;
    }

    /// Discard history and custom tasks, restore defaults with a fresh start
    pub fn confirm_reset(&mut self) {
        self.data.reset(Local::now());
        self.selected_index = 0;
        self.note_cursor = 0;
        self.ui_mode = UiMode::Normal;
        self.needs_save = true;
    }

    pub fn cancel_reset(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    // === Persistence ===

    /// Persist the whole state. Not retried on failure; the caller logs the
    /// error and carries on with the in-memory copy.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let result = self.store.save(&self.data);
        self.needs_save = false;
        result
    }
}

/// Clamp a byte offset to the nearest char boundary at or before it.
/// The cursor can go stale when the note rolls over at midnight.
fn clamp_offset(s: &str, pos: usize) -> usize {
    let mut p = pos.min(s.len());
    while p > 0 && !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

/// Largest char boundary strictly before pos
fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos.saturating_sub(1);
    while p > 0 && !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

/// Smallest char boundary strictly after pos
fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = (pos + 1).min(s.len());
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}
