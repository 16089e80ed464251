pub mod challenge_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod profile_pane;
pub mod schedule_pane;
pub mod stats_pane;
pub mod styles;
pub mod tab_bar;

use crate::app::AppState;
use crate::domain::View;
use challenge_pane::render_challenge_pane;
use input_form::{render_profile_form, render_task_form};
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_reset_modal;
use profile_pane::render_profile_pane;
use ratatui::Frame;
use schedule_pane::render_schedule_pane;
use stats_pane::render_stats_pane;
use tab_bar::render_tab_bar;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_tab_bar(f, app, layout.tabs_area);
    render_keybindings(f, app, layout.hints_area);

    match app.view {
        View::Schedule => render_schedule_pane(f, app, layout.content_area),
        View::Challenge => render_challenge_pane(f, app, layout.content_area),
        View::Stats => render_stats_pane(f, app, layout.content_area),
        View::Profile => render_profile_pane(f, app, layout.content_area),
    }

    // Render input forms if active
    if app.task_form.is_some() {
        render_task_form(f, app, size);
    }
    if app.profile_form.is_some() {
        render_profile_form(f, app, size);
    }

    // Render the reset prompt if active
    render_reset_modal(f, app, size);
}
