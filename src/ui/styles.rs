use crate::domain::{ChallengePhase, DayStatus};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Section heading style on the schedule
pub fn section_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Completed task style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Completion gauge style
pub fn gauge_style() -> Style {
    Style::default().fg(Color::Green).bg(Color::DarkGray)
}

/// Style of a challenge day cell
pub fn day_status_style(status: DayStatus) -> Style {
    match status {
        DayStatus::Today => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        DayStatus::Completed => Style::default().fg(Color::Green),
        DayStatus::PastIncomplete => Style::default().fg(Color::Red),
        DayStatus::Locked => Style::default().fg(Color::DarkGray),
    }
}

/// Accent color of a challenge phase
pub fn phase_style(phase: ChallengePhase) -> Style {
    let color = match phase {
        ChallengePhase::Discipline => Color::Green,
        ChallengePhase::Growth => Color::Yellow,
        ChallengePhase::Transformation => Color::Blue,
    };
    Style::default().fg(color)
}

/// Weekly bar color by score band
pub fn score_style(score: u16) -> Style {
    if score > 80 {
        Style::default().fg(Color::Green)
    } else if score > 50 {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
