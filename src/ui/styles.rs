//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Panel styles
// =============================================================================

/// Border of the pane that owns keyboard focus.
pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Border of every other pane.
pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Selected tab label.
pub fn tab_highlight_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Row under the list cursor.
pub fn cursor_row_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

// =============================================================================
// Directory styles
// =============================================================================

/// Contact or group name.
pub fn row_label_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Email or member list under the name.
pub fn row_sub_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Avatar initial badge.
pub fn avatar_style() -> Style {
    Style::default().fg(Color::Magenta)
}

/// Marker for the row whose chat is open.
pub fn active_marker_style() -> Style {
    Style::default().fg(Color::Green)
}

// =============================================================================
// Conversation styles
// =============================================================================

pub fn agent_message_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn user_message_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Placeholder text for empty states.
pub fn placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Input styles
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Dialog styles
// =============================================================================

/// Check mark next to chosen candidates.
pub fn check_mark_style() -> Style {
    Style::default().fg(Color::Green)
}

/// "Create group" hint when enough candidates are chosen.
pub fn action_enabled_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// "Create group" hint while the action is unavailable.
pub fn action_disabled_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Dashboard styles
// =============================================================================

pub fn greeting_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn course_code_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn trend_up_style() -> Style {
    Style::default().fg(Color::Green)
}

pub fn trend_down_style() -> Style {
    Style::default().fg(Color::Red)
}
