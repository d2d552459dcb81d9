use chrono::{Local, Timelike};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use crate::domain::shell_state::{ActivePane, Screen, ShellState};

use super::{
    conversation::render_conversation_panel, dashboard::render_dashboard,
    directory::render_directory_panel, group_dialog::render_group_dialog, styles,
};

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    render_at_hour(frame, state, Local::now().hour());
}

fn render_at_hour(frame: &mut Frame<'_>, state: &ShellState, hour: u32) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    match state.screen() {
        Screen::Dashboard => {
            render_dashboard(frame, content_area, state.display_name(), hour);
        }
        Screen::Chat => {
            let [directory_area, conversation_area] = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
                .areas(content_area);

            render_directory_panel(frame, directory_area, state);
            render_conversation_panel(frame, conversation_area, state);

            if state.group_draft().is_open() {
                render_group_dialog(
                    frame,
                    content_area,
                    state.group_draft(),
                    state.directory(),
                );
            }
        }
    }

    let status = Paragraph::new(status_line(state)).style(styles::row_sub_style());
    frame.render_widget(status, status_area);
}

fn status_line(state: &ShellState) -> String {
    if state.screen() == Screen::Dashboard {
        return "view: dashboard | d/Esc: back to chat | q: quit".to_owned();
    }

    let hint = match state.active_pane() {
        ActivePane::Directory => {
            "j/k: navigate | Tab: friends/teams | Enter: open | i: compose | r: rename | d: dashboard | q: quit"
        }
        ActivePane::Compose => "Enter: send | Esc: back to list",
        ActivePane::Rename => "Enter: save name | Esc: cancel",
        ActivePane::GroupDialog => "type to search | Enter: toggle | Ctrl+S: create | Esc: close",
    };
    format!("view: chat | {hint}")
}
