//! Left-hand pane: Friends/Teams tabs over the contact and group lists.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::domain::{
    selection::ChatTarget,
    shell_state::{ActivePane, DirectoryTab, ShellState},
};

use super::{layout::fit_width, styles};

const NO_TEAMS_TEXT: &str = "No teams yet. Press 'n' to create one.";
const GROUP_BADGE: &str = "#";

/// Display data for one directory row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRow {
    pub badge: String,
    pub label: String,
    pub sub: String,
    pub active: bool,
}

pub fn directory_rows(state: &ShellState) -> Vec<DirectoryRow> {
    let selection = state.selection();
    match state.tab() {
        DirectoryTab::Friends => state
            .directory()
            .contacts()
            .iter()
            .map(|contact| DirectoryRow {
                badge: contact.initial(),
                label: contact.name.clone(),
                sub: contact.email.clone(),
                active: selection.is_selected(&ChatTarget::Friend(contact.id.clone())),
            })
            .collect(),
        DirectoryTab::Teams => state
            .groups()
            .groups()
            .iter()
            .map(|group| DirectoryRow {
                badge: GROUP_BADGE.to_owned(),
                label: group.name().to_owned(),
                sub: state.directory().first_names(group.members()),
                active: selection.is_selected(&ChatTarget::Group(group.id().clone())),
            })
            .collect(),
    }
}

pub fn render_directory_panel(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let border_style = if state.active_pane() == ActivePane::Directory {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let mut block = Block::default()
        .title("Chats")
        .borders(Borders::ALL)
        .border_style(border_style);
    if state.tab() == DirectoryTab::Teams {
        block = block.title_bottom("n: New Team");
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [tabs_area, list_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .areas(inner);

    let tabs = Tabs::new(DirectoryTab::ALL.iter().map(|tab| tab.label()))
        .select(state.tab().index())
        .highlight_style(styles::tab_highlight_style());
    frame.render_widget(tabs, tabs_area);

    let rows = directory_rows(state);
    if rows.is_empty() {
        let empty = Paragraph::new(NO_TEAMS_TEXT).style(styles::placeholder_style());
        frame.render_widget(empty, list_area);
        return;
    }

    let width = list_area.width as usize;
    let items: Vec<ListItem<'static>> = rows.iter().map(|row| row_item(row, width)).collect();
    let list = List::new(items).highlight_style(styles::cursor_row_style());

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor()));
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

fn row_item(row: &DirectoryRow, width: usize) -> ListItem<'static> {
    // "[X] " badge + trailing " ●" marker
    let text_width = width.saturating_sub(6);
    let marker = if row.active { " \u{25CF}" } else { "" };

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(format!("[{}] ", row.badge), styles::avatar_style()),
            Span::styled(fit_width(&row.label, text_width), styles::row_label_style()),
            Span::styled(marker.to_owned(), styles::active_marker_style()),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(fit_width(&row.sub, text_width), styles::row_sub_style()),
        ]),
    ])
}
