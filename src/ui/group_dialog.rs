//! "New Team" modal rendered over the chat screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::{contact::Directory, group_draft::GroupDraft};

use super::{layout::centered_rect, message_input::render_input, styles};

const DIALOG_TITLE: &str = "New Team";
const DIALOG_DESCRIPTION: &str = "Select at least two friends to start a group chat.";
const SEARCH_PLACEHOLDER: &str = "Search friends…";
const NO_MATCHES_TEXT: &str = "No users found.";
const CREATE_HINT: &str = "Ctrl+S: Create group";
const KEYS_HINT: &str = "Enter: toggle | \u{2191}/\u{2193}: move | Esc: close";

pub fn render_group_dialog(
    frame: &mut Frame<'_>,
    area: Rect,
    draft: &GroupDraft,
    directory: &Directory,
) {
    let popup = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(DIALOG_TITLE)
        .borders(Borders::ALL)
        .border_style(styles::active_panel_border_style());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [description_area, search_area, list_area, footer_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .areas(inner);

    frame.render_widget(
        Paragraph::new(DIALOG_DESCRIPTION).style(styles::row_sub_style()),
        description_area,
    );
    render_input(frame, search_area, draft.search(), SEARCH_PLACEHOLDER, true);

    let items = candidate_items(draft, directory);
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(NO_MATCHES_TEXT).style(styles::placeholder_style()),
            list_area,
        );
    } else {
        let list = List::new(items).highlight_style(styles::cursor_row_style());
        let mut list_state = ListState::default();
        list_state.select(Some(draft.highlighted()));
        frame.render_stateful_widget(list, list_area, &mut list_state);
    }

    frame.render_widget(Paragraph::new(footer_lines(draft)), footer_area);
}

fn candidate_items(draft: &GroupDraft, directory: &Directory) -> Vec<ListItem<'static>> {
    draft
        .visible(directory)
        .into_iter()
        .map(|contact| {
            let check = if draft.is_candidate(&contact.id) {
                " \u{2713}"
            } else {
                ""
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("[{}] ", contact.initial()), styles::avatar_style()),
                Span::styled(contact.name.clone(), styles::row_label_style()),
                Span::styled(format!("  {}", contact.email), styles::row_sub_style()),
                Span::styled(check.to_owned(), styles::check_mark_style()),
            ]))
        })
        .collect()
}

fn footer_lines(draft: &GroupDraft) -> Vec<Line<'static>> {
    let create_style = if draft.can_create() {
        styles::action_enabled_style()
    } else {
        styles::action_disabled_style()
    };

    vec![
        Line::from(vec![
            Span::styled(CREATE_HINT, create_style),
            Span::styled(
                format!("  ({} selected)", draft.candidates().len()),
                styles::row_sub_style(),
            ),
        ]),
        Line::from(Span::styled(KEYS_HINT, styles::placeholder_style())),
    ]
}
