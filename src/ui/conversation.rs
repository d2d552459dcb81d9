//! Right-hand pane: chat header, message list and compose field.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{
    message::Message,
    selection::{ActiveChat, ChatTarget},
    shell_state::{ActivePane, ShellState},
};

use super::{
    layout::{fit_width, wrap_to_width},
    message_input::render_input,
    styles,
};

pub const NO_SELECTION_TEXT: &str = "Click on a chat to continue";
const COMPOSE_PLACEHOLDER: &str = "Type your message…";
const RENAME_PLACEHOLDER: &str = "Team name";

/// Heading of the open chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatHeader {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub renamable: bool,
}

pub fn chat_header(state: &ShellState, chat: &ActiveChat) -> ChatHeader {
    match chat.target() {
        ChatTarget::Friend(id) => match state.directory().get(id) {
            Some(contact) => ChatHeader {
                badge: contact.initial(),
                title: contact.name.clone(),
                subtitle: contact.email.clone(),
                renamable: false,
            },
            None => unknown_header(id.as_str()),
        },
        ChatTarget::Group(id) => match state.groups().get(id) {
            Some(group) => ChatHeader {
                badge: group
                    .name()
                    .chars()
                    .next()
                    .map(String::from)
                    .unwrap_or_default(),
                title: group.name().to_owned(),
                subtitle: state.directory().first_names(group.members()),
                renamable: true,
            },
            None => unknown_header(id.as_str()),
        },
    }
}

fn unknown_header(id: &str) -> ChatHeader {
    ChatHeader {
        badge: "?".to_owned(),
        title: id.to_owned(),
        subtitle: String::new(),
        renamable: false,
    }
}

pub fn render_conversation_panel(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let Some(chat) = state.selection().active() else {
        render_placeholder(frame, area);
        return;
    };

    let [header_area, messages_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .areas(area);

    let header = chat_header(state, chat);
    match state.rename_input() {
        Some(input) => render_input(frame, header_area, input, RENAME_PLACEHOLDER, true),
        None => render_header(frame, header_area, &header),
    }

    let messages_block = Block::default()
        .title("Messages")
        .borders(Borders::ALL)
        .border_style(styles::inactive_panel_border_style());
    let inner = messages_block.inner(messages_area);
    frame.render_widget(messages_block, messages_area);

    let lines = message_lines(
        chat.conversation().messages(),
        inner.width as usize,
        inner.height as usize,
    );
    frame.render_widget(Paragraph::new(lines), inner);

    render_input(
        frame,
        input_area,
        state.compose(),
        COMPOSE_PLACEHOLDER,
        state.active_pane() == ActivePane::Compose,
    );
}

fn render_placeholder(frame: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::inactive_panel_border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, middle, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

    let prompt = Paragraph::new(NO_SELECTION_TEXT)
        .style(styles::placeholder_style())
        .alignment(Alignment::Center);
    frame.render_widget(prompt, middle);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, header: &ChatHeader) {
    let width = area.width.saturating_sub(2) as usize;
    let mut title = vec![
        Span::styled(format!("[{}] ", header.badge), styles::avatar_style()),
        Span::styled(
            fit_width(&header.title, width.saturating_sub(4)),
            styles::row_label_style(),
        ),
    ];
    if header.renamable {
        title.push(Span::styled("  (r: rename)", styles::placeholder_style()));
    }

    let lines = vec![
        Line::from(title),
        Line::from(Span::styled(
            fit_width(&header.subtitle, width),
            styles::row_sub_style(),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::inactive_panel_border_style()),
    );
    frame.render_widget(paragraph, area);
}

/// Lays messages out bottom-anchored: user messages on the right, agent on
/// the left, each wrapped to three quarters of the width. Only the newest
/// rows that fit in `height` are returned.
pub fn message_lines(messages: &[Message], width: usize, height: usize) -> Vec<Line<'static>> {
    let bubble_width = (width * 3 / 4).max(1);
    let mut lines = Vec::new();

    for (index, message) in messages.iter().enumerate() {
        if index > 0 {
            lines.push(Line::raw(""));
        }

        let (style, alignment) = if message.role.is_user() {
            (styles::user_message_style(), Alignment::Right)
        } else {
            (styles::agent_message_style(), Alignment::Left)
        };

        for row in wrap_to_width(&message.content, bubble_width) {
            lines.push(Line::styled(row, style).alignment(alignment));
        }
    }

    let skip = lines.len().saturating_sub(height);
    lines.split_off(skip)
}
