//! Single-line input field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::text_input::TextInputState;

use super::{layout::prefix_width, styles};

/// Prompt symbol shown before the input text.
const PROMPT_SYMBOL: &str = "> ";

/// Renders a bordered input; places the terminal cursor when focused.
pub fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    input: &TextInputState,
    placeholder: &str,
    is_focused: bool,
) {
    let border_style = if is_focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let paragraph = Paragraph::new(build_input_line(input, placeholder, is_focused)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);

    if is_focused {
        let offset = prefix_width(input.text(), input.cursor()).min(u16::MAX as usize) as u16;
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(offset);
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

fn build_input_line(input: &TextInputState, placeholder: &str, is_focused: bool) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if input.text().is_empty() && !is_focused {
        Line::from(vec![
            prompt,
            Span::styled(placeholder.to_owned(), styles::input_placeholder_style()),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(input.text().to_owned(), styles::input_text_style()),
        ])
    }
}
