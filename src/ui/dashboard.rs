//! Course summary tiles.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::course::{course_cards, greeting, CourseCard, Trend, GREETING_SUBLINE};

use super::{layout::fit_width, styles};

const CARD_MIN_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 6;
const MAX_COLUMNS: usize = 4;

pub fn render_dashboard(frame: &mut Frame<'_>, area: Rect, display_name: &str, hour: u32) {
    let [greeting_area, cards_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .areas(area);

    let greeting_tile = Paragraph::new(vec![
        Line::from(Span::styled(
            greeting(hour, display_name),
            styles::greeting_style(),
        )),
        Line::from(Span::styled(GREETING_SUBLINE, styles::row_sub_style())),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::inactive_panel_border_style()),
    );
    frame.render_widget(greeting_tile, greeting_area);

    let cards = course_cards();
    let columns = column_count(cards_area.width);
    let rows: Vec<&[CourseCard]> = cards.chunks(columns).collect();

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows.iter().map(|_| Constraint::Length(CARD_HEIGHT)))
        .split(cards_area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
            .split(*row_area);

        for (card, cell) in row.iter().zip(cells.iter()) {
            render_card(frame, *cell, card);
        }
    }
}

/// Number of card columns that fit in `width`.
pub fn column_count(width: u16) -> usize {
    ((width / CARD_MIN_WIDTH) as usize).clamp(1, MAX_COLUMNS)
}

fn render_card(frame: &mut Frame<'_>, area: Rect, card: &CourseCard) {
    let width = area.width.saturating_sub(2) as usize;
    let trend_style = match card.trend {
        Trend::Up => styles::trend_up_style(),
        Trend::Down => styles::trend_down_style(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            fit_width(card.title, width),
            styles::row_sub_style(),
        )),
        Line::from(Span::styled(card.badge(), trend_style)),
        Line::from(Span::styled(card.unanswered_line(), styles::row_label_style())),
    ];
    if let Some(footer) = card.footer {
        lines.push(Line::from(Span::styled(
            fit_width(footer, width),
            styles::placeholder_style(),
        )));
    }

    let tile = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(card.code, styles::course_code_style()))
            .borders(Borders::ALL)
            .border_style(styles::inactive_panel_border_style()),
    );
    frame.render_widget(tile, area);
}

/// Plain-text rendition of the dashboard for non-interactive output.
pub fn plain_text_lines(display_name: &str, hour: u32) -> Vec<String> {
    let mut lines = vec![greeting(hour, display_name), GREETING_SUBLINE.to_owned()];

    for card in course_cards() {
        lines.push(String::new());
        lines.push(format!("{}  {}", card.code, card.title));
        lines.push(format!("  {}", card.badge()));
        lines.push(format!("  {}", card.unanswered_line()));
        if let Some(footer) = card.footer {
            lines.push(format!("  {footer}"));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_scales_with_width() {
        assert_eq!(column_count(20), 1);
        assert_eq!(column_count(65), 2);
        assert_eq!(column_count(200), MAX_COLUMNS);
    }

    #[test]
    fn plain_text_starts_with_greeting() {
        let lines = plain_text_lines("Arjun", 9);

        assert_eq!(lines[0], "Good Morning, Arjun.");
        assert_eq!(lines[1], GREETING_SUBLINE);
    }

    #[test]
    fn plain_text_lists_every_course() {
        let lines = plain_text_lines("Arjun", 20);

        for code in ["COMP2123", "COMP2017", "MATH2069", "ENGG3112", "ISYS2110"] {
            assert!(
                lines.iter().any(|line| line.starts_with(code)),
                "missing {code}"
            );
        }
        assert!(lines.iter().any(|line| line.contains("12 Unanswered")));
    }
}
