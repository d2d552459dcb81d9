//! Geometry and column-width helpers shared by the views.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rectangle of `percent_x` by `percent_y` centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .areas(area);

    let [_, center, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .areas(middle);

    center
}

/// Cuts `text` to at most `width` display columns, ending with "..." when cut.
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_owned();
    }

    let budget = width.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        out.push(ch);
    }

    if width >= 3 {
        out.push_str("...");
    }
    out
}

/// Breaks `text` into rows no wider than `width` columns.
///
/// Breaks fall on character boundaries; explicit newlines start new rows.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut used = 0;
        for ch in paragraph.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push(ch);
            used += ch_width;
        }
        rows.push(row);
    }

    rows
}

/// Display width of the first `chars` characters of `text`.
pub fn prefix_width(text: &str, chars: usize) -> usize {
    text.chars()
        .take(chars)
        .map(|ch| ch.width().unwrap_or(0))
        .sum()
}
