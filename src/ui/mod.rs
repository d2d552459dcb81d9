//! UI layer: rendering and interaction entry points (CLI/TUI).

mod conversation;
mod dashboard;
mod directory;
mod event_source;
mod group_dialog;
mod layout;
mod message_input;
pub mod shell;
mod styles;
mod terminal;
mod view;

pub(crate) use dashboard::plain_text_lines;
pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
