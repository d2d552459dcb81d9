use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

const DEFAULT_TITLE: &str = "Chat";

pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    title: Option<String>,
}

impl TerminalSession {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            title: None,
        })
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Updates the window title, skipping the escape sequence when unchanged.
    pub fn sync_title(&mut self, title: Option<String>) -> Result<()> {
        let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_owned());
        if self.title.as_deref() == Some(title.as_str()) {
            return Ok(());
        }

        execute!(self.terminal.backend_mut(), SetTitle(&title))?;
        self.title = Some(title);
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
