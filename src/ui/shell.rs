use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        tick_rate_ms = context.config.ui.tick_rate_ms,
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    run_loop(event_source, orchestrator, |state| {
        terminal.sync_title(state.window_title())?;
        terminal.draw(|frame| view::render(frame, state))
    })?;

    tracing::info!("TUI shell stopped");
    Ok(())
}

/// Draws, then feeds one event, until the orchestrator stops running.
fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&crate::domain::shell_state::ShellState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator.state())?;

        match event_source.next_event()? {
            Some(event) => orchestrator.handle_event(event)?,
            None if event_source.is_exhausted() => break,
            None => {}
        }
    }

    Ok(())
}
