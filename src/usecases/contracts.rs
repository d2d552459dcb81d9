use anyhow::Result;

use crate::domain::{events::AppEvent, group::GroupId, shell_state::ShellState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;

    /// True once the source can never yield another event.
    fn is_exhausted(&self) -> bool {
        false
    }
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Source of group ids; every call yields an id not handed out before.
pub trait GroupIdSource {
    fn next_id(&mut self) -> GroupId;
}
