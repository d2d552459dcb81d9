use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput},
    selection::ChatTarget,
    shell_state::{ActivePane, DirectoryTab, Screen, ShellState},
};

use super::{
    contracts::{GroupIdSource, ShellOrchestrator},
    create_group::create_group,
    rename_group::rename_group,
    send_message::{send_message, SendMessageError},
};

pub struct DefaultShellOrchestrator<I>
where
    I: GroupIdSource,
{
    state: ShellState,
    ids: I,
}

impl<I> DefaultShellOrchestrator<I>
where
    I: GroupIdSource,
{
    pub fn new(state: ShellState, ids: I) -> Self {
        Self { state, ids }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if self.state.screen() == Screen::Dashboard {
            self.handle_dashboard_key(&key);
            return;
        }

        match self.state.active_pane() {
            ActivePane::Directory => self.handle_directory_key(&key),
            ActivePane::Compose => self.handle_compose_key(&key),
            ActivePane::Rename => self.handle_rename_key(&key),
            ActivePane::GroupDialog => self.handle_dialog_key(&key),
        }
    }

    fn handle_dashboard_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "q" => self.state.stop(),
            "d" | "esc" => self.state.set_screen(Screen::Chat),
            _ => {}
        }
    }

    fn handle_directory_key(&mut self, key: &KeyInput) {
        if key.ctrl {
            return;
        }

        match key.key.as_str() {
            "q" => self.state.stop(),
            "j" | "down" => self.state.move_cursor_down(),
            "k" | "up" => self.state.move_cursor_up(),
            "tab" => {
                let next = self.state.tab().other();
                self.state.set_tab(next);
            }
            "enter" | "l" => {
                if let Some(target) = self.state.target_under_cursor() {
                    self.open_chat(target);
                }
            }
            "i" => {
                if self.state.selection().active().is_some() {
                    self.state.set_active_pane(ActivePane::Compose);
                }
            }
            "r" => self.begin_rename(),
            "n" => {
                if self.state.tab() == DirectoryTab::Teams {
                    self.state.group_draft_mut().open();
                    self.state.set_active_pane(ActivePane::GroupDialog);
                }
            }
            "d" => self.state.set_screen(Screen::Dashboard),
            _ => {}
        }
    }

    fn handle_compose_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "esc" => self.state.set_active_pane(ActivePane::Directory),
            "enter" => self.submit_message(),
            name => {
                if !self.state.compose_mut().apply_key(name) {
                    if let Some(ch) = key.as_char() {
                        self.state.compose_mut().insert(ch);
                    }
                }
            }
        }
    }

    fn handle_rename_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "esc" => {
                self.state.finish_rename();
            }
            "enter" => self.confirm_rename(),
            name => {
                let Some(input) = self.state.rename_input_mut() else {
                    return;
                };
                if !input.apply_key(name) {
                    if let Some(ch) = key.as_char() {
                        input.insert(ch);
                    }
                }
            }
        }
    }

    fn handle_dialog_key(&mut self, key: &KeyInput) {
        if key.ctrl {
            if key.key == "s" {
                self.create_group_from_draft();
            }
            return;
        }

        match key.key.as_str() {
            "esc" => {
                self.state.group_draft_mut().close();
                self.state.set_active_pane(ActivePane::Directory);
            }
            "down" => {
                let (draft, directory) = self.state.group_draft_with_directory();
                draft.highlight_next(directory);
            }
            "up" => self.state.group_draft_mut().highlight_previous(),
            "enter" => {
                let (draft, directory) = self.state.group_draft_with_directory();
                if let Some((id, chosen)) = draft.toggle_highlighted(directory) {
                    tracing::debug!(contact = %id, chosen, "group candidate toggled");
                }
            }
            name => {
                let draft = self.state.group_draft_mut();
                if !draft.edit_search(name) {
                    if let Some(ch) = key.as_char() {
                        draft.type_char(ch);
                    }
                }
            }
        }
    }

    fn open_chat(&mut self, target: ChatTarget) {
        if let ChatTarget::Friend(id) = &target {
            if let Some(contact) = self.state.directory().get(id) {
                tracing::debug!(contact = %id, avatar = %contact.avatar, "friend chat requested");
            }
        }

        if self.state.selection_mut().select(target) {
            self.state.compose_mut().clear();
            tracing::info!(target_chat = ?self.state.selection().target(), "chat opened");
        }
        self.state.set_active_pane(ActivePane::Compose);
    }

    fn submit_message(&mut self) {
        let text = self.state.compose().text().to_owned();
        match send_message(self.state.selection_mut(), &text) {
            Ok(()) => self.state.compose_mut().clear(),
            Err(SendMessageError::EmptyMessage) => {}
            Err(error) => tracing::debug!(%error, "message not sent"),
        }
    }

    fn begin_rename(&mut self) {
        let Some(id) = self.state.active_group_id() else {
            return;
        };
        let Some(name) = self.state.groups().get(id).map(|group| group.name().to_owned()) else {
            return;
        };
        self.state.begin_rename(&name);
    }

    fn confirm_rename(&mut self) {
        let Some(input) = self.state.finish_rename() else {
            return;
        };
        let Some(id) = self.state.active_group_id().cloned() else {
            return;
        };

        if let Err(error) = rename_group(self.state.groups_mut(), &id, input.text()) {
            tracing::warn!(%error, "rename dropped");
        }
    }

    fn create_group_from_draft(&mut self) {
        if !self.state.group_draft().can_create() {
            tracing::debug!(
                candidates = self.state.group_draft().candidates().len(),
                "create group ignored below member threshold"
            );
            return;
        }

        let members = self.state.group_draft_mut().take_candidates();
        let (registry, directory) = self.state.groups_with_directory();

        match create_group(registry, directory, &mut self.ids, members) {
            Ok(id) => {
                self.state.focus_group_row(&id);
                self.state.set_active_pane(ActivePane::Directory);
                if self.state.selection_mut().select(ChatTarget::Group(id)) {
                    self.state.compose_mut().clear();
                }
            }
            Err(error) => {
                tracing::warn!(%error, "group creation rejected");
                self.state.set_active_pane(ActivePane::Directory);
            }
        }
    }
}

impl<I> ShellOrchestrator for DefaultShellOrchestrator<I>
where
    I: GroupIdSource,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
        }

        Ok(())
    }
}
