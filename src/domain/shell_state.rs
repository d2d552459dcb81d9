use super::{
    contact::Directory,
    group::{GroupId, GroupRegistry},
    group_draft::GroupDraft,
    selection::{ChatTarget, SelectionState},
    text_input::TextInputState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Chat,
    Dashboard,
}

/// Which element receives key input on the chat screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    Directory,
    Compose,
    Rename,
    GroupDialog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryTab {
    #[default]
    Friends,
    Teams,
}

impl DirectoryTab {
    pub const ALL: [DirectoryTab; 2] = [DirectoryTab::Friends, DirectoryTab::Teams];

    pub fn label(self) -> &'static str {
        match self {
            DirectoryTab::Friends => "Friends",
            DirectoryTab::Teams => "Teams",
        }
    }

    pub fn index(self) -> usize {
        match self {
            DirectoryTab::Friends => 0,
            DirectoryTab::Teams => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            DirectoryTab::Friends => DirectoryTab::Teams,
            DirectoryTab::Teams => DirectoryTab::Friends,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    screen: Screen,
    active_pane: ActivePane,
    tab: DirectoryTab,
    friend_cursor: usize,
    team_cursor: usize,
    directory: Directory,
    groups: GroupRegistry,
    selection: SelectionState,
    compose: TextInputState,
    rename: Option<TextInputState>,
    group_draft: GroupDraft,
    display_name: String,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new("Arjun")
    }
}

impl ShellState {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            running: true,
            screen: Screen::Chat,
            active_pane: ActivePane::Directory,
            tab: DirectoryTab::Friends,
            friend_cursor: 0,
            team_cursor: 0,
            directory: Directory::seeded(),
            groups: GroupRegistry::default(),
            selection: SelectionState::default(),
            compose: TextInputState::default(),
            rename: None,
            group_draft: GroupDraft::default(),
            display_name: display_name.into(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn set_active_pane(&mut self, pane: ActivePane) {
        self.active_pane = pane;
    }

    pub fn tab(&self) -> DirectoryTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: DirectoryTab) {
        self.tab = tab;
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut GroupRegistry {
        &mut self.groups
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub fn compose(&self) -> &TextInputState {
        &self.compose
    }

    pub fn compose_mut(&mut self) -> &mut TextInputState {
        &mut self.compose
    }

    pub fn group_draft(&self) -> &GroupDraft {
        &self.group_draft
    }

    pub fn group_draft_mut(&mut self) -> &mut GroupDraft {
        &mut self.group_draft
    }

    /// Draft plus the directory it filters, borrowed together.
    pub fn group_draft_with_directory(&mut self) -> (&mut GroupDraft, &Directory) {
        (&mut self.group_draft, &self.directory)
    }

    /// Registry plus the directory its members come from, borrowed together.
    pub fn groups_with_directory(&mut self) -> (&mut GroupRegistry, &Directory) {
        (&mut self.groups, &self.directory)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Cursor row in the list shown for the current tab.
    pub fn cursor(&self) -> usize {
        match self.tab {
            DirectoryTab::Friends => self.friend_cursor,
            DirectoryTab::Teams => self.team_cursor,
        }
    }

    pub fn list_len(&self) -> usize {
        match self.tab {
            DirectoryTab::Friends => self.directory.contacts().len(),
            DirectoryTab::Teams => self.groups.groups().len(),
        }
    }

    pub fn move_cursor_down(&mut self) {
        let last = self.list_len().saturating_sub(1);
        let cursor = self.cursor_mut();
        *cursor = (*cursor + 1).min(last);
    }

    pub fn move_cursor_up(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    /// Chat target for the row under the cursor.
    pub fn target_under_cursor(&self) -> Option<ChatTarget> {
        let cursor = self.cursor();
        match self.tab {
            DirectoryTab::Friends => self
                .directory
                .contacts()
                .get(cursor)
                .map(|contact| ChatTarget::Friend(contact.id.clone())),
            DirectoryTab::Teams => self
                .groups
                .groups()
                .get(cursor)
                .map(|group| ChatTarget::Group(group.id().clone())),
        }
    }

    /// Switches to the Teams tab with the cursor on `id`.
    pub fn focus_group_row(&mut self, id: &GroupId) {
        self.tab = DirectoryTab::Teams;
        if let Some(position) = self.groups.position(id) {
            self.team_cursor = position;
        }
    }

    /// Group of the active chat, if the active chat is a group.
    pub fn active_group_id(&self) -> Option<&GroupId> {
        self.selection.target().and_then(ChatTarget::as_group)
    }

    pub fn rename_input(&self) -> Option<&TextInputState> {
        self.rename.as_ref()
    }

    pub fn rename_input_mut(&mut self) -> Option<&mut TextInputState> {
        self.rename.as_mut()
    }

    pub fn begin_rename(&mut self, current_name: &str) {
        self.rename = Some(TextInputState::with_text(current_name));
        self.active_pane = ActivePane::Rename;
    }

    /// Closes the rename editor and hands back what was typed.
    pub fn finish_rename(&mut self) -> Option<TextInputState> {
        self.active_pane = ActivePane::Directory;
        self.rename.take()
    }

    /// Terminal window title; follows the active group's name.
    pub fn window_title(&self) -> Option<String> {
        let id = self.active_group_id()?;
        self.groups
            .get(id)
            .map(|group| format!("{} \u{2022} Chat", group.name()))
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.tab {
            DirectoryTab::Friends => &mut self.friend_cursor,
            DirectoryTab::Teams => &mut self.team_cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{contact::ContactId, group::Group};

    fn with_group(state: &mut ShellState, id: &str, name: &str) -> GroupId {
        let id = GroupId::new(id);
        state.groups_mut().push(Group::new(
            id.clone(),
            name,
            vec![ContactId::new("u1"), ContactId::new("u2")],
        ));
        id
    }

    #[test]
    fn default_state_is_running_on_friends_without_selection() {
        let state = ShellState::default();

        assert!(state.is_running());
        assert_eq!(state.screen(), Screen::Chat);
        assert_eq!(state.tab(), DirectoryTab::Friends);
        assert_eq!(state.active_pane(), ActivePane::Directory);
        assert!(state.selection().target().is_none());
        assert_eq!(state.display_name(), "Arjun");
    }

    #[test]
    fn cursor_moves_within_friend_list() {
        let mut state = ShellState::default();

        state.move_cursor_down();
        state.move_cursor_down();
        state.move_cursor_down();
        assert_eq!(state.cursor(), 2);

        state.move_cursor_up();
        assert_eq!(
            state.target_under_cursor(),
            Some(ChatTarget::Friend(ContactId::new("u2")))
        );
    }

    #[test]
    fn cursors_are_tracked_per_tab() {
        let mut state = ShellState::default();
        state.move_cursor_down();

        state.set_tab(DirectoryTab::Teams);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.target_under_cursor(), None);

        state.set_tab(DirectoryTab::Friends);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn focus_group_row_switches_tab_and_cursor() {
        let mut state = ShellState::default();
        with_group(&mut state, "g-1", "A");
        let second = with_group(&mut state, "g-2", "B");

        state.focus_group_row(&second);

        assert_eq!(state.tab(), DirectoryTab::Teams);
        assert_eq!(
            state.target_under_cursor(),
            Some(ChatTarget::Group(second))
        );
    }

    #[test]
    fn window_title_tracks_active_group_name() {
        let mut state = ShellState::default();
        assert_eq!(state.window_title(), None);

        let id = with_group(&mut state, "g-1", "Sofia, Jackson");
        state.selection_mut().select(ChatTarget::Group(id.clone()));
        assert_eq!(
            state.window_title().as_deref(),
            Some("Sofia, Jackson \u{2022} Chat")
        );

        state.groups_mut().rename(&id, "Study Squad");
        assert_eq!(
            state.window_title().as_deref(),
            Some("Study Squad \u{2022} Chat")
        );
    }

    #[test]
    fn rename_editor_is_prefilled_and_returns_to_directory() {
        let mut state = ShellState::default();

        state.begin_rename("Old name");
        assert_eq!(state.active_pane(), ActivePane::Rename);
        assert_eq!(state.rename_input().map(|i| i.text()), Some("Old name"));

        let typed = state.finish_rename();
        assert_eq!(typed.map(|i| i.text().to_owned()), Some("Old name".to_owned()));
        assert_eq!(state.active_pane(), ActivePane::Directory);
        assert!(state.rename_input().is_none());
    }

    #[test]
    fn tab_other_flips_between_two_tabs() {
        assert_eq!(DirectoryTab::Friends.other(), DirectoryTab::Teams);
        assert_eq!(DirectoryTab::Teams.other(), DirectoryTab::Friends);
        assert_eq!(DirectoryTab::Teams.index(), 1);
    }
}
