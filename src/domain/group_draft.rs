//! Transient state of the "New Team" dialog.

use super::{
    contact::{Contact, ContactId, Directory},
    text_input::TextInputState,
};

/// Smallest candidate set that may become a group.
pub const MIN_GROUP_MEMBERS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupDraft {
    open: bool,
    /// Selection order is kept; it drives the default group name.
    candidates: Vec<ContactId>,
    search: TextInputState,
    highlighted: usize,
}

impl GroupDraft {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the dialog. Candidates and query survive until a group is created.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn candidates(&self) -> &[ContactId] {
        &self.candidates
    }

    pub fn is_candidate(&self, id: &ContactId) -> bool {
        self.candidates.contains(id)
    }

    pub fn can_create(&self) -> bool {
        self.candidates.len() >= MIN_GROUP_MEMBERS
    }

    /// Adds `id` or removes it if already chosen. Returns true when now chosen.
    pub fn toggle(&mut self, id: &ContactId) -> bool {
        if let Some(index) = self.candidates.iter().position(|c| c == id) {
            self.candidates.remove(index);
            false
        } else {
            self.candidates.push(id.clone());
            true
        }
    }

    pub fn search(&self) -> &TextInputState {
        &self.search
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Contacts matching the current query.
    pub fn visible<'a>(&self, directory: &'a Directory) -> Vec<&'a Contact> {
        directory.search(self.search.text())
    }

    pub fn type_char(&mut self, ch: char) {
        if self.search.insert(ch) {
            self.highlighted = 0;
        }
    }

    pub fn edit_search(&mut self, key: &str) -> bool {
        let consumed = self.search.apply_key(key);
        if consumed {
            self.highlighted = 0;
        }
        consumed
    }

    pub fn highlight_next(&mut self, directory: &Directory) {
        let last = self.visible(directory).len().saturating_sub(1);
        self.highlighted = (self.highlighted + 1).min(last);
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Toggles the highlighted row, if the filter left any.
    pub fn toggle_highlighted(&mut self, directory: &Directory) -> Option<(ContactId, bool)> {
        let id = self
            .visible(directory)
            .get(self.highlighted)
            .map(|contact| contact.id.clone())?;
        let chosen = self.toggle(&id);
        Some((id, chosen))
    }

    /// Drains the candidate set, resets the query and closes the dialog.
    pub fn take_candidates(&mut self) -> Vec<ContactId> {
        self.open = false;
        self.search.clear();
        self.highlighted = 0;
        std::mem::take(&mut self.candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ContactId {
        ContactId::new(raw)
    }

    #[test]
    fn toggle_twice_restores_the_previous_set() {
        let mut draft = GroupDraft::default();
        draft.toggle(&id("u1"));
        let before = draft.candidates().to_vec();

        assert!(draft.toggle(&id("u2")));
        assert!(!draft.toggle(&id("u2")));

        assert_eq!(draft.candidates(), before.as_slice());
    }

    #[test]
    fn create_requires_two_candidates() {
        let mut draft = GroupDraft::default();
        assert!(!draft.can_create());

        draft.toggle(&id("u1"));
        assert!(!draft.can_create());

        draft.toggle(&id("u3"));
        assert!(draft.can_create());
    }

    #[test]
    fn closing_keeps_candidates_and_query() {
        let mut draft = GroupDraft::default();
        draft.open();
        draft.toggle(&id("u1"));
        draft.type_char('s');

        draft.close();

        assert!(!draft.is_open());
        assert_eq!(draft.candidates(), &[id("u1")]);
        assert_eq!(draft.search().text(), "s");
    }

    #[test]
    fn take_candidates_clears_everything_and_closes() {
        let mut draft = GroupDraft::default();
        draft.open();
        draft.toggle(&id("u2"));
        draft.toggle(&id("u1"));
        draft.type_char('x');

        let taken = draft.take_candidates();

        assert_eq!(taken, vec![id("u2"), id("u1")]);
        assert!(draft.candidates().is_empty());
        assert!(draft.search().text().is_empty());
        assert!(!draft.is_open());
    }

    #[test]
    fn search_filters_visible_rows_and_resets_highlight() {
        let directory = Directory::seeded();
        let mut draft = GroupDraft::default();
        draft.highlight_next(&directory);
        assert_eq!(draft.highlighted(), 1);

        for ch in "isa".chars() {
            draft.type_char(ch);
        }

        let visible: Vec<_> = draft.visible(&directory).iter().map(|c| c.id.clone()).collect();
        assert_eq!(visible, vec![id("u3")]);
        assert_eq!(draft.highlighted(), 0);
    }

    #[test]
    fn highlight_is_clamped_to_visible_rows() {
        let directory = Directory::seeded();
        let mut draft = GroupDraft::default();

        for _ in 0..10 {
            draft.highlight_next(&directory);
        }
        assert_eq!(draft.highlighted(), 2);

        for _ in 0..10 {
            draft.highlight_previous();
        }
        assert_eq!(draft.highlighted(), 0);
    }

    #[test]
    fn toggle_highlighted_uses_filtered_rows() {
        let directory = Directory::seeded();
        let mut draft = GroupDraft::default();
        for ch in "jack".chars() {
            draft.type_char(ch);
        }

        assert_eq!(draft.toggle_highlighted(&directory), Some((id("u2"), true)));
        assert!(draft.is_candidate(&id("u2")));
    }

    #[test]
    fn toggle_highlighted_without_matches_does_nothing() {
        let directory = Directory::seeded();
        let mut draft = GroupDraft::default();
        draft.type_char('#');

        assert_eq!(draft.toggle_highlighted(&directory), None);
        assert!(draft.candidates().is_empty());
    }

    #[test]
    fn edit_search_supports_backspace() {
        let mut draft = GroupDraft::default();
        draft.type_char('a');
        draft.type_char('b');

        assert!(draft.edit_search("backspace"));
        assert_eq!(draft.search().text(), "a");
        assert!(!draft.edit_search("enter"));
    }
}
