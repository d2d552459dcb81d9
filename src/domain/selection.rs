use super::{contact::ContactId, conversation::ConversationBuffer, group::GroupId};

/// Chat destination: a seeded contact or a registered group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChatTarget {
    Friend(ContactId),
    Group(GroupId),
}

impl ChatTarget {
    pub fn as_group(&self) -> Option<&GroupId> {
        match self {
            ChatTarget::Group(id) => Some(id),
            ChatTarget::Friend(_) => None,
        }
    }
}

/// The open chat: its target plus the buffer rendered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveChat {
    target: ChatTarget,
    conversation: ConversationBuffer,
}

impl ActiveChat {
    fn open(target: ChatTarget) -> Self {
        Self {
            target,
            conversation: ConversationBuffer::seeded(),
        }
    }

    pub fn target(&self) -> &ChatTarget {
        &self.target
    }

    pub fn conversation(&self) -> &ConversationBuffer {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut ConversationBuffer {
        &mut self.conversation
    }
}

/// `NoSelection` until the first target is chosen; never returns to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    active: Option<ActiveChat>,
}

impl SelectionState {
    pub fn active(&self) -> Option<&ActiveChat> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveChat> {
        self.active.as_mut()
    }

    pub fn target(&self) -> Option<&ChatTarget> {
        self.active.as_ref().map(ActiveChat::target)
    }

    pub fn is_selected(&self, target: &ChatTarget) -> bool {
        self.target() == Some(target)
    }

    /// Makes `target` active.
    ///
    /// A different target gets a freshly seeded buffer; re-selecting the
    /// current target keeps its buffer. Returns whether the target changed.
    pub fn select(&mut self, target: ChatTarget) -> bool {
        if self.is_selected(&target) {
            return false;
        }

        self.active = Some(ActiveChat::open(target));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(id: &str) -> ChatTarget {
        ChatTarget::Friend(ContactId::new(id))
    }

    #[test]
    fn starts_without_selection() {
        let state = SelectionState::default();

        assert!(state.active().is_none());
        assert!(state.target().is_none());
    }

    #[test]
    fn selecting_a_friend_opens_seeded_conversation() {
        let mut state = SelectionState::default();

        assert!(state.select(friend("u1")));

        let active = state.active().expect("friend should be active");
        assert_eq!(active.target(), &friend("u1"));
        assert_eq!(active.conversation(), &ConversationBuffer::seeded());
    }

    #[test]
    fn switching_targets_resets_the_buffer_to_the_seed() {
        let mut state = SelectionState::default();
        state.select(friend("u1"));
        state
            .active_mut()
            .expect("active chat")
            .conversation_mut()
            .send("only for Sofia");

        assert!(state.select(ChatTarget::Group(GroupId::new("g-1"))));

        let active = state.active().expect("group should be active");
        assert_eq!(active.conversation(), &ConversationBuffer::seeded());
        assert_eq!(
            active.target().as_group(),
            Some(&GroupId::new("g-1"))
        );
    }

    #[test]
    fn reselecting_the_same_target_keeps_the_buffer() {
        let mut state = SelectionState::default();
        state.select(friend("u1"));
        state
            .active_mut()
            .expect("active chat")
            .conversation_mut()
            .send("still here");

        assert!(!state.select(friend("u1")));

        let messages = state.active().expect("active chat").conversation().messages();
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn friend_target_is_not_a_group() {
        assert!(friend("u1").as_group().is_none());
    }
}
