//! Per-target message buffer.
//!
//! The buffer is owned by the active chat and is rebuilt from the same
//! two-message seed every time the chat target changes; nothing sent earlier
//! survives a switch.

use super::message::Message;

pub const SEED_AGENT_GREETING: &str = "Hi – demo chat loaded";
pub const SEED_USER_REPLY: &str = "Hello there!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationBuffer {
    messages: Vec<Message>,
}

impl ConversationBuffer {
    /// Fresh buffer holding the fixed seed. The seed is identical for every target.
    pub fn seeded() -> Self {
        Self {
            messages: vec![
                Message::agent(SEED_AGENT_GREETING),
                Message::user(SEED_USER_REPLY),
            ],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Appends `text` as a user message unless it is blank after trimming.
    ///
    /// The stored content is the text as submitted. Returns whether a message
    /// was appended.
    pub fn send(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        self.messages.push(Message::user(text));
        true
    }
}

impl Default for ConversationBuffer {
    fn default() -> Self {
        Self::seeded()
    }
}
