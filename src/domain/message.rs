/// Author side of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// The remote side (friend or group).
    Agent,
    /// The local user.
    User,
}

impl MessageRole {
    pub fn is_user(self) -> bool {
        self == MessageRole::User
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn agent(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Agent,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_role() {
        assert_eq!(Message::agent("hi").role, MessageRole::Agent);
        assert!(Message::user("hi").role.is_user());
        assert!(!MessageRole::Agent.is_user());
    }
}
