//! Appending the user's text to the active conversation.

use thiserror::Error;

use crate::domain::selection::SelectionState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    #[error("message text is empty")]
    EmptyMessage,
    #[error("no chat is open")]
    NoActiveChat,
}

/// Sends `text` to the active chat's buffer.
///
/// Blank text is rejected and leaves the buffer untouched.
pub fn send_message(selection: &mut SelectionState, text: &str) -> Result<(), SendMessageError> {
    let chat = selection
        .active_mut()
        .ok_or(SendMessageError::NoActiveChat)?;

    if !chat.conversation_mut().send(text) {
        return Err(SendMessageError::EmptyMessage);
    }

    tracing::debug!(
        target_chat = ?chat.target(),
        buffered = chat.conversation().messages().len(),
        "message appended"
    );
    Ok(())
}
