use crate::types::ChatMessage;

/// Builds the sequence sent to the backend: the supplied history in order,
/// followed by the new user message.
pub fn assemble(
    history: Option<Vec<ChatMessage>>,
    message: String,
) -> Vec<ChatMessage> {
    let mut messages = history.unwrap_or_default();
    messages.push(ChatMessage::user(message));
    messages
}
