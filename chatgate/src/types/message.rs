use serde::{Deserialize, Serialize};

use crate::types::Role;

/// One conversation turn as exchanged with both the HTTP client and the
/// backend.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(
        role: Role,
        content: String,
    ) -> Self {
        Self {
            role,
            content,
        }
    }

    pub fn system(content: String) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: String) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: String) -> Self {
        Self::new(Role::Assistant, content)
    }
}
