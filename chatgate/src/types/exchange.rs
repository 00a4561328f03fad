use serde::{Deserialize, Serialize};

use crate::types::ChatMessage;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub message: String,
    /// Prior turns, oldest first. Absent and `null` are both accepted.
    #[serde(default)]
    pub history: Option<Vec<ChatMessage>>,
}

impl ChatRequest {
    pub fn new(
        model: String,
        message: String,
        history: Option<Vec<ChatMessage>>,
    ) -> Self {
        Self {
            model,
            message,
            history,
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
    pub model: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ModelDirectory {
    pub models: Vec<String>,
}
