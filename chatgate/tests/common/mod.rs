#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chatgate::{BackendError, ChatMessage, Gateway, InferenceBackend};

#[derive(Clone)]
pub enum Outcome {
    Reply(String),
    Reject {
        status: u16,
        error: String,
    },
    Unreachable(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

pub struct RecordingBackend {
    catalog: Vec<String>,
    outcome: Outcome,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingBackend {
    pub fn new(
        catalog: &[&str],
        outcome: Outcome,
    ) -> Arc<Self> {
        Arc::new(Self {
            catalog: catalog.iter().map(|m| m.to_string()).collect(),
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(&["llama3:latest"], Outcome::Reply(text.to_string()))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceBackend for RecordingBackend {
    async fn list_models(&self) -> Result<Vec<String>, BackendError> {
        match &self.outcome {
            Outcome::Unreachable(reason) => {
                Err(BackendError::Transport(reason.clone()))
            },
            _ => Ok(self.catalog.clone()),
        }
    }

    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, BackendError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            messages: messages.to_vec(),
        });

        match &self.outcome {
            Outcome::Reply(text) => Ok(text.clone()),
            Outcome::Reject {
                status,
                error,
            } => Err(BackendError::Rejected {
                status: *status,
                error: error.clone(),
            }),
            Outcome::Unreachable(reason) => {
                Err(BackendError::Transport(reason.clone()))
            },
        }
    }
}

pub fn gateway_for(backend: &Arc<RecordingBackend>) -> Gateway {
    Gateway::new(backend.clone())
}
