#![allow(dead_code)]

use std::{
    net::{IpAddr, Ipv4Addr},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chatgate::{BackendError, ChatMessage, Gateway, InferenceBackend};
use cli::server::{
    BackendSettings, DEFAULT_MAX_BODY_MIB, ServerSettings, build_rocket,
    server_config,
};
use rocket::local::asynchronous::Client;

/// Backend double that answers every chat with a fixed outcome and keeps
/// the message sequences it was sent.
pub struct StubBackend {
    catalog: Vec<String>,
    reply: Result<String, (Option<u16>, String)>,
    received: Mutex<Vec<Vec<ChatMessage>>>,
}

impl StubBackend {
    pub fn replying(
        catalog: &[&str],
        text: &str,
    ) -> Arc<Self> {
        Arc::new(Self {
            catalog: catalog.iter().map(|m| m.to_string()).collect(),
            reply: Ok(text.to_string()),
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn rejecting(
        status: u16,
        error: &str,
    ) -> Arc<Self> {
        Arc::new(Self {
            catalog: Vec::new(),
            reply: Err((Some(status), error.to_string())),
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn unreachable(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            catalog: Vec::new(),
            reply: Err((None, reason.to_string())),
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn received(&self) -> Vec<Vec<ChatMessage>> {
        self.received.lock().unwrap().clone()
    }

    fn failure(&self) -> Option<BackendError> {
        match &self.reply {
            Ok(_) => None,
            Err((Some(status), error)) => Some(BackendError::Rejected {
                status: *status,
                error: error.clone(),
            }),
            Err((None, reason)) => Some(BackendError::Transport(reason.clone())),
        }
    }
}

#[async_trait]
impl InferenceBackend for StubBackend {
    async fn list_models(&self) -> Result<Vec<String>, BackendError> {
        match self.failure() {
            Some(error @ BackendError::Transport(_)) => Err(error),
            _ => Ok(self.catalog.clone()),
        }
    }

    async fn chat(
        &self,
        _model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, BackendError> {
        self.received.lock().unwrap().push(messages.to_vec());
        match (&self.reply, self.failure()) {
            (Ok(text), _) => Ok(text.clone()),
            (_, Some(error)) => Err(error),
            (Err((_, reason)), None) => Err(BackendError::Transport(reason.clone())),
        }
    }
}

pub fn settings(max_body_mib: u64) -> ServerSettings {
    ServerSettings {
        address: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 8000,
        max_body_mib,
        backend: BackendSettings::new("localhost:11434".to_string(), None),
    }
}

pub async fn client_for(backend: &Arc<StubBackend>) -> Client {
    client_with_limit(backend, DEFAULT_MAX_BODY_MIB).await
}

pub async fn client_with_limit(
    backend: &Arc<StubBackend>,
    max_body_mib: u64,
) -> Client {
    let config = server_config(&settings(max_body_mib));
    let rocket = build_rocket(config, Gateway::new(backend.clone()));
    Client::tracked(rocket).await.expect("valid rocket instance")
}
