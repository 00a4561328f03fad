use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    backend::{BackendError, InferenceBackend},
    types::ChatMessage,
};

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Accepts the forms `OLLAMA_HOST` is usually given in (`localhost:11434`,
/// `http://host:port/`) and returns a base URL without a trailing slash.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_OLLAMA_URL.to_string()
    } else if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Option<Vec<TagEntry>>,
}

#[derive(Deserialize)]
struct TagEntry {
    model: Option<String>,
    name: Option<String>,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the Ollama HTTP API.
pub struct OllamaBackend {
    http: HttpClient,
    base_url: String,
}

impl OllamaBackend {
    /// No timeout is applied unless one is given; a hanging backend then
    /// keeps the call pending.
    pub fn new(
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, BackendError> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http =
            builder.build().map_err(|e| BackendError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: normalize_base_url(base_url),
        })
    }

    fn endpoint(
        &self,
        path: &str,
    ) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(
        response: Response
    ) -> Result<T, BackendError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(parsed) => parsed.error,
                Err(_) if body.trim().is_empty() => {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                },
                Err(_) => body,
            };
            return Err(BackendError::Rejected {
                status: status.as_u16(),
                error,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl InferenceBackend for OllamaBackend {
    async fn list_models(&self) -> Result<Vec<String>, BackendError> {
        let url = self.endpoint("/api/tags");
        debug!(%url, "querying model catalog");

        let response = self.http.get(&url).send().await?;
        let tags: TagsResponse = Self::read_json(response).await?;

        tags.models
            .unwrap_or_default()
            .into_iter()
            .map(|entry| {
                entry.model.or(entry.name).ok_or_else(|| {
                    BackendError::InvalidResponse(
                        "catalog entry without a model identifier".to_string(),
                    )
                })
            })
            .collect()
    }

    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, BackendError> {
        let url = self.endpoint("/api/chat");
        debug!(%url, model, messages = messages.len(), "requesting completion");

        let request = ChatCompletionRequest {
            model,
            messages,
            stream: false,
        };
        let response = self.http.post(&url).json(&request).send().await?;
        let completion: ChatCompletionResponse =
            Self::read_json(response).await?;

        Ok(completion.message.content)
    }
}
