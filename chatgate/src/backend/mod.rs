mod error;
mod ollama;

use async_trait::async_trait;
pub use error::BackendError;
pub use ollama::{DEFAULT_OLLAMA_URL, OllamaBackend, normalize_base_url};

use crate::types::ChatMessage;

/// A model-serving process the gateway forwards to.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Identifiers of the models the backend currently has, in its own order.
    async fn list_models(&self) -> Result<Vec<String>, BackendError>;

    /// Requests a single non-streaming completion and returns the reply text.
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, BackendError>;
}
