pub mod backend;
pub mod conversation;
pub mod gateway;
pub mod types;

pub use backend::{BackendError, InferenceBackend, OllamaBackend};
pub use gateway::{Gateway, GatewayError};
pub use types::{ChatMessage, ChatRequest, ChatResponse, ModelDirectory, Role};
