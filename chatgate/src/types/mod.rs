mod exchange;
mod message;
mod role;

pub use exchange::{ChatRequest, ChatResponse, ModelDirectory};
pub use message::ChatMessage;
pub use role::Role;
