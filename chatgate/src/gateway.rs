use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    backend::{BackendError, InferenceBackend},
    conversation,
    types::{ChatRequest, ChatResponse, ModelDirectory},
};

/// Failure of a gateway operation, already classified by who is at fault.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request itself is malformed; the backend was not contacted.
    #[error("{0}")]
    Invalid(String),
    /// The backend refused the request (unknown model, bad messages, ...).
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Failed(String),
}

impl GatewayError {
    pub fn detail(&self) -> &str {
        match self {
            GatewayError::Invalid(detail)
            | GatewayError::Rejected(detail)
            | GatewayError::Failed(detail) => detail,
        }
    }
}

/// Stateless front for a single backend. Cloning shares the backend.
#[derive(Clone)]
pub struct Gateway {
    backend: Arc<dyn InferenceBackend>,
}

impl Gateway {
    pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
        Self {
            backend,
        }
    }

    pub async fn list_models(&self) -> Result<ModelDirectory, GatewayError> {
        match self.backend.list_models().await {
            Ok(models) => {
                debug!(count = models.len(), "listed backend models");
                Ok(ModelDirectory {
                    models,
                })
            },
            Err(error) => {
                warn!(%error, "model listing failed");
                Err(GatewayError::Failed(format!(
                    "Failed to list models: {error}"
                )))
            },
        }
    }

    pub async fn chat(
        &self,
        request: ChatRequest,
    ) -> Result<ChatResponse, GatewayError> {
        validate(&request)?;

        let ChatRequest {
            model,
            message,
            history,
        } = request;
        let messages = conversation::assemble(history, message);

        match self.backend.chat(&model, &messages).await {
            Ok(response) => Ok(ChatResponse {
                response,
                model,
            }),
            Err(BackendError::Rejected {
                status,
                error,
            }) => {
                warn!(%model, status, %error, "backend rejected chat request");
                Err(GatewayError::Rejected(format!(
                    "Model request error: {error}"
                )))
            },
            Err(error) => {
                warn!(%model, %error, "chat request failed");
                Err(GatewayError::Failed(format!(
                    "Chat processing failed: {error}"
                )))
            },
        }
    }
}

fn validate(request: &ChatRequest) -> Result<(), GatewayError> {
    if request.model.trim().is_empty() {
        return Err(GatewayError::Invalid(
            "model must not be empty".to_string(),
        ));
    }
    Ok(())
}
