use std::error::Error as _;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend answered with a non-success status.
    #[error("{error} (status code: {status})")]
    Rejected {
        status: u16,
        error: String,
    },
    #[error("Unable to reach backend: {0}")]
    Transport(String),
    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
    #[error("Unable to build HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(value: reqwest::Error) -> Self {
        let description = describe(&value);
        if value.is_decode() {
            Self::InvalidResponse(description)
        } else if value.is_builder() {
            Self::Client(description)
        } else {
            Self::Transport(description)
        }
    }
}

// reqwest's top-level message hides the cause ("error sending request"),
// the interesting part (e.g. "Connection refused") lives in the source chain.
fn describe(error: &reqwest::Error) -> String {
    let mut description = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}
