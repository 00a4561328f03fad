use chatgate::{BackendError, GatewayError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("Unable to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to install Ctrl-C handler: {0}")]
    Interrupt(#[from] ctrlc::Error),
    #[error("Server failed: {0}")]
    Launch(String),
}
