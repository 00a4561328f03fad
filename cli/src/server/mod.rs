pub mod chat;
pub mod cors;
pub mod error;
pub mod main;
pub mod models;
pub mod state;
pub use chat::handle_chat;
pub use cors::{Cors, handle_preflight};
pub use error::{ApiError, ErrorBody, handle_error};
pub use main::{build_rocket, run_server, server_config};
pub use models::handle_models;
pub use state::{
    BackendSettings, DEFAULT_MAX_BODY_MIB, ServerSettings, build_gateway,
    connect_gateway,
};
