use tokio::runtime::Runtime;

use crate::{
    error::CliError,
    server::{ServerSettings, run_server},
};

pub fn handle_serve(settings: ServerSettings) -> Result<(), CliError> {
    let runtime = Runtime::new().map_err(CliError::Runtime)?;
    runtime.block_on(run_server(settings))
}
