use tokio::runtime::Runtime;

use crate::{
    error::CliError,
    server::{BackendSettings, build_gateway},
};

pub fn handle_models(settings: BackendSettings) -> Result<(), CliError> {
    let runtime = Runtime::new().map_err(CliError::Runtime)?;
    let gateway = build_gateway(&settings)?;
    let directory = runtime.block_on(gateway.list_models())?;

    for model in directory.models {
        println!("{}", model);
    }
    Ok(())
}
