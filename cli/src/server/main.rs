use chatgate::Gateway;
use console::Style;
use rocket::{
    Build, Config, Rocket, catchers,
    config::LogLevel,
    data::{Limits, ToByteUnit},
    routes,
};

use crate::{
    error::CliError,
    server::{
        Cors, ServerSettings, connect_gateway, handle_chat, handle_error,
        handle_models, handle_preflight,
    },
};

/// Assembles the application: routes, catchers and the CORS fairing are
/// registered here once.
pub fn build_rocket(
    config: Config,
    gateway: Gateway,
) -> Rocket<Build> {
    rocket::custom(config)
        .manage(gateway)
        .attach(Cors)
        .mount("/", routes![handle_models, handle_chat, handle_preflight])
        .register("/", catchers![handle_error])
}

/// Rocket configuration for the gateway. Chat histories are forwarded
/// unbounded, so the JSON body limit is raised well above Rocket's 1 MiB.
pub fn server_config(settings: &ServerSettings) -> Config {
    // Request logging goes through `tracing`; Rocket's own banner is silenced.
    Config {
        address: settings.address,
        port: settings.port,
        limits: Limits::default()
            .limit("json", settings.max_body_mib.mebibytes()),
        log_level: LogLevel::Off,
        ..Config::default()
    }
}

pub async fn run_server(settings: ServerSettings) -> Result<(), CliError> {
    let config = server_config(&settings);

    let style_bold = Style::new().bold();
    println!("🚀 Starting gateway for backend: {}", style_bold.apply_to(&settings.backend.url));
    println!(
        "🌐 Server will be available at: http://{}:{}",
        config.address, config.port
    );
    println!(
        "📝 Endpoints:\n   GET  /models - Models available on the backend\n   POST /chat   - Chat with a model\n"
    );

    let gateway = connect_gateway(&settings.backend).await?;

    build_rocket(config, gateway)
        .launch()
        .await
        .map_err(|error| CliError::Launch(error.to_string()))?;

    Ok(())
}
