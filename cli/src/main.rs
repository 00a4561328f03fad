use std::net::{IpAddr, Ipv4Addr};

use chatgate::backend::DEFAULT_OLLAMA_URL;
use clap::{Args, CommandFactory, Parser, Subcommand};
use cli::{
    handlers::{handle_models, handle_run, handle_serve},
    server::{BackendSettings, DEFAULT_MAX_BODY_MIB, ServerSettings},
};
use console::Style;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(version, about = "HTTP gateway for chatting with locally served models")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct BackendArgs {
    /// Base URL of the model-serving backend
    #[arg(long, env = "OLLAMA_HOST", default_value = DEFAULT_OLLAMA_URL)]
    backend_url: String,
    /// Give up on a backend call after this many seconds (no limit by default)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl BackendArgs {
    fn into_settings(self) -> BackendSettings {
        BackendSettings::new(self.backend_url, self.timeout_secs)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Address to bind
        #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
        address: IpAddr,
        /// Port to listen on
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Largest accepted request body, in MiB
        #[arg(long, default_value_t = DEFAULT_MAX_BODY_MIB)]
        max_body_mib: u64,
        #[command(flatten)]
        backend: BackendArgs,
    },
    /// List the models available on the backend
    Models {
        #[command(flatten)]
        backend: BackendArgs,
    },
    /// Chat with a model in the terminal
    Run {
        /// Model identifier, e.g. llama3
        model: String,
        /// System prompt placed before the conversation
        #[arg(long)]
        system: Option<String>,
        #[command(flatten)]
        backend: BackendArgs,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatgate=info,cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Some(Commands::Serve {
            address,
            port,
            max_body_mib,
            backend,
        }) => handle_serve(ServerSettings {
            address,
            port,
            max_body_mib,
            backend: backend.into_settings(),
        }),
        Some(Commands::Models {
            backend,
        }) => handle_models(backend.into_settings()),
        Some(Commands::Run {
            model,
            system,
            backend,
        }) => handle_run(model, backend.into_settings(), system),
        None => {
            let mut cmd = Cli::command();
            cmd.print_help().map_err(Into::into)
        },
    };

    if let Err(error) = result {
        eprintln!("{} {}", Style::new().red().bold().apply_to("error:"), error);
        std::process::exit(1);
    }
}
