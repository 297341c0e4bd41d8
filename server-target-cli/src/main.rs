mod commands;
mod doctor;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "server-target", about = "Manage backend endpoints and compose request URLs")]
struct Cli {
    /// Config file (default: $SERVER_TARGET_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the full URL of an API path
    Resolve {
        /// API path, with or without a leading `/`
        api: String,
        /// Endpoint name (default endpoint when omitted)
        #[arg(long)]
        name: Option<String>,
        /// Use this service instead of the configured one
        #[arg(long)]
        service: Option<String>,
    },
    /// List the configured endpoints
    List {
        #[arg(long)]
        json: bool,
    },
    /// Add or replace an endpoint
    Add {
        name: String,
        host: String,
        #[arg(long, default_value = server_target::DEFAULT_SCHEME)]
        scheme: String,
        #[arg(long)]
        port: Option<u16>,
        #[arg(long, default_value = "")]
        service: String,
        /// Also make it the default endpoint
        #[arg(long)]
        default: bool,
    },
    /// Check the configured endpoints
    Doctor,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("server_target=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = server_target::RegistryConfig::resolve_path(cli.config.as_deref())?;
    tracing::debug!("using config {}", config_path.display());

    match cli.command {
        Command::Resolve { api, name, service } => {
            commands::run_resolve(&config_path, &api, name.as_deref(), service)
        }
        Command::List { json } => commands::run_list(&config_path, json),
        Command::Add {
            name,
            host,
            scheme,
            port,
            service,
            default,
        } => {
            let endpoint = server_target::Endpoint::from_parts(scheme, host, port, service);
            commands::run_add(&config_path, name, endpoint, default)
        }
        Command::Doctor => doctor::run_doctor(&config_path),
    }
}
