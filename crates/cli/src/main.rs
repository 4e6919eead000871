//! # menuvault
//!
//! Menu, route-guard and label service with a read-through menu cache.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use menuvault_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::info;

use bootstrap::{init_logging, load_config};
use di::{Adapters, UseCases};

#[derive(Parser)]
#[command(name = "menuvault")]
#[command(version)]
#[command(about = "Role-aware menu service with a read-through cache")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long, env = "MENUVAULT_CONFIG")]
    config: Option<String>,

    /// Bind address (overrides the config file)
    #[arg(short = 'b', long, env = "MENUVAULT_BIND")]
    bind: Option<String>,

    /// HTTP port (overrides the config file)
    #[arg(short = 'p', long, env = "MENUVAULT_PORT")]
    port: Option<u16>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'l', long, env = "MENUVAULT_LOG_LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        log_level: cli.log_level,
    };
    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        "menuvault starting"
    );

    let adapters = Adapters::build(&config)?;
    let use_cases = UseCases::build(&config, &adapters);
    let state = use_cases.into_app_state(adapters.auth.clone());

    let shutdown = CancellationToken::new();
    tokio::spawn(server::wait_for_signal(shutdown.clone()));

    server::start_web_server(&config, state, shutdown).await?;

    info!("menuvault stopped");
    Ok(())
}
