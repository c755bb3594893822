//! Launchboard Server
//!
//! Loads the launch records dataset, then serves the dashboard.
//!
//! Run with: cargo run -- [--config <file>] [--host <host>] [--port <port>]
//!
//! # Configuration
//!
//! Settings come from an optional TOML file (`--config`); the
//! `--host`, `--port`, and `--data-url` flags override it. Logging
//! level follows `RUST_LOG` when set, otherwise the configured level.

use clap::Parser;
use launchboard::api::{serve, AppState, ServerConfig};
use launchboard::config::{generate_default_config, Config};
use launchboard::dataset::DatasetSource;
use launchboard::reactive::standard_registry;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "launchboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive rocket launch records dashboard")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Dataset CSV URL (overrides the config file)
    #[arg(long)]
    data_url: Option<String>,

    /// Print the default config file to stdout and exit
    #[arg(long)]
    print_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.data_url {
        config.dataset.url = url;
    }

    init_tracing(&config);

    tracing::info!("Starting launchboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset URL: {}", config.dataset.url);

    // The dataset loads before the listener binds; any failure here is
    // fatal and the process exits nonzero without serving.
    let source = DatasetSource::new(
        &config.dataset.url,
        Duration::from_secs(config.dataset.request_timeout_secs),
    );
    let table = match source.load().await {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("Failed to load dataset: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        records = table.len(),
        sites = table.summary().sites.len(),
        "Dataset ready"
    );

    let server_config = ServerConfig::new(config.server.host.clone(), config.server.port);
    let state = AppState::new(table, standard_registry(), server_config);

    serve(state).await?;

    tracing::info!("launchboard stopped");
    Ok(())
}

/// Initialize tracing with the configured level and format
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("launchboard={},tower_http=info", config.logging.level).into()
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
