//! Marketing Hub Scrapers service entry point.
//!
//! Parses the command line, loads configuration from TOML, initializes
//! tracing, builds the Axum router, and serves it until SIGINT/SIGTERM.

use clap::Parser;

use marketing_hub_scrapers::config::AppConfig;
use marketing_hub_scrapers::http::start_server;
use marketing_hub_scrapers::logging::{init_tracing, resolve_filter};
use marketing_hub_scrapers::{create_router, AppState};

/// Marketing Hub Scrapers: liveness service
#[derive(Parser, Debug)]
#[command(name = "marketing-hub-scrapers", version, about)]
struct Args {
    /// Path to configuration file [default: config/default.toml, if present]
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "marketing_hub_scrapers=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration comes first so the logging section can shape the subscriber
    let config = AppConfig::load_or_default(args.config.as_deref())?;

    let log_filter = resolve_filter(
        args.log_level,
        std::env::var("RUST_LOG").ok(),
        &config.logging,
    );
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        title = %config.service.title,
        version = %config.service.version,
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let http_config = config.http.clone();
    let state = AppState::new(config);
    let app = create_router(state);

    start_server(app, &http_config).await?;

    Ok(())
}
