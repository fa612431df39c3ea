use anyhow::Result;
use brief_relay::{config, logging, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration decides the log filter, so it loads before tracing is up
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = logging::init(&log_filter) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!(
        "Starting chat relay on port {} with log filter: {}",
        config.server.port, log_filter
    );

    server::run(config).await?;

    Ok(())
}
