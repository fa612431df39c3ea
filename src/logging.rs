use crate::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Parses a level or a full `EnvFilter` directive list such as
/// `brief_relay=debug,tower_http=info`.
pub fn env_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| Error::config(format!("Invalid log filter '{}': {}", directives, e)))
}

pub fn init(directives: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives)?)
        .json()
        .init();
    Ok(())
}
