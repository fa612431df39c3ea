mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration named by `CONFIG_PATH`, falling back to
/// `config.yaml`. Without either, the built-in defaults are used.
pub async fn load() -> Result<Config> {
    load_with(|key| env::var(key).ok(), DEFAULT_CONFIG_PATH).await
}

/// Same as [`load`] with the environment lookup and fallback file injected.
pub async fn load_with(
    env: impl Fn(&str) -> Option<String>,
    default_path: impl AsRef<Path>,
) -> Result<Config> {
    let default_path = default_path.as_ref();

    let mut config = match env("CONFIG_PATH") {
        Some(path) => load_from_path(&path).await?,
        None if default_path.exists() => load_from_path(default_path).await?,
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    if let Some(base_url) = env("INFERENCE_BASE_URL") {
        debug!("Overriding inference base URL from environment: {}", base_url);
        config.inference.base_url = base_url;
    }

    config.validate()?;

    Ok(config)
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
