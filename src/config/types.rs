use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Where the Ollama-compatible server lives and how it is queried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// API root; `/generate` and `/tags` are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_health_timeout_ms")]
    pub health_timeout_ms: u64,
    /// Bound on establishing the TCP connection, for either call.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default)]
    pub options: SamplingOptions,
}

/// Decoding options forwarded verbatim as the payload's `options` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.inference.validate()
    }
}

impl InferenceConfig {
    pub fn validate(&self) -> Result<()> {
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::config(format!(
                "inference.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.model.trim().is_empty() {
            return Err(Error::config("inference.model must not be empty"));
        }
        if self.request_timeout_ms == 0
            || self.health_timeout_ms == 0
            || self.connect_timeout_ms == 0
        {
            return Err(Error::config("inference timeouts must be greater than zero"));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            request_timeout_ms: default_request_timeout_ms(),
            health_timeout_ms: default_health_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            options: SamplingOptions::default(),
        }
    }
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://localhost:11434/api".to_string()
}

fn default_model() -> String {
    "phi3:mini".to_string()
}

fn default_request_timeout_ms() -> u64 {
    60_000
}

fn default_health_timeout_ms() -> u64 {
    5_000
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

fn default_temperature() -> f64 {
    0.5
}

fn default_top_p() -> f64 {
    0.8
}

fn default_max_tokens() -> u32 {
    30
}
