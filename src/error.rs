use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a question.";
pub const CONNECTION_FAILED_MESSAGE: &str = "Cannot reach Ollama - is it running?";
pub const TIMEOUT_MESSAGE: &str = "AI service timed out, please retry.";
pub const GENERIC_FAILURE_MESSAGE: &str = "AI service error.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Message is empty")]
    EmptyInput,

    #[error("Cannot connect to inference server: {0}")]
    ConnectionFailed(String),

    #[error("Inference request timed out: {0}")]
    Timeout(String),

    #[error("Inference server returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }

    /// Sorts a transport failure into the caller-visible buckets.
    ///
    /// A connect that times out reports both flags; it counts as unreachable.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Network(err)
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyInput => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed text shown to HTTP callers. Diagnostics stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => EMPTY_INPUT_MESSAGE,
            Self::ConnectionFailed(_) => CONNECTION_FAILED_MESSAGE,
            Self::Timeout(_) => TIMEOUT_MESSAGE,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}
