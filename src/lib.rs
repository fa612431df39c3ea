pub mod config;
pub mod error;
pub mod intent;
pub mod llm;
pub mod logging;
pub mod prompt;
pub mod server;

pub use error::{Error, Result};
