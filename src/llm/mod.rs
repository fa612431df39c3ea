mod client;
mod trim;
mod types;

pub use client::{InferenceClient, OllamaClient};
pub use trim::trim_to_two_sentences;
pub use types::*;
