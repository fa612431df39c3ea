use crate::config::SamplingOptions;
use serde::{Deserialize, Serialize};

/// Body of `POST /generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    pub options: &'a SamplingOptions,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}

/// Body of `GET /tags`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelTag {
    pub name: String,
}
