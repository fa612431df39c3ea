use crate::intent::Intent;
use serde::{Deserialize, Serialize};

pub const RESPONSE_TYPE_BRIEF: &str = "brief";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub response_type: String,
}

/// Chat failures reuse the `response` field so clients render them inline.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_models: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IntentTestRequest {
    #[serde(default)]
    pub messages: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IntentTestResponse {
    pub results: Vec<IntentResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IntentResult {
    pub message: String,
    pub detected_intent: Intent,
}
