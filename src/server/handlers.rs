use super::types::{
    ChatRequest, ChatResponse, ErrorResponse, HealthResponse, IntentResult, IntentTestRequest,
    IntentTestResponse, RESPONSE_TYPE_BRIEF,
};
use crate::{
    Error,
    intent::classify_intent,
    llm::{InferenceClient, trim_to_two_sentences},
    prompt::build_prompt,
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub inference: Arc<dyn InferenceClient>,
}

impl AppState {
    pub fn new(inference: Arc<dyn InferenceClient>) -> Self {
        Self { inference }
    }
}

fn error_reply(err: &Error) -> (StatusCode, Json<ErrorResponse>) {
    (
        err.status_code(),
        Json(ErrorResponse {
            response: err.user_message().to_string(),
        }),
    )
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let message = request.message.unwrap_or_default();
    let lang = request.lang.unwrap_or_else(|| "en".to_string());

    if message.trim().is_empty() {
        return Err(error_reply(&Error::EmptyInput));
    }

    info!("Received chat message ({}): {}", lang, message);

    let prompt = build_prompt(&message, &lang);
    debug!("Prompt generated");

    match state.inference.generate(&prompt).await {
        Ok(text) => {
            let reply = trim_to_two_sentences(&text);
            info!("Reply: {}", reply);
            Ok(Json(ChatResponse {
                response: reply,
                response_type: RESPONSE_TYPE_BRIEF.to_string(),
            }))
        }
        Err(e) => {
            error!("Failed to get inference reply: {}", e);
            Err(error_reply(&e))
        }
    }
}

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.inference.list_models().await {
        Ok(models) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                available_models: Some(models),
                error: None,
            }),
        ),
        Err(e) => {
            warn!("Health check failed: {}", e);
            // A reachable but failing server reports no error detail.
            let error = match e {
                Error::Upstream { .. } => None,
                other => Some(other.to_string()),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    available_models: None,
                    error,
                }),
            )
        }
    }
}

pub async fn test_intents(Json(request): Json<IntentTestRequest>) -> Json<IntentTestResponse> {
    let results = request
        .messages
        .into_iter()
        .map(|message| {
            let detected_intent = classify_intent(&message);
            IntentResult {
                message,
                detected_intent,
            }
        })
        .collect();

    Json(IntentTestResponse { results })
}
