use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use brief_relay::{
    config::{InferenceConfig, SamplingOptions},
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::{net::TcpListener, sync::Arc};

use super::MockInferenceClient;

/// Inference config pointing at `base_url` with short timeouts
pub fn create_test_inference_config(base_url: &str) -> InferenceConfig {
    InferenceConfig {
        base_url: base_url.to_string(),
        model: "phi3:mini".to_string(),
        request_timeout_ms: 500,
        health_timeout_ms: 500,
        connect_timeout_ms: 200,
        options: SamplingOptions::default(),
    }
}

/// Base URL on a local port nothing listens on
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api", port)
}

/// Router backed by a mock client; the mock is returned for assertions
pub fn create_mock_app(mock: MockInferenceClient) -> (Router, Arc<MockInferenceClient>) {
    let mock = Arc::new(mock);
    let app = server::router(AppState::new(mock.clone()));
    (app, mock)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "0.0.0.0"
  port: 8088
  logs:
    level: "debug"
inference:
  base_url: "http://ollama.internal:11434/api"
  model: "llama3:8b"
  request_timeout_ms: 30000
  health_timeout_ms: 2000
  options:
    temperature: 0.2
    top_p: 0.9
    max_tokens: 64
"#;
