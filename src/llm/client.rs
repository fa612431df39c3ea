use super::types::*;
use crate::{
    Error, Result,
    config::{InferenceConfig, SamplingOptions},
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, error, warn};

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Runs one non-streaming completion and returns the trimmed text.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Names of the models the server has installed, in server order.
    async fn list_models(&self) -> Result<Vec<String>>;
}

pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    options: SamplingOptions,
    request_timeout: Duration,
    health_timeout: Duration,
    connect_timeout: Duration,
}

impl OllamaClient {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let connect_timeout = Duration::from_millis(config.connect_timeout_ms);
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            options: config.options,
            request_timeout: Duration::from_millis(config.request_timeout_ms),
            health_timeout: Duration::from_millis(config.health_timeout_ms),
            connect_timeout,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn payload<'a>(&'a self, prompt: &'a str) -> GenerateRequest<'a> {
        GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: &self.options,
        }
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.endpoint("generate");
        debug!("Sending {} character prompt to {}", prompt.len(), url);

        let response = self
            .client
            .post(&url)
            .json(&self.payload(prompt))
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(Error::from_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::from_transport)?;

        if status != StatusCode::OK {
            error!("Inference server error: {} {}", status.as_u16(), body);
            return Err(Error::upstream(status.as_u16(), body));
        }

        let parsed: GenerateResponse = serde_json::from_str(&body).unwrap_or_else(|e| {
            warn!("Unreadable inference response, treating as empty: {}", e);
            GenerateResponse::default()
        });

        Ok(parsed.response.trim().to_string())
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let url = self.endpoint("tags");
        debug!("Listing models from {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .await
            .map_err(Error::from_transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("Model listing failed: {} {}", status.as_u16(), body);
            return Err(Error::upstream(status.as_u16(), body));
        }

        let tags: TagsResponse = response.json().await.map_err(Error::from_transport)?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}
