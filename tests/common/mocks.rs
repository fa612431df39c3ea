use async_trait::async_trait;
use brief_relay::{Error, Result, llm::InferenceClient};
use std::sync::{Arc, Mutex};

/// Canned outcome for a mocked inference call.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    ConnectionFailed,
    Timeout,
    Upstream(u16, String),
}

impl MockReply {
    fn into_result<T>(self, ok: impl FnOnce(String) -> T) -> Result<T> {
        match self {
            Self::Text(text) => Ok(ok(text)),
            Self::ConnectionFailed => Err(Error::ConnectionFailed("connection refused".to_string())),
            Self::Timeout => Err(Error::Timeout("operation timed out".to_string())),
            Self::Upstream(status, body) => Err(Error::upstream(status, body)),
        }
    }
}

/// Mock inference client for testing
#[derive(Debug)]
pub struct MockInferenceClient {
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub reply: MockReply,
    pub models: Option<Vec<String>>,
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            reply: MockReply::Text(String::new()),
            models: Some(Vec::new()),
        }
    }

    pub fn with_reply(mut self, reply: MockReply) -> Self {
        self.reply = reply;
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.with_reply(MockReply::Text(text.to_string()))
    }

    pub fn with_models(mut self, models: &[&str]) -> Self {
        self.models = Some(models.iter().map(|m| m.to_string()).collect());
        self
    }

    /// Makes `list_models` fail with the same outcome as `generate`.
    pub fn without_models(mut self) -> Self {
        self.models = None;
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().into_result(|text| text.trim().to_string())
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        match &self.models {
            Some(models) => Ok(models.clone()),
            None => self.reply.clone().into_result(|_| Vec::new()),
        }
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}
