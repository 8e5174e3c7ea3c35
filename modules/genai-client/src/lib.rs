pub mod blocking;
pub mod error;
pub mod types;

pub use error::{GenAiError, Result};
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, Operation,
    OperationError, Part, VideoGenerationConfig,
};

pub(crate) const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Async client for the Google Generative AI REST surface (text generation).
/// The long-running video surface lives in [`blocking`], shaped like
/// `reqwest::blocking`, because the job driver runs on a worker thread.
pub struct GenAiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GenAiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Generate text from a prompt via `models/{model}:generateContent`.
    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GenerateContentRequest::from_prompt(prompt);

        tracing::debug!(model = %self.model, "Sending generateContent request");

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GenAiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: GenerateContentResponse = resp.json().await?;
        parsed.text().ok_or(GenAiError::EmptyResponse)
    }
}
