//! Blocking client for the long-running video generation surface.
//!
//! The video job driver is a synchronous state machine that runs on a worker
//! thread, so this module mirrors `reqwest::blocking` rather than forcing an
//! async runtime into the polling loop.

use crate::error::{GenAiError, Result};
use crate::types::{Operation, PredictLongRunningRequest, VideoGenerationConfig, VideoInstance};
use crate::BASE_URL;

pub struct GenAiClient {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GenAiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key,
            model,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Submit a video generation job via `models/{model}:predictLongRunning`.
    /// Returns immediately with an operation handle to poll.
    pub fn generate_videos(
        &self,
        prompt: &str,
        config: &VideoGenerationConfig,
    ) -> Result<Operation> {
        let url = format!("{}/models/{}:predictLongRunning", self.base_url, self.model);
        let body = PredictLongRunningRequest {
            instances: vec![VideoInstance { prompt }],
            parameters: config,
        };

        tracing::info!(
            model = %self.model,
            storage_uri = %config.storage_uri,
            "Submitting video generation job"
        );

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(GenAiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp.json()?)
    }

    /// Re-fetch the status of a long-running operation by its resource name.
    /// Returns a fresh handle; the caller discards the stale one.
    pub fn get_operation(&self, name: &str) -> Result<Operation> {
        let url = format!("{}/{}", self.base_url, name);
        tracing::debug!(operation = %name, "Fetching operation status");

        let resp = self
            .client
            .get(&url)
            .header("x-goog-api-key", &self.api_key)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(GenAiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp.json()?)
    }
}
