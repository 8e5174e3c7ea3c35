// Trait abstractions for the studio's external collaborators.
//
// TextGenerator — the synchronous-from-caller's-view "generate text from
//   prompt" capability (title suggestion, content generation).
// VideoJobApi — the long-running job surface (submit, re-fetch status).
//   Synchronous on purpose: it is only ever called from the job driver,
//   which runs on a worker thread off the request path.
//
// These enable deterministic testing with MockTextGenerator and
// MockVideoJobApi: no network, no API keys, no real sleeping.

use anyhow::Result;
use async_trait::async_trait;

use genai_client::{Operation, VideoGenerationConfig};

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text from a prompt. Failures are opaque to the studio.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl TextGenerator for genai_client::GenAiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(self.generate_content(prompt).await?)
    }
}

pub trait VideoJobApi: Send + Sync {
    /// Submit a video generation job. Returns an operation handle to poll.
    fn submit(&self, prompt: &str, config: &VideoGenerationConfig) -> Result<Operation>;

    /// Re-fetch the status of a submitted operation. The returned handle
    /// replaces the stale one; handles are never mutated locally.
    fn poll(&self, operation: &Operation) -> Result<Operation>;
}

impl<T: VideoJobApi + ?Sized> VideoJobApi for std::sync::Arc<T> {
    fn submit(&self, prompt: &str, config: &VideoGenerationConfig) -> Result<Operation> {
        (**self).submit(prompt, config)
    }

    fn poll(&self, operation: &Operation) -> Result<Operation> {
        (**self).poll(operation)
    }
}

impl VideoJobApi for genai_client::blocking::GenAiClient {
    fn submit(&self, prompt: &str, config: &VideoGenerationConfig) -> Result<Operation> {
        Ok(self.generate_videos(prompt, config)?)
    }

    fn poll(&self, operation: &Operation) -> Result<Operation> {
        Ok(self.get_operation(&operation.name)?)
    }
}
