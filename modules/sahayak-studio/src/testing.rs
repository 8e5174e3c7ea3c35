// Test mocks for the two trait boundaries plus a recording clock:
// - MockTextGenerator (TextGenerator) — scripted reply/failure queue
// - MockVideoJobApi (VideoJobApi) — scripted submit result and poll
//   sequence, recording submitted prompts and configs
// - RecordingSleeper (Sleeper) — captures nap durations instead of sleeping
//
// No network, no API keys, no real sleeping. `cargo test` in seconds.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;

use genai_client::{Operation, VideoGenerationConfig};

use crate::traits::{TextGenerator, VideoJobApi};
use crate::video::Sleeper;

// ---------------------------------------------------------------------------
// Operation helpers
// ---------------------------------------------------------------------------

/// A not-yet-done operation handle.
pub fn running_operation() -> Operation {
    Operation {
        name: "models/veo/operations/test-op".to_string(),
        done: false,
        error: None,
        response: None,
    }
}

/// A successfully completed operation carrying the given response payload.
pub fn done_operation(response: serde_json::Value) -> Operation {
    Operation {
        name: "models/veo/operations/test-op".to_string(),
        done: true,
        error: None,
        response: Some(response),
    }
}

// ---------------------------------------------------------------------------
// MockTextGenerator
// ---------------------------------------------------------------------------

/// Scripted text generator. Each call consumes the next scripted reply or
/// failure; an exhausted script fails the call.
pub struct MockTextGenerator {
    script: Mutex<VecDeque<Result<String, String>>>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
        }
    }

    pub fn reply(self, text: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(anyhow!(message)),
            None => bail!("MockTextGenerator called with an empty script"),
        }
    }
}

// ---------------------------------------------------------------------------
// MockVideoJobApi
// ---------------------------------------------------------------------------

/// Scripted job API. Submission yields the next scripted result and records
/// the submitted prompt and config for assertions; polls consume a scripted
/// status sequence.
pub struct MockVideoJobApi {
    submit_script: Mutex<VecDeque<Result<Operation, String>>>,
    poll_script: Mutex<VecDeque<Result<Operation, String>>>,
    submitted: Mutex<Vec<(String, VideoGenerationConfig)>>,
}

impl MockVideoJobApi {
    pub fn new() -> Self {
        Self {
            submit_script: Mutex::new(VecDeque::new()),
            poll_script: Mutex::new(VecDeque::new()),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn on_submit(self, operation: Operation) -> Self {
        self.submit_script.lock().unwrap().push_back(Ok(operation));
        self
    }

    pub fn submit_error(self, message: &str) -> Self {
        self.submit_script
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn on_poll(self, operation: Operation) -> Self {
        self.poll_script.lock().unwrap().push_back(Ok(operation));
        self
    }

    pub fn poll_error(self, message: &str) -> Self {
        self.poll_script
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    /// Every (prompt, config) pair passed to `submit`, in call order.
    pub fn submitted(&self) -> Vec<(String, VideoGenerationConfig)> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn submit_calls(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }
}

impl Default for MockVideoJobApi {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoJobApi for MockVideoJobApi {
    fn submit(&self, prompt: &str, config: &VideoGenerationConfig) -> Result<Operation> {
        self.submitted
            .lock()
            .unwrap()
            .push((prompt.to_string(), config.clone()));
        match self.submit_script.lock().unwrap().pop_front() {
            Some(Ok(operation)) => Ok(operation),
            Some(Err(message)) => Err(anyhow!(message)),
            None => bail!("MockVideoJobApi::submit called with an empty script"),
        }
    }

    fn poll(&self, _operation: &Operation) -> Result<Operation> {
        match self.poll_script.lock().unwrap().pop_front() {
            Some(Ok(operation)) => Ok(operation),
            Some(Err(message)) => Err(anyhow!(message)),
            None => bail!("MockVideoJobApi::poll called with an empty script"),
        }
    }
}

// ---------------------------------------------------------------------------
// RecordingSleeper
// ---------------------------------------------------------------------------

/// Records requested nap durations instead of sleeping. Clones share the
/// same log, so a test can keep one clone and hand the other to the driver.
#[derive(Clone)]
pub struct RecordingSleeper {
    naps: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self {
            naps: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn naps(&self) -> Vec<Duration> {
        self.naps.lock().unwrap().clone()
    }
}

impl Default for RecordingSleeper {
    fn default() -> Self {
        Self::new()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.naps.lock().unwrap().push(duration);
    }
}
