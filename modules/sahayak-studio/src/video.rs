//! Video generation workflow: title suggestion, job submission, and polling.
//!
//! [`VideoJobDriver::run`] is a synchronous state machine with an unbounded
//! polling loop. It must never run on the request path — [`VideoStudio`]
//! offloads it onto tokio's blocking pool so other requests keep making
//! progress while a job runs.

use std::sync::Arc;
use std::time::Duration;

use genai_client::{OperationError, VideoGenerationConfig};
use sahayak_common::types::{GeneratedVideo, VideoRequest, VideoStatus};
use sahayak_common::Config;
use tracing::{debug, info, warn};

use crate::error::VideoError;
use crate::prompts;
use crate::slug::make_slug;
use crate::traits::{TextGenerator, VideoJobApi};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(15);

/// Title used when the suggestion call fails. Suggestion is best-effort;
/// its failure never fails the overall generation.
const FALLBACK_TITLE: &str = "Generated Video";

// ---------------------------------------------------------------------------
// Sleeper
// ---------------------------------------------------------------------------

/// Clock seam for the polling loop, so tests observe the cadence without
/// real sleeping.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// Real thread sleep. The driver runs on a worker thread, so blocking
/// here is the point.
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

// ---------------------------------------------------------------------------
// VideoJobDriver
// ---------------------------------------------------------------------------

/// Synchronous job driver: build the job config, submit, poll on a fixed
/// interval until terminal, return the output location.
///
/// No retry at any stage: submission, poll, and execution failures each
/// terminate the job. A transient fault fails the whole call, which is an
/// accepted trade-off for a low-QPS assistive tool.
pub struct VideoJobDriver<A> {
    api: A,
    bucket: String,
    poll_interval: Duration,
    max_polls: Option<u32>,
    sleeper: Box<dyn Sleeper>,
}

impl<A: VideoJobApi> VideoJobDriver<A> {
    pub fn new(api: A, bucket: impl Into<String>) -> Self {
        Self {
            api,
            bucket: bucket.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls: None,
            sleeper: Box::new(ThreadSleeper),
        }
    }

    /// Bucket, poll interval, and poll budget from the application config.
    pub fn from_config(api: A, config: &Config) -> Self {
        Self {
            api,
            bucket: config.gcs_bucket.clone(),
            poll_interval: Duration::from_secs(config.poll_interval_secs),
            max_polls: config.max_polls,
            sleeper: Box::new(ThreadSleeper),
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Cap the number of status polls. Absent means poll until the job
    /// reaches a terminal state, matching the external job's own lifetime.
    pub fn with_max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = Some(max_polls);
        self
    }

    pub fn with_sleeper(mut self, sleeper: Box<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Run one job to completion. Blocks for the job's full duration —
    /// callers must invoke this off the request-handling thread.
    ///
    /// Returns the precomputed output location. The terminal response
    /// payload is deliberately not consulted for a canonical location:
    /// the external system is assumed to honor the requested one.
    pub fn run(
        &self,
        prompt: &str,
        slug: &str,
        duration_seconds: Option<f64>,
        fps: Option<u32>,
    ) -> Result<String, VideoError> {
        let output_uri = format!("gs://{}/{}.mp4", self.bucket, slug);
        let config = VideoGenerationConfig {
            aspect_ratio: "16:9".to_string(),
            storage_uri: output_uri.clone(),
            duration_seconds,
            fps,
        };

        info!(slug, output_uri = %output_uri, "Starting video generation job");

        let mut operation = self
            .api
            .submit(prompt, &config)
            .map_err(|e| VideoError::Submission(e.into()))?;
        info!(operation = %operation.name, "Video generation job submitted");

        let mut polls: u32 = 0;
        while !operation.done {
            if let Some(max) = self.max_polls {
                if polls >= max {
                    warn!(operation = %operation.name, polls, "Giving up on video job");
                    return Err(VideoError::Timeout { polls });
                }
            }
            self.sleeper.sleep(self.poll_interval);
            polls += 1;
            debug!(operation = %operation.name, polls, "Polling video job");
            operation = self
                .api
                .poll(&operation)
                .map_err(|e| VideoError::Poll(e.into()))?;
        }

        // Terminal. An error payload wins over any result also present.
        if let Some(error) = operation.error {
            warn!(operation = %operation.name, error = %error, "Video generation failed");
            return Err(VideoError::Execution(error));
        }

        if operation.response.is_none() {
            warn!(operation = %operation.name, "Video job finished without a response payload");
            return Err(VideoError::Execution(OperationError {
                code: None,
                message: Some("operation finished without a response payload".to_string()),
            }));
        }

        info!(output_uri = %output_uri, "Video generation complete");
        Ok(output_uri)
    }
}

// ---------------------------------------------------------------------------
// VideoStudio
// ---------------------------------------------------------------------------

/// The video generation orchestrator: suggest a title, derive a slug,
/// offload the blocking job driver, return the (title, location) pair.
pub struct VideoStudio<G, A> {
    text: G,
    driver: Arc<VideoJobDriver<A>>,
}

impl<G, A> VideoStudio<G, A>
where
    G: TextGenerator,
    A: VideoJobApi + 'static,
{
    pub fn new(text: G, driver: VideoJobDriver<A>) -> Self {
        Self {
            text,
            driver: Arc::new(driver),
        }
    }

    /// Generate a video for one request. Steps run strictly in order:
    /// the output name derives from the suggested title, so title
    /// suggestion must finish before submission.
    pub async fn generate(&self, req: &VideoRequest) -> Result<GeneratedVideo, VideoError> {
        let title = self.suggest_title(&req.prompt).await;
        let slug = make_slug(&title);
        info!(title = %title, slug = %slug, "Generating video");

        let driver = Arc::clone(&self.driver);
        let prompt = req.prompt.clone();
        let job_slug = slug.clone();
        let (duration_seconds, fps) = (req.duration_seconds, req.fps);

        // One blocking invocation per call; the worker thread goes back to
        // tokio's pool when the closure returns. A panic in the worker
        // resumes on this task.
        let handle =
            tokio::task::spawn_blocking(move || driver.run(&prompt, &job_slug, duration_seconds, fps));
        let video_uri = match handle.await {
            Ok(result) => result?,
            Err(join_err) => std::panic::resume_unwind(join_err.into_panic()),
        };

        if video_uri.is_empty() {
            return Err(VideoError::EmptyResult);
        }

        Ok(GeneratedVideo {
            suggested_title: title,
            video_uri,
            status: VideoStatus::Completed,
        })
    }

    /// Best-effort title suggestion. Any failure falls back to a fixed
    /// title rather than failing the call.
    async fn suggest_title(&self, prompt: &str) -> String {
        match self.text.generate(&prompts::video_title_prompt(prompt)).await {
            Ok(text) => text.trim().replace('"', ""),
            Err(err) => {
                warn!(error = %err, "Title suggestion failed, using fallback title");
                FALLBACK_TITLE.to_string()
            }
        }
    }
}
