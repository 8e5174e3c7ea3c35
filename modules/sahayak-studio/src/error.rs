use genai_client::OperationError;
use thiserror::Error;

type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Failure kinds of the video generation workflow. Title suggestion failure
/// is recovered inside the orchestrator and never surfaces here.
#[derive(Debug, Error)]
pub enum VideoError {
    /// The external system rejected the job submission. Not retried.
    #[error("Video job submission failed: {0}")]
    Submission(#[source] Cause),

    /// A status re-fetch failed mid-poll. Fatal for the whole job.
    #[error("Video job status poll failed: {0}")]
    Poll(#[source] Cause),

    /// The job reached a terminal state carrying an error payload, or
    /// finished with neither error nor result.
    #[error("Video generation failed: {0}")]
    Execution(#[source] OperationError),

    /// The job completed but yielded no output location.
    #[error("Video generation completed but no output location was returned")]
    EmptyResult,

    /// The job was still running after the configured poll budget.
    /// Unreachable under the default unbounded configuration.
    #[error("Video job still running after {polls} status polls")]
    Timeout { polls: u32 },
}
