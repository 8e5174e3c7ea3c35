use std::env;

use tracing::warn;

/// Application configuration loaded from environment variables.
/// Built once at startup and passed by reference into the studio —
/// never ambient global state.
#[derive(Debug, Clone)]
pub struct Config {
    // Google Generative AI
    pub google_api_key: String,
    pub text_model: String,
    pub video_model: String,

    // Output storage
    pub gcs_bucket: String,

    // Video job polling
    pub poll_interval_secs: u64,
    /// Maximum number of status polls before the driver gives up.
    /// Absent means poll until the job reaches a terminal state.
    pub max_polls: Option<u32>,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            google_api_key: required_env("GOOGLE_API_KEY"),
            text_model: env::var("TEXT_MODEL").unwrap_or_else(|_| "gemini-2.5-pro".to_string()),
            video_model: env::var("VIDEO_MODEL")
                .unwrap_or_else(|_| "veo-3.0-generate-001".to_string()),
            gcs_bucket: normalize_gcs_bucket(required_env("GCS_BUCKET_NAME")),
            poll_interval_secs: env::var("VIDEO_POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .expect("VIDEO_POLL_INTERVAL_SECS must be a number"),
            max_polls: env::var("VIDEO_MAX_POLLS")
                .ok()
                .map(|v| v.parse().expect("VIDEO_MAX_POLLS must be a number")),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}

/// Strip a conventional `gs://` scheme prefix from a configured bucket name.
/// Output object URIs are assembled as `gs://{bucket}/{name}`, so a bucket
/// configured with the scheme would double it.
pub fn normalize_gcs_bucket(bucket: String) -> String {
    match bucket.strip_prefix("gs://") {
        Some(stripped) => {
            warn!(bucket = %stripped, "Removed gs:// prefix from configured GCS bucket name");
            stripped.to_string()
        }
        None => bucket,
    }
}
