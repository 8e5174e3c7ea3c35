use std::fmt;

use serde::{Deserialize, Serialize};

// --- generateContent wire types ---

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Wrap a single text prompt in the nested contents/parts structure.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

// --- predictLongRunning (video generation) wire types ---

/// Generation parameters for `models/{model}:predictLongRunning`.
/// Absent optional fields are omitted from the request body entirely —
/// the API rejects explicit nulls where it accepts omission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGenerationConfig {
    pub aspect_ratio: String,
    pub storage_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct PredictLongRunningRequest<'a> {
    pub instances: Vec<VideoInstance<'a>>,
    pub parameters: &'a VideoGenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct VideoInstance<'a> {
    pub prompt: &'a str,
}

/// A long-running operation handle. Created by submission, refreshed by
/// re-fetching from the API — never mutated locally.
#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    pub error: Option<OperationError>,
    pub response: Option<serde_json::Value>,
}

/// Terminal failure payload of a long-running operation.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationError {
    pub code: Option<i32>,
    pub message: Option<String>,
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(msg)) => write!(f, "{msg} (code {code})"),
            (None, Some(msg)) => write!(f, "{msg}"),
            (Some(code), None) => write!(f, "operation error code {code}"),
            (None, None) => write!(f, "unspecified operation error"),
        }
    }
}

impl std::error::Error for OperationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_config_omits_absent_optionals() {
        let config = VideoGenerationConfig {
            aspect_ratio: "16:9".to_string(),
            storage_uri: "gs://bucket/clip.mp4".to_string(),
            duration_seconds: None,
            fps: None,
        };
        let json = serde_json::to_value(&config).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("durationSeconds"));
        assert!(!obj.contains_key("fps"));
        assert_eq!(obj["aspectRatio"], "16:9");
        assert_eq!(obj["storageUri"], "gs://bucket/clip.mp4");
    }

    #[test]
    fn video_config_serializes_present_optionals_camel_case() {
        let config = VideoGenerationConfig {
            aspect_ratio: "16:9".to_string(),
            storage_uri: "gs://bucket/clip.mp4".to_string(),
            duration_seconds: Some(5.0),
            fps: Some(24),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["durationSeconds"], 5.0);
        assert_eq!(json["fps"], 24);
    }

    #[test]
    fn operation_done_defaults_to_false() {
        let op: Operation =
            serde_json::from_str(r#"{"name": "models/veo/operations/abc"}"#).unwrap();
        assert!(!op.done);
        assert!(op.error.is_none());
        assert!(op.response.is_none());
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let resp: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "Hello "}, {"text": "World"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(resp.text().as_deref(), Some("Hello World"));
    }

    #[test]
    fn response_text_is_none_for_empty_candidates() {
        let resp: GenerateContentResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(resp.text().is_none());
    }
}
