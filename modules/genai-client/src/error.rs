use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenAiError>;

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Model returned no usable text")]
    EmptyResponse,
}

impl From<reqwest::Error> for GenAiError {
    fn from(err: reqwest::Error) -> Self {
        GenAiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for GenAiError {
    fn from(err: serde_json::Error) -> Self {
        GenAiError::Parse(err.to_string())
    }
}
