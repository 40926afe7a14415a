use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed with status: {0}")]
    UnexpectedStatus(String),

    #[error("JSON parsing error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Structured failure reported by weatherstack in the response body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    pub code: i64,
    pub error_type: String,
    pub message: String,
}

pub type Result<T> = std::result::Result<T, FetchError>;
