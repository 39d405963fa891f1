use thiserror::Error;

pub type Result<T> = std::result::Result<T, PageStoreError>;

#[derive(Debug, Error)]
pub enum PageStoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for PageStoreError {
    fn from(err: reqwest::Error) -> Self {
        PageStoreError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for PageStoreError {
    fn from(err: serde_json::Error) -> Self {
        PageStoreError::Parse(err.to_string())
    }
}
