use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkDigestError {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl From<serde_json::Error> for LinkDigestError {
    fn from(err: serde_json::Error) -> Self {
        LinkDigestError::Parse(err.to_string())
    }
}
