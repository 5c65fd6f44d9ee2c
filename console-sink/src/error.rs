//!
//! Errors produced by [`workflow_console_sink`](super)
//!

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown log level: {0}")]
    InvalidLevel(String),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Custom(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Custom(s.to_string())
    }
}

impl Error {
    pub fn custom<T: ToString>(s: T) -> Self {
        Error::Custom(s.to_string())
    }
}
