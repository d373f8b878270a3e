//! Error types for page loading, loader configuration and the countdown.

use thiserror::Error;

/// Failures of a single page load. All of them are absorbed by the loader.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("API error: {0}")]
    Status(u16),

    /// The body was not a page object.
    #[error("Failed to parse response: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Items arrived but the target container does not exist.
    #[error("Container '{0}' not found")]
    MissingContainer(String),

    /// The fetch thread went away without reporting a result.
    #[error("Page request was dropped before completing")]
    WorkerGone,
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadError::Status(status.as_u16()),
            None => LoadError::Transport(err.to_string()),
        }
    }
}

/// Invalid loader configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    #[error("Endpoint must not be empty")]
    EmptyEndpoint,

    #[error("Trigger offset must be a finite, non-negative distance (got {0})")]
    InvalidTriggerOffset(f32),
}

/// Draft window settings that could not be interpreted.
#[derive(Error, Debug, PartialEq)]
pub enum CountdownError {
    #[error("Invalid timestamp '{value}' in {field}")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
    },
}
