//! Error types for clubhouse-pr

use thiserror::Error;

/// Result alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while linking a pull request to a story
#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration is missing or invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// The trigger payload is missing required fields
    #[error("invalid event payload: {0}")]
    Payload(String),

    /// GitHub API error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Story tracker API error
    #[error("story tracker error: {0}")]
    Tracker(String),

    /// The tracker has no story for the requested id
    #[error("story {0} not found")]
    StoryNotFound(String),

    /// Failed to read the trigger payload file
    #[error("failed to read event payload: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the trigger payload
    #[error("failed to parse event payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Tracker(err.to_string())
    }
}
