use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of the one-time catalog load. Caught at the load boundary and shown
/// to the user as a placeholder; never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum LoadFailure {
    #[error("catalog request failed: {0}")]
    Transport(String),
    #[error("HTTP error! Status: {0}")]
    Status(u16),
    #[error("catalog payload could not be decoded: {0}")]
    Decode(String),
    #[error("invalid catalog endpoint '{0}'")]
    InvalidEndpoint(String),
}

impl LoadFailure {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}
