/// Error types for catalog requests
use std::time::Duration;

use thiserror::Error;

/// Message used whenever a failure would otherwise carry no text.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Everything that can go wrong between issuing a catalog request and holding
/// a mapped view model. The display text is what pages and the CLI show.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Network unreachable, connection refused, body read failures
    #[error("{0}")]
    Transport(String),

    /// No response within the configured maximum wait
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Non-2xx status from the catalog API
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Payload did not have the expected shape
    #[error("Unexpected response from catalog: {0}")]
    Mapping(String),
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        FetchError::Transport(non_empty(message.into()))
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        FetchError::Http {
            status,
            message: non_empty(message.into()),
        }
    }

    pub fn mapping(message: impl Into<String>) -> Self {
        FetchError::Mapping(non_empty(message.into()))
    }

    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn non_empty(message: String) -> String {
    if message.trim().is_empty() {
        UNEXPECTED_ERROR.to_string()
    } else {
        message
    }
}
