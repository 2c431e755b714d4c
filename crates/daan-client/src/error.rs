// File: src/error.rs
// Purpose: Errors raised while submitting a form or persisting the session

use daan_forms::PageKind;
use thiserror::Error;

/// Message used when a rejection carries no `error` field
pub const DEFAULT_REJECTION: &str = "Failed to create account";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx answer from the signup endpoint
    #[error("{message} (HTTP {status})")]
    Rejected { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("no signup endpoint for {0} submissions")]
    UnsupportedPage(PageKind),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ClientError {
    /// Text shown to the person filling the form
    pub fn user_message(&self) -> &str {
        match self {
            ClientError::Rejected { message, .. } => message,
            _ => DEFAULT_REJECTION,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}
