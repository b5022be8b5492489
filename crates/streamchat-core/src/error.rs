//! Unified error type exposed by **`streamchat-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before handing them to the [`ChatClient`](crate::ChatClient). The chat
//! surface only ever has to match on three failure classes: the endpoint
//! could not be reached, the endpoint answered with something unusable, or
//! the local configuration is wrong.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ChatError>;

#[derive(Debug, Error)]
pub enum ChatError {
    /// Connection refused, timed out, or the transport broke off while the
    /// response body was still streaming.
    #[error("remote endpoint failed: {0}")]
    RemoteEndpoint(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The endpoint answered, but with a non-success status or a payload we
    /// could not make sense of. `status` is `None` for failures reported
    /// inside an already-open stream.
    #[error("{}", remote_api_message(.status, .message))]
    RemoteApi {
        status: Option<u16>,
        message: String,
    },

    /// Invalid local parameters or a model the endpoint does not serve.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ChatError {
    pub fn remote_api(status: Option<u16>, message: impl Into<String>) -> Self {
        ChatError::RemoteApi {
            status,
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        ChatError::Configuration(message.into())
    }
}

fn remote_api_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("remote API returned status {status}: {message}"),
        None => format!("remote API error: {message}"),
    }
}
