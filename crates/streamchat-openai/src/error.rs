use eventsource_stream::EventStreamError;
use reqwest::{StatusCode, header::InvalidHeaderValue};
use streamchat_core::error::ChatError;

use crate::api_v1::describe_error_body;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("connection lost while streaming: {0}")]
    Transport(reqwest::Error),

    #[error("couldn’t decode payload: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("server returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("server reported an error mid-stream: {0}")]
    Stream(String),

    #[error("malformed event stream: {0}")]
    EventSource(String),

    #[error("invalid API key header: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

impl From<EventStreamError<reqwest::Error>> for OpenAiError {
    fn from(value: EventStreamError<reqwest::Error>) -> Self {
        match value {
            EventStreamError::Transport(err) => OpenAiError::Transport(err),
            other => OpenAiError::EventSource(other.to_string()),
        }
    }
}

impl From<OpenAiError> for ChatError {
    fn from(value: OpenAiError) -> Self {
        match value {
            OpenAiError::Http(err) => from_transport(err),
            OpenAiError::Transport(err) => ChatError::RemoteEndpoint(Box::new(err)),
            OpenAiError::EventSource(message) => {
                ChatError::remote_api(None, format!("malformed event stream: {message}"))
            }
            OpenAiError::Serde(err) => {
                ChatError::remote_api(None, format!("malformed stream chunk: {err}"))
            }
            OpenAiError::Api { status, body } => {
                let message = describe_error_body(&body);
                if status == StatusCode::NOT_FOUND && message.contains("model") {
                    ChatError::configuration(message)
                } else {
                    ChatError::remote_api(Some(status.as_u16()), message)
                }
            }
            OpenAiError::Stream(message) => ChatError::remote_api(None, message),
            OpenAiError::InvalidHeader(err) => {
                ChatError::configuration(format!("invalid API key: {err}"))
            }
        }
    }
}

/// Failures before the body starts streaming. Decoding failures mean the
/// server sent something unusable; everything else means we never got an
/// answer.
fn from_transport(err: reqwest::Error) -> ChatError {
    if err.is_decode() {
        ChatError::remote_api(err.status().map(|s| s.as_u16()), err.to_string())
    } else {
        ChatError::RemoteEndpoint(Box::new(err))
    }
}
