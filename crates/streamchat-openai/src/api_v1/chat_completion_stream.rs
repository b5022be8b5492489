use serde::Deserialize;

use super::{
    chat_completion::{FinishReason, MessageRole},
    common::ApiErrorEnvelope,
};

/// A delta message as returned when `stream = true`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChatCompletionMessageDelta {
    #[serde(default)]
    pub role: Option<MessageRole>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A single streaming choice payload.
#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionChunkChoice {
    pub index: i64,
    #[serde(default)]
    pub delta: ChatCompletionMessageDelta,
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

/// The outermost object sent for each SSE chunk.
#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionChunkResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<ChatCompletionChunkChoice>,
}

impl ChatCompletionChunkResponse {
    /// Content fragment of the first choice, if this chunk carried one.
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .find(|choice| choice.index == 0)
            .and_then(|choice| choice.delta.content)
    }
}

/// Anything a server may put into one `data:` line besides `[DONE]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ChatCompletionStreamPayload {
    Chunk(ChatCompletionChunkResponse),
    Error(ApiErrorEnvelope),
}
