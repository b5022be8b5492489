use crate::{
    error::Result,
    generic::Message,
    model::Model,
    parameters::GenerationParameters,
};
use futures_core::stream::Stream;

/// A backend turns one chat request into a network call to a concrete
/// endpoint and delivers the model's answer **incrementally**.
///
/// The stream yields one item per upstream chunk: `Some(text)` when the
/// chunk carried a content fragment (possibly empty), `None` when it did not
/// (role announcements, finish markers, usage reports). Accumulating the
/// fragments is left to [`crate::accumulate::accumulate`].
///
/// Dropping the stream must release the underlying connection.
pub trait StreamingChatProvider: Send + Sync {
    type Delta<'s>: Stream<Item = Result<Option<String>>> + Send + 's
    where
        Self: 's;

    /// Start a streaming chat completion.
    fn chat_complete_stream<'s>(&'s self, params: ChatStreamParameters) -> Self::Delta<'s>;
}

/// Everything a backend needs for one streamed completion.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatStreamParameters {
    pub messages: Vec<Message>,
    pub model: Model,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl ChatStreamParameters {
    pub fn new(messages: Vec<Message>, generation: &GenerationParameters) -> Self {
        Self {
            messages,
            model: generation.model.clone(),
            temperature: generation.temperature,
            max_tokens: generation.max_tokens,
        }
    }
}
