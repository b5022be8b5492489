use std::pin::Pin;

use crate::OpenAiAdapter;
use crate::api_v1::ChatCompletionRequest;
use futures_core::stream::Stream;
use streamchat_core::error::{ChatError, Result};
use streamchat_core::provider::{ChatStreamParameters, StreamingChatProvider};

impl StreamingChatProvider for OpenAiAdapter {
    type Delta<'s>
        = Pin<Box<dyn Stream<Item = Result<Option<String>>> + Send + 's>>
    where
        Self: 's;

    fn chat_complete_stream<'s>(&'s self, params: ChatStreamParameters) -> Self::Delta<'s> {
        let client = self.client.clone();
        let request = ChatCompletionRequest::from(params);

        Box::pin(async_stream::try_stream! {
            use futures_util::StreamExt;

            let stream = client.chat_completion_stream(request);
            futures_util::pin_mut!(stream);

            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(ChatError::from)?;
                yield chunk.into_content();
            }
        })
    }
}
