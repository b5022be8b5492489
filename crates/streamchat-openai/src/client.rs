use async_stream::try_stream;

use eventsource_stream::Eventsource;
use futures_core::Stream;
use futures_util::StreamExt;
use reqwest::{
    Client as HttpClient,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};

use crate::{
    api_v1::{ChatCompletionChunkResponse, ChatCompletionRequest, ChatCompletionStreamPayload},
    error::OpenAiError,
};

/// Marker line closing an OpenAI-style event stream.
const DONE_MARKER: &str = "[DONE]";

/// Minimal HTTP client for the *chat/completions* endpoint of an
/// OpenAI-compatible server.
///
/// * Streaming only; every call opens one server-sent-events response.
/// * Accepts and returns the `api_v1` request / chunk structs defined in this
///   crate.
/// * Shares a single `reqwest::Client`, so cloning `OpenAiClient` is cheap.
#[derive(Clone, Debug)]
pub struct OpenAiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, http: HttpClient) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn headers(&self) -> Result<HeaderMap, OpenAiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("text/event-stream"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        Ok(headers)
    }

    /// Perform a **streaming** chat completion.
    ///
    /// Yields one parsed chunk per `data:` event until the server sends
    /// `[DONE]` or closes the body. Dropping the stream drops the response
    /// and with it the connection.
    pub fn chat_completion_stream(
        &self,
        mut request: ChatCompletionRequest,
    ) -> impl Stream<Item = Result<ChatCompletionChunkResponse, OpenAiError>> + Send + '_ {
        request.stream = Some(true);
        let url = format!("{}/chat/completions", self.base);

        try_stream! {
            let headers = self.headers()?;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                %url,
                model = %request.model,
                messages = request.messages.len(),
                "opening chat completion stream"
            );

            let resp = self.http.post(url).headers(headers).json(&request).send().await?;

            if !resp.status().is_success() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();

                #[cfg(feature = "tracing")]
                tracing::warn!(%status, "chat completion request rejected");

                return Err::<(), _>(OpenAiError::Api { status, body })?;
            }

            let mut events = resp.bytes_stream().eventsource();

            while let Some(event) = events.next().await {
                let event = event?;
                let data = event.data.trim();
                if data.is_empty() {
                    continue;
                }
                if data == DONE_MARKER {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("chat completion stream finished");
                    return;
                }

                match serde_json::from_str::<ChatCompletionStreamPayload>(data)? {
                    ChatCompletionStreamPayload::Chunk(chunk) => {
                        yield chunk;
                    }
                    ChatCompletionStreamPayload::Error(envelope) => {
                        let message = envelope.into_body().describe();

                        #[cfg(feature = "tracing")]
                        tracing::warn!(%message, "server reported error mid-stream");

                        return Err::<(), _>(OpenAiError::Stream(message))?;
                    }
                }
            }

            #[cfg(feature = "tracing")]
            tracing::debug!("chat completion stream closed without [DONE]");
        }
    }
}
