//! Generic client that answers a chat turn through a single concrete
//! [`StreamingChatProvider`].
//!
//! ```rust,ignore
//! use futures_util::StreamExt;
//! use streamchat_core::{ChatClient, generic::Turn, parameters::GenerationParameters};
//!
//! let client = ChatClient::new(backend);
//! let history = vec![Turn::new("Hi", "Hello")];
//! let mut replies = std::pin::pin!(client.respond("How are you?", &history, &GenerationParameters::default()));
//! while let Some(partial) = replies.next().await {
//!     println!("{}", partial?);
//! }
//! ```
use std::sync::Arc;

use futures_core::stream::Stream;

use crate::{
    accumulate::accumulate,
    error::Result,
    generic::{Turn, flatten_history},
    parameters::GenerationParameters,
    provider::{ChatStreamParameters, StreamingChatProvider},
};

/// A client bound to a single provider.
///
/// Cloning is cheap; every clone shares the same backend. Calls never share
/// state: each `respond` owns its own request, connection and buffer.
#[derive(Debug)]
pub struct ChatClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for ChatClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> ChatClient<B>
where
    B: StreamingChatProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Answer `message` given the prior `history`.
    ///
    /// The returned stream yields the assistant reply accumulated so far,
    /// once per received fragment; render the latest value in place of the
    /// previous one. It is lazy, finite and single-use. Dropping it closes
    /// the upstream request. `history` is only read while building the
    /// request and is not retained.
    pub fn respond<'s>(
        &'s self,
        message: &str,
        history: &[Turn],
        params: &GenerationParameters,
    ) -> impl Stream<Item = Result<String>> + Send + use<'s, B> {
        let request = ChatStreamParameters::new(flatten_history(history, message), params);
        accumulate(self.backend.chat_complete_stream(request))
    }
}
