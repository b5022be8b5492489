//! OpenAI-compatible backend for **streamchat**.
//!
//! Talks to any server exposing `POST /v1/chat/completions` with
//! server-sent-event streaming (vLLM, OpenAI, llama.cpp server, …) and
//! implements [`streamchat_core::provider::StreamingChatProvider`].
mod adapter;
mod provider_impl_chat_stream;

pub use adapter::{
    DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, OpenAiAdapter, OpenAiAdapterBuilder,
};
pub mod api_v1;
mod client;
pub mod error;

pub use client::OpenAiClient;
