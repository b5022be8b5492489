//! # `streamchat` – The umbrella crate
//!
//! This crate glues together the building blocks of the workspace and adds a
//! terminal chat surface on top:
//!
//! | Crate                   | What it provides                                                        |
//! |-------------------------|-------------------------------------------------------------------------|
//! | **`streamchat-core`**   | History, models, settings, `StreamingChatProvider`, `ChatClient`, errors |
//! | **`streamchat-openai`** | HTTP/SSE backend for OpenAI-compatible servers *(optional)*              |
//!
//! Enabling the `openai` Cargo feature (on by default) additionally
//! re-exports the backend crate and builds the `streamchat` binary.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use std::pin::pin;
//!
//! use futures_util::StreamExt;
//! use streamchat::{ChatClient, generic::Turn, parameters::GenerationParameters};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = streamchat::openai::OpenAiAdapterBuilder::new_from_env().build()?;
//!     let client = ChatClient::new(backend);
//!     let history = vec![Turn::new("Hi", "Hello! How can I help?")];
//!
//!     let mut replies = pin!(client.respond("Tell me a joke", &history, &GenerationParameters::default()));
//!     while let Some(partial) = replies.next().await {
//!         println!("{}", partial?);
//!     }
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/streamchat/latest")]

pub use streamchat_core::*;

#[cfg(feature = "openai")]
pub mod config;
pub mod surface;

#[cfg(feature = "openai")]
pub use streamchat_openai as openai;
