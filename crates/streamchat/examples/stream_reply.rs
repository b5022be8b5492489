//! # Streaming Reply – Real-time Example
//!
//! This example shows how to consume the partial responses produced by
//! [`ChatClient::respond`] for a conversation that already has history.
//!
//! Each item is the whole reply so far; only the newly appended part is
//! printed, which is how a terminal "replaces" the previous value.
//!
//! ```bash
//! export OPENAI_BASE_URL=http://localhost:8000/v1   # optional
//! cargo run -p streamchat --example stream_reply
//! ```
//!
//! ---------------------------------------------------------------------------

use std::{
    io::{self, Write},
    pin::pin,
};

use futures_util::StreamExt; // for `next`
use streamchat::openai::OpenAiAdapterBuilder;
use streamchat::{ChatClient, generic::Turn, model::Model, parameters::GenerationParameters};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Point the backend at the server (defaults to the local vLLM demo).
    let backend = OpenAiAdapterBuilder::new_from_env().build()?;
    let client = ChatClient::new(backend);

    // 2. A conversation with one finished turn.
    let history = vec![Turn::new(
        "Hi! Can you help me name a crab?",
        "Of course! Tell me a bit about its personality.",
    )];

    // 3. Settings as the chat surface would supply them.
    let params = GenerationParameters::default()
        .with_temperature(0.3)
        .with_max_tokens(256)
        .with_model(Model::DeepSeekR1DistillQwen7B);

    // 4. Stream the reply.
    let mut replies = pin!(client.respond("It is orange and very fast.", &history, &params));

    print!("Assistant: ");
    io::stdout().flush().ok();

    let mut shown = 0;
    while let Some(partial) = replies.next().await {
        match partial {
            Ok(text) => {
                print!("{}", &text[shown..]);
                shown = text.len();
                io::stdout().flush().ok();
            }
            Err(e) => {
                eprintln!("\n\nError while streaming: {e}");
                break;
            }
        }
    }

    println!("\n\nStream finished ✅");
    Ok(())
}
