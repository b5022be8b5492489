//! One conversation: history plus the current settings.
use std::{io, pin::pin};

use futures_util::StreamExt;
use streamchat_core::{
    ChatClient,
    error::{ChatError, Result},
    generic::{History, Turn},
    model::Model,
    parameters::GenerationParameters,
    provider::StreamingChatProvider,
};

use super::render::Renderer;

/// How a submitted turn ended.
#[derive(Debug)]
pub enum TurnOutcome {
    /// The full reply; the turn was appended to the history.
    Completed(String),
    /// The reply failed; the history is unchanged.
    Failed(ChatError),
}

/// Owns the chat history and the settings controls of one user.
pub struct ChatSession<B> {
    client: ChatClient<B>,
    history: History,
    params: GenerationParameters,
}

impl<B: StreamingChatProvider> ChatSession<B> {
    pub fn new(client: ChatClient<B>, params: GenerationParameters) -> Self {
        Self {
            client,
            history: History::new(),
            params,
        }
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }

    /// Forget every turn so far.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn set_temperature(&mut self, temperature: f64) -> Result<()> {
        self.update(self.params.clone().with_temperature(temperature))
    }

    pub fn set_max_tokens(&mut self, max_tokens: u32) -> Result<()> {
        self.update(self.params.clone().with_max_tokens(max_tokens))
    }

    pub fn set_model(&mut self, model: Model) -> Result<()> {
        self.update(self.params.clone().with_model(model))
    }

    fn update(&mut self, params: GenerationParameters) -> Result<()> {
        params.validate()?;
        tracing::debug!(?params, "settings changed");
        self.params = params;
        Ok(())
    }

    /// Stream the assistant's reply to `message` into `renderer`.
    ///
    /// On success the turn is appended to the history. On failure the error
    /// is rendered as the reply, whatever was already shown stays visible,
    /// and the history is left untouched. Only rendering failures surface
    /// as `Err`.
    pub async fn submit<R: Renderer>(
        &mut self,
        message: &str,
        renderer: &mut R,
    ) -> io::Result<TurnOutcome> {
        tracing::info!(
            model = %self.params.model,
            turns = self.history.len(),
            "submitting message"
        );

        renderer.begin()?;
        let mut reply = String::new();
        let mut failure = None;
        {
            let mut replies = pin!(self.client.respond(message, &self.history, &self.params));
            while let Some(item) = replies.next().await {
                match item {
                    Ok(partial) => {
                        renderer.partial(&partial)?;
                        reply = partial;
                    }
                    Err(err) => {
                        failure = Some(err);
                        break;
                    }
                }
            }
        }

        match failure {
            None => {
                renderer.finish()?;
                tracing::info!(chars = reply.chars().count(), "reply completed");
                self.history.push(Turn::new(message, reply.as_str()));
                Ok(TurnOutcome::Completed(reply))
            }
            Some(err) => {
                tracing::warn!(error = %err, "reply failed");
                renderer.error(&err)?;
                Ok(TurnOutcome::Failed(err))
            }
        }
    }
}
