use std::{
    future::Future,
    io::{self, Write},
};

use streamchat_core::{
    model::Model,
    parameters::{GenerationParameters, MAX_TOKENS_STEP, TEMPERATURE_STEP},
    provider::StreamingChatProvider,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::{
    command::{Command, HELP},
    render::TerminalRenderer,
    session::ChatSession,
};

pub const TITLE: &str = "vLLM Demo Chatbot";
const PROMPT: &str = "you> ";

/// Drive `session` from `input` until end of input or `/quit`.
///
/// `interrupt` is raced against every read and every streamed reply. At the
/// prompt it ends the session; during a reply it abandons the reply, which
/// closes the upstream request, and the turn is not added to the history.
pub async fn run<B, I, W, F, Fut>(
    session: &mut ChatSession<B>,
    input: I,
    mut out: W,
    mut interrupt: F,
) -> io::Result<()>
where
    B: StreamingChatProvider,
    I: AsyncBufRead + Unpin,
    W: Write,
    F: FnMut() -> Fut,
    Fut: Future,
{
    writeln!(out, "{TITLE} (type /help for commands)")?;
    writeln!(out, "{}", describe_settings(session.params()))?;

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = interrupt() => None,
        };
        let Some(line) = line else {
            writeln!(out)?;
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "[error] {err}")?;
                continue;
            }
        };

        let applied = match command {
            Command::Empty => Ok(()),
            Command::Say(message) => {
                let interrupted = {
                    let mut renderer = TerminalRenderer::new(&mut out);
                    tokio::select! {
                        outcome = session.submit(&message, &mut renderer) => {
                            outcome?;
                            false
                        }
                        _ = interrupt() => true,
                    }
                };
                if interrupted {
                    tracing::info!("reply interrupted by user");
                    writeln!(out, "\n[interrupted]")?;
                }
                Ok(())
            }
            Command::Temperature(value) => session.set_temperature(value),
            Command::MaxTokens(value) => session.set_max_tokens(value),
            Command::Model(model) => session.set_model(model),
            Command::Models => {
                for model in Model::CHOICES {
                    let marker = if model == session.params().model { "*" } else { " " };
                    writeln!(out, "{marker} {model}")?;
                }
                Ok(())
            }
            Command::Settings => {
                writeln!(out, "{}", describe_settings(session.params()))?;
                Ok(())
            }
            Command::Reset => {
                session.reset();
                writeln!(out, "conversation cleared")?;
                Ok(())
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                Ok(())
            }
            Command::Quit => break,
        };

        match applied {
            Ok(()) => {}
            Err(err) => writeln!(out, "[error] {err}")?,
        }
    }

    out.flush()
}

fn describe_settings(params: &GenerationParameters) -> String {
    format!(
        "temperature {} (step {TEMPERATURE_STEP}) | max tokens {} (step {MAX_TOKENS_STEP}) | model {}",
        params.temperature, params.max_tokens, params.model
    )
}

#[cfg(test)]
mod tests {
    use std::{future::pending, pin::Pin};

    use async_stream::stream;
    use futures_util::Stream;
    use pretty_assertions::assert_eq;
    use streamchat_core::{
        ChatClient,
        error::Result,
        provider::ChatStreamParameters,
    };

    use super::*;

    /// Replies with the last user message reversed, one char per chunk.
    struct Reverse;

    impl StreamingChatProvider for Reverse {
        type Delta<'s>
            = Pin<Box<dyn Stream<Item = Result<Option<String>>> + Send + 's>>
        where
            Self: 's;

        fn chat_complete_stream<'s>(&'s self, params: ChatStreamParameters) -> Self::Delta<'s> {
            let last = params.messages.last().map(|m| m.content.clone()).unwrap_or_default();
            Box::pin(stream! {
                for c in last.chars().rev() {
                    yield Ok(Some(c.to_string()));
                }
            })
        }
    }

    /// Never finishes a reply.
    struct Stall;

    impl StreamingChatProvider for Stall {
        type Delta<'s>
            = Pin<Box<dyn Stream<Item = Result<Option<String>>> + Send + 's>>
        where
            Self: 's;

        fn chat_complete_stream<'s>(&'s self, _params: ChatStreamParameters) -> Self::Delta<'s> {
            Box::pin(stream! {
                yield Ok(Some("thinking".to_string()));
                pending::<()>().await;
            })
        }
    }

    async fn drive<B: StreamingChatProvider>(session: &mut ChatSession<B>, input: &str) -> String {
        let mut out = Vec::new();
        run(session, input.as_bytes(), &mut out, pending::<()>)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_chat_and_settings_roundtrip() {
        let mut session = ChatSession::new(ChatClient::new(Reverse), GenerationParameters::default());

        let actual = drive(&mut session, "abc\n/temperature 0.2\n/settings\n/quit\nignored\n").await;

        let expected = "\
vLLM Demo Chatbot (type /help for commands)
temperature 0.6 (step 0.05) | max tokens 500 (step 64) | model deepseek-ai/DeepSeek-R1-Distill-Qwen-7B
you> assistant> cba
you> you> temperature 0.2 (step 0.05) | max tokens 500 (step 64) | model deepseek-ai/DeepSeek-R1-Distill-Qwen-7B
you> ";
        assert_eq!(actual, expected);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.params().temperature, 0.2);
    }

    #[tokio::test]
    async fn test_invalid_input_reports_and_continues() {
        let mut session = ChatSession::new(ChatClient::new(Reverse), GenerationParameters::default());

        let actual = drive(&mut session, "/temperature 2\n/bogus\n").await;

        assert!(actual.contains("[error] configuration error: temperature 2 outside 0..=1"));
        assert!(actual.contains("[error] configuration error: unknown command `/bogus`"));
        assert_eq!(session.params().temperature, 0.6);
        assert!(actual.ends_with("you> \n"));
    }

    #[tokio::test]
    async fn test_models_marks_current_choice() {
        let mut session = ChatSession::new(ChatClient::new(Reverse), GenerationParameters::default());

        let actual = drive(
            &mut session,
            "/model deepseek-ai/DeepSeek-R1-Distill-Qwen-32B\n/models\n",
        )
        .await;

        assert!(actual.contains("  deepseek-ai/DeepSeek-R1-Distill-Qwen-7B\n"));
        assert!(actual.contains("* deepseek-ai/DeepSeek-R1-Distill-Qwen-32B\n"));
    }

    #[tokio::test]
    async fn test_reset_forgets_history() {
        let mut session = ChatSession::new(ChatClient::new(Reverse), GenerationParameters::default());

        drive(&mut session, "one\ntwo\n/reset\n").await;

        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_interrupt_abandons_reply() {
        let mut session = ChatSession::new(ChatClient::new(Stall), GenerationParameters::default());
        let mut out = Vec::new();

        run(&mut session, "Hi\n".as_bytes(), &mut out, || {
            tokio::time::sleep(std::time::Duration::from_millis(20))
        })
        .await
        .unwrap();

        let actual = String::from_utf8(out).unwrap();
        assert!(actual.contains("assistant> thinking\n[interrupted]\n"));
        assert!(session.history().is_empty());
    }
}
