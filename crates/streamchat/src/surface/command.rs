//! Parsing of one line of user input.
use streamchat_core::{
    error::{ChatError, Result},
    model::Model,
};

pub const HELP: &str = "\
Type a message and press enter to chat. Start it with `//` to send text
that begins with `/`.

Commands:
  /temperature <0.0-1.0>   sampling temperature (step 0.05)
  /max-tokens <0-4096>     maximum number of new tokens (step 64)
  /model <id>              switch model, see /models
  /models                  list available models
  /settings                show current settings
  /reset                   forget the conversation so far
  /help                    show this help
  /quit                    leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Blank line.
    Empty,
    /// A chat message for the assistant.
    Say(String),
    Temperature(f64),
    MaxTokens(u32),
    Model(Model),
    Models,
    Settings,
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Parse a line of input. Lines not starting with `/` are chat messages
    /// and are kept verbatim apart from the trailing newline. A leading `//`
    /// sends the rest of the line, starting with a single `/`, as a message.
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            return Ok(Command::Empty);
        }
        if let Some(escaped) = line.trim_start().strip_prefix("//") {
            return Ok(Command::Say(format!("/{escaped}")));
        }
        let Some(command) = line.trim_start().strip_prefix('/') else {
            return Ok(Command::Say(line.to_owned()));
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match name {
            "temperature" | "temp" => arg
                .parse()
                .map(Command::Temperature)
                .map_err(|_| ChatError::configuration(format!("invalid temperature `{arg}`"))),
            "max-tokens" | "max_tokens" => arg
                .parse()
                .map(Command::MaxTokens)
                .map_err(|_| ChatError::configuration(format!("invalid max tokens `{arg}`"))),
            "model" => arg.parse().map(Command::Model),
            "models" => Ok(Command::Models),
            "settings" => Ok(Command::Settings),
            "reset" | "clear" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ChatError::configuration(format!(
                "unknown command `/{other}`, try /help"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_plain_text_is_a_message() {
        let actual = Command::parse("  How are you? \n").unwrap();
        let expected = Command::Say("  How are you? ".to_string());
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_double_slash_sends_literal_slash_text() {
        let actual = Command::parse("//etc/hosts is missing\n").unwrap();
        let expected = Command::Say("/etc/hosts is missing".to_string());
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse(" \r\n").unwrap(), Command::Empty);
    }

    #[test]
    fn test_settings_commands() {
        let fixtures = [
            ("/temperature 0.25", Command::Temperature(0.25)),
            ("/temp 1", Command::Temperature(1.0)),
            ("/max-tokens 64", Command::MaxTokens(64)),
            (
                "/model deepseek-ai/DeepSeek-R1-Distill-Qwen-32B",
                Command::Model(Model::DeepSeekR1DistillQwen32B),
            ),
            ("/models", Command::Models),
            ("/settings", Command::Settings),
            ("/reset", Command::Reset),
            ("/help", Command::Help),
            ("/quit", Command::Quit),
        ];

        for (input, expected) in fixtures {
            let actual = Command::parse(input).unwrap();
            assert_eq!(actual, expected, "parsing {input:?}");
        }
    }

    #[test]
    fn test_bad_values_are_configuration_errors() {
        for input in ["/temperature warm", "/max-tokens -1", "/model gpt-4o", "/frobnicate"] {
            let actual = Command::parse(input);
            assert!(
                matches!(actual, Err(ChatError::Configuration(_))),
                "{input:?} should be rejected"
            );
        }
    }
}
