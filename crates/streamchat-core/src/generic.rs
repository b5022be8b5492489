//! Chat history and message types shared by every backend.
//!
//! A [`Turn`] is one finished user/assistant exchange as the chat surface
//! stores it. A [`Message`] is the wire-level unit a backend sends upstream.
//! [`flatten_history`] is the only bridge between the two, and it never
//! reorders, filters or rewrites anything.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One completed exchange. Treat it as immutable once it sits in a history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub assistant: String,
}

impl Turn {
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            assistant: assistant.into(),
        }
    }
}

impl<U: Into<String>, A: Into<String>> From<(U, A)> for Turn {
    fn from((user, assistant): (U, A)) -> Self {
        Turn::new(user, assistant)
    }
}

/// Chronological list of turns, oldest first.
pub type History = Vec<Turn>;

/// Roles a history can produce.
///
/// The `Display` implementation renders the canonical lowercase name used on
/// the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Messages originating from the human user.
    User,
    /// Messages produced by the model.
    Assistant,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Build the outbound message list: every turn as a user message followed by
/// its assistant message, then `message` as the trailing user message.
pub fn flatten_history(history: &[Turn], message: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() * 2 + 1);
    for turn in history {
        messages.push(Message::user(turn.user.as_str()));
        messages.push(Message::assistant(turn.assistant.as_str()));
    }
    messages.push(Message::user(message));
    messages
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_flatten_empty_history() {
        let actual = flatten_history(&[], "Hi");
        let expected = vec![Message::user("Hi")];
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_flatten_single_turn() {
        let history = vec![Turn::new("Hi", "Hello")];

        let actual = flatten_history(&history, "How are you?");
        let expected = vec![
            Message::user("Hi"),
            Message::assistant("Hello"),
            Message::user("How are you?"),
        ];
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_flatten_keeps_order_duplicates_and_empty_content() {
        let history: History = vec![
            ("same", "").into(),
            ("same", "").into(),
            ("", "third answer").into(),
        ];

        let actual = flatten_history(&history, "");
        let expected = vec![
            Message::user("same"),
            Message::assistant(""),
            Message::user("same"),
            Message::assistant(""),
            Message::user(""),
            Message::assistant("third answer"),
            Message::user(""),
        ];
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_flatten_length_is_twice_history_plus_one() {
        let history: History = (0..7)
            .map(|i| Turn::new(format!("q{i}"), format!("a{i}")))
            .collect();

        let actual = flatten_history(&history, "next");

        assert_eq!(actual.len(), 15);
        for (i, pair) in actual[..14].chunks(2).enumerate() {
            assert_eq!(pair[0], Message::user(format!("q{i}")));
            assert_eq!(pair[1], Message::assistant(format!("a{i}")));
        }
        assert_eq!(actual[14], Message::user("next"));
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }
}
