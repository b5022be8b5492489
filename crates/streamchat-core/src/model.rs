//! Model identifiers offered by the chat surface.
//!
//! The demo server hosts a fixed set of models, so the public API is an enum
//! rather than a free-form string. Backends receive the wire identifier via
//! [`Model::id`]; user input goes through [`str::parse`], which rejects
//! anything outside the fixed set.
//!
//! # Example
//!
//! ```rust
//! use streamchat_core::model::Model;
//!
//! let model: Model = "deepseek-ai/DeepSeek-R1-Distill-Qwen-32B".parse().unwrap();
//! assert_eq!(model, Model::DeepSeekR1DistillQwen32B);
//! assert!("gpt-4o".parse::<Model>().is_err());
//! ```
use std::{borrow::Cow, fmt::Display, str::FromStr};

use crate::error::ChatError;

pub const DEEPSEEK_R1_DISTILL_QWEN_7B: &str = "deepseek-ai/DeepSeek-R1-Distill-Qwen-7B";
pub const DEEPSEEK_R1_DISTILL_QWEN_32B: &str = "deepseek-ai/DeepSeek-R1-Distill-Qwen-32B";

/// Universal identifier for a served model.
///
/// * Named variants – the models the demo server is launched with.
/// * `Custom` – any other identifier, for self-hosted setups. Only reachable
///   from code; parsing never produces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Model {
    #[default]
    DeepSeekR1DistillQwen7B,
    DeepSeekR1DistillQwen32B,
    Custom(Cow<'static, str>),
}

impl Model {
    /// The models a user can pick from, in dropdown order.
    pub const CHOICES: [Model; 2] = [Model::DeepSeekR1DistillQwen7B, Model::DeepSeekR1DistillQwen32B];

    pub fn custom(id: impl Into<Cow<'static, str>>) -> Self {
        Model::Custom(id.into())
    }

    /// Identifier sent upstream in the `model` field.
    pub fn id(&self) -> &str {
        match self {
            Model::DeepSeekR1DistillQwen7B => DEEPSEEK_R1_DISTILL_QWEN_7B,
            Model::DeepSeekR1DistillQwen32B => DEEPSEEK_R1_DISTILL_QWEN_32B,
            Model::Custom(id) => id.as_ref(),
        }
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Model {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::CHOICES
            .into_iter()
            .find(|model| model.id() == s)
            .ok_or_else(|| {
                ChatError::configuration(format!(
                    "unknown model `{s}`, expected one of: {}",
                    Model::CHOICES.map(|m| m.id().to_owned()).join(", ")
                ))
            })
    }
}
