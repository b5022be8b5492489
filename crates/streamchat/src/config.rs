//! Command-line and environment configuration of the `streamchat` binary.
use std::time::Duration;

use clap::Parser;
use streamchat_core::{
    error::Result,
    model::Model,
    parameters::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, GenerationParameters},
};
use streamchat_openai::{DEFAULT_API_KEY, DEFAULT_BASE_URL, OpenAiAdapter, OpenAiAdapterBuilder};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LOG_FILTER: &str = "streamchat=info";

#[derive(Debug, Clone, Parser)]
#[command(name = "streamchat", version, about = "vLLM Demo Chatbot: chat with an OpenAI-compatible server from the terminal")]
pub struct Cli {
    /// Base URL of the OpenAI-compatible API.
    #[arg(long, env = "STREAMCHAT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Static API key sent as bearer token.
    #[arg(long, env = "STREAMCHAT_API_KEY", default_value = DEFAULT_API_KEY, hide_env_values = true)]
    pub api_key: String,

    /// Initial model, one of the served models.
    #[arg(long, default_value_t = Model::default(), value_parser = parse_model)]
    pub model: Model,

    /// Initial sampling temperature, 0.0 to 1.0.
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f64,

    /// Initial maximum number of new tokens, 0 to 4096.
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Seconds allowed for establishing a connection.
    #[arg(long, default_value_t = 30)]
    pub connect_timeout_secs: u64,

    /// Log filter directives, written to stderr.
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log: String,
}

fn parse_model(s: &str) -> Result<Model> {
    s.parse()
}

impl Cli {
    /// Initial settings, checked against the settings bounds.
    pub fn generation_parameters(&self) -> Result<GenerationParameters> {
        let params = GenerationParameters::new(self.temperature, self.max_tokens, self.model.clone());
        params.validate()?;
        Ok(params)
    }

    pub fn adapter(&self) -> Result<OpenAiAdapter> {
        OpenAiAdapterBuilder::new()
            .with_base_url(self.base_url.as_str())
            .with_api_key(self.api_key.as_str())
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .build()
    }

    /// Install the global subscriber. Logs go to stderr so the transcript on
    /// stdout stays readable.
    pub fn init_tracing(&self) {
        tracing_subscriber::registry()
            .with(EnvFilter::try_new(&self.log).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
