use std::{env, sync::Arc, time::Duration};

use reqwest::{Client as HttpClient, Url};
use streamchat_core::error::{ChatError, Result};

use crate::client::OpenAiClient;

/// Base URL of the local vLLM server the demo talks to.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/v1";
/// Static key the demo server is launched with.
pub const DEFAULT_API_KEY: &str = "test-key";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements [`streamchat_core::provider::StreamingChatProvider`].
///
/// * stores the API key and base URL,
/// * owns a shareable, connection-pooled `reqwest::Client`,
/// * is built through [`OpenAiAdapterBuilder`].
///
/// All user-facing functionality sits on [`streamchat_core::ChatClient`] once
/// the adapter is plugged in.
#[derive(Debug)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use streamchat_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .with_base_url("http://localhost:8000/v1")
///     .build()
///     .expect("valid configuration");
/// ```
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) connect_timeout: Option<Duration>,
    pub(crate) http: Option<HttpClient>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder; unset values fall back to the demo defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that picks up `OPENAI_API_KEY` and
    /// `OPENAI_BASE_URL` from the environment.
    ///
    /// # Panics
    ///
    /// Never panics. Invalid values only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: env::var("OPENAI_BASE_URL").ok(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Upper bound for establishing the connection. The response body itself
    /// is not time-limited; long generations stream for as long as needed.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxy settings, custom TLS, …).
    /// The connect timeout is ignored in that case.
    pub fn with_http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`ChatError::Configuration`] – if the base URL does not parse or the
    ///   HTTP client cannot be constructed.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = base_url.trim_end_matches('/');
        Url::parse(base_url)
            .map_err(|e| ChatError::configuration(format!("invalid base URL `{base_url}`: {e}")))?;

        let http = match self.http {
            Some(http) => http,
            None => HttpClient::builder()
                .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
                .build()
                .map_err(|e| ChatError::configuration(format!("building HTTP client: {e}")))?,
        };

        let api_key = self.api_key.unwrap_or_else(|| DEFAULT_API_KEY.to_owned());

        Ok(OpenAiAdapter {
            client: Arc::new(OpenAiClient::new(api_key, base_url, http)),
        })
    }
}
