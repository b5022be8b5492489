use serde::Deserialize;

#[macro_export]
macro_rules! impl_builder_methods {
    ($builder:ident, $($field:ident: $field_type:ty),*) => {
        impl $builder {
            $(
                pub fn $field(mut self, $field: $field_type) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }
    };
}

/// Error object as reported by OpenAI-compatible servers.
///
/// OpenAI wraps it as `{"error": {...}}`; vLLM sends the bare object with an
/// `"object": "error"` marker. Both shapes are accepted.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum ApiErrorEnvelope {
    Wrapped { error: ApiErrorBody },
    Bare(ApiErrorBody),
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

impl ApiErrorEnvelope {
    pub fn into_body(self) -> ApiErrorBody {
        match self {
            ApiErrorEnvelope::Wrapped { error } => error,
            ApiErrorEnvelope::Bare(body) => body,
        }
    }
}

impl ApiErrorBody {
    /// `message`, prefixed with the error type when the server sent one.
    pub fn describe(&self) -> String {
        match &self.kind {
            Some(kind) => format!("{kind}: {}", self.message),
            None => self.message.clone(),
        }
    }
}

/// Best-effort human readable message for a non-success response body.
pub fn describe_error_body(body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => envelope.into_body().describe(),
        Err(_) => body.trim().to_owned(),
    }
}
