use anyhow::Result;

/// Output constraint requested from the model endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Free-form text (markdown)
    Text,
    /// Ask the endpoint to constrain output to JSON
    Json,
}

/// Trait for hosted generative-model providers. One call is one stateless
/// request/response round trip; retries and timeouts are the caller's
/// problem (and deliberately nobody's, for now).
#[async_trait::async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Send `prompt` to the model and return its raw text reply
    async fn generate(&self, prompt: &str, format: ResponseFormat) -> Result<String>;
}
