use thiserror::Error;

/// Errors produced while turning an uploaded document into plain text.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file extension is not one of the supported document or image
    /// formats. Carries the offending extension (empty when the path has none).
    #[error("unsupported file format: .{0}")]
    UnsupportedFormat(String),
}

/// Errors produced while parsing the generative model's reply.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The model returned no text at all (or only whitespace).
    #[error("model returned an empty response")]
    EmptyResponse,

    /// The reply contained no recoverable JSON payload. The whole reply is
    /// discarded; no fields are salvaged from a partial parse.
    #[error("model response is not valid JSON: {0}")]
    MalformedResponse(String),
}
