use crate::error::GatewayError;
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse the model's text reply into JSON, tolerating the shapes the model
/// actually produces: clean JSON, JSON inside ```/```json fences, and JSON
/// surrounded by extra prose. A reply that yields no JSON at all is
/// discarded whole; nothing is salvaged from a partial parse.
pub fn parse_json_reply(text: &str) -> Result<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::EmptyResponse.into());
    }

    let clean = strip_fences(trimmed);

    if let Ok(value) = serde_json::from_str(clean) {
        return Ok(value);
    }

    // Loosely-delimited reply: take everything between the first opening
    // and last closing JSON delimiter and try again.
    let sliced = slice_between_delimiters(clean).ok_or_else(|| {
        GatewayError::MalformedResponse("no JSON object or array in reply".to_string())
    })?;

    serde_json::from_str(sliced)
        .map_err(|e| GatewayError::MalformedResponse(e.to_string()).into())
}

/// Parse the reply and deserialize it into a task's expected result type
pub fn parse_reply_as<T: DeserializeOwned>(text: &str) -> Result<T> {
    let value = parse_json_reply(text)?;
    serde_json::from_value(value)
        .map_err(|e| GatewayError::MalformedResponse(e.to_string()).into())
}

/// Strip a markdown code fence, with or without the "json" language tag
fn strip_fences(text: &str) -> &str {
    let rest = if let Some(rest) = text.strip_prefix("```json") {
        rest
    } else if let Some(rest) = text.strip_prefix("```") {
        rest
    } else {
        return text;
    };

    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn slice_between_delimiters(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let end = text.rfind(['}', ']'])?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
