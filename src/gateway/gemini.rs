use crate::config::Config;
use crate::error::GatewayError;
use crate::gateway::{GenerativeProvider, ResponseFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Hosted generative-model provider for the Gemini `generateContent` API
pub struct GeminiProvider {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new provider. Defaults: the public Gemini endpoint and the
    /// model the application was built against.
    pub fn new(api_key: String, base_url: Option<&str>, model: Option<&str>) -> Self {
        Self {
            base_url: base_url
                .unwrap_or("https://generativelanguage.googleapis.com")
                .trim_end_matches('/')
                .to_string(),
            model: model.unwrap_or("gemini-3-flash-preview").to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Build from configuration; fails when no API key is resolvable
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.require_gemini_api_key()?;
        Ok(Self::new(
            api_key,
            Some(&config.gemini.base_url),
            Some(&config.gemini.model),
        ))
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Concatenate the text parts of the first candidate; a reply carrying no
/// text at all is an EmptyResponse.
fn reply_text(response: GenerateContentResponse) -> Result<String> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GatewayError::EmptyResponse.into());
    }

    Ok(text)
}

#[async_trait::async_trait]
impl GenerativeProvider for GeminiProvider {
    async fn generate(&self, prompt: &str, format: ResponseFormat) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: match format {
                ResponseFormat::Json => Some(GenerationConfig {
                    response_mime_type: "application/json".to_string(),
                }),
                ResponseFormat::Text => None,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to the Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API returned error {}: {}", status, error_text);
        }

        let reply: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        reply_text(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_defaults() {
        let provider = GeminiProvider::new("key".to_string(), None, None);
        assert_eq!(
            provider.base_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(provider.model, "gemini-3-flash-preview");
    }

    #[test]
    fn test_provider_trims_trailing_slash() {
        let provider =
            GeminiProvider::new("key".to_string(), Some("http://localhost:8080/"), None);
        assert_eq!(provider.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_from_config_without_key_fails() {
        let config = Config::default();
        if config.gemini_api_key().is_none() {
            assert!(GeminiProvider::from_config(&config).is_err());
        }
    }

    #[test]
    fn test_request_serialization_json_format() {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: "Kiểm tra chính tả".to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Kiểm tra chính tả");
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn test_request_serialization_text_format_omits_config() {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: "chi tiết".to_string(),
                }],
            }],
            generation_config: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn test_reply_text_concatenates_first_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "phần một, "}, {"text": "phần hai"}]}},
                    {"content": {"parts": [{"text": "candidate thứ hai bị bỏ qua"}]}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(reply_text(response).unwrap(), "phần một, phần hai");
    }

    #[test]
    fn test_reply_without_candidates_is_empty_response() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        let err = reply_text(response).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GatewayError>(),
            Some(GatewayError::EmptyResponse)
        ));
    }

    #[test]
    fn test_reply_with_blank_text_is_empty_response() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "  \n "}]}}]}"#,
        )
        .unwrap();
        assert!(reply_text(response).is_err());
    }
}
