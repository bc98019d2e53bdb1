//! Anthropic native text generator.
//!
//! Uses the Messages API directly:
//! - `x-api-key` header authentication (not Bearer)
//! - `anthropic-version` header
//! - System prompt as a top-level field
//! - No native JSON mode; JSON requests get an instruction appended to the
//!   system prompt instead

use async_trait::async_trait;
use pagewright_core::error::GeneratorError;
use pagewright_core::generator::{GenerationRequest, GenerationResponse, TextGenerator, Usage};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::openai_compat::http_client;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_TIMEOUT_SECS: u64 = 300;
const JSON_INSTRUCTION: &str = "Respond with a single valid JSON object and nothing else.";

/// Anthropic Messages API generator.
pub struct AnthropicGenerator {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl AnthropicGenerator {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            model: model.into(),
            client: http_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }

    /// Create with a custom base URL (e.g., for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = http_client(timeout);
        self
    }

    fn system_prompt(request: &GenerationRequest) -> Option<String> {
        match (&request.system_prompt, request.json_mode) {
            (Some(system), true) => Some(format!("{system}\n\n{JSON_INSTRUCTION}")),
            (Some(system), false) => Some(system.clone()),
            (None, true) => Some(JSON_INSTRUCTION.to_string()),
            (None, false) => None,
        }
    }

    fn request_body(&self, request: &GenerationRequest) -> serde_json::Value {
        let messages = vec![AnthropicMessage {
            role: "user".into(),
            content: request.prompt.clone(),
        }];

        let mut body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        if let Some(system) = Self::system_prompt(request) {
            body["system"] = serde_json::json!(system);
        }

        body
    }

    fn into_response(api_resp: AnthropicResponse) -> Result<GenerationResponse, GeneratorError> {
        let text: String = api_resp
            .content
            .into_iter()
            .filter_map(|block| match block {
                ResponseContentBlock::Text { text } => Some(text),
                ResponseContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(GeneratorError::EmptyResponse);
        }

        let usage = Usage {
            prompt_tokens: api_resp.usage.input_tokens,
            completion_tokens: api_resp.usage.output_tokens,
            total_tokens: api_resp.usage.input_tokens + api_resp.usage.output_tokens,
        };

        Ok(GenerationResponse {
            text,
            model: api_resp.model,
            usage: Some(usage),
        })
    }
}

#[async_trait]
impl TextGenerator for AnthropicGenerator {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GenerationResponse, GeneratorError> {
        let url = format!("{}/v1/messages", self.base_url);
        let body = self.request_body(&request);

        debug!(provider = "anthropic", model = %self.model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout(e.to_string())
                } else {
                    GeneratorError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(GeneratorError::RateLimited {
                retry_after_secs: 5,
            });
        }
        if status == 401 || status == 403 {
            return Err(GeneratorError::AuthenticationFailed(
                "Invalid Anthropic API key".into(),
            ));
        }
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Anthropic API error");
            return Err(GeneratorError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_resp: AnthropicResponse =
            response.json().await.map_err(|e| GeneratorError::ApiError {
                status_code: 200,
                message: format!("Failed to parse Anthropic response: {e}"),
            })?;

        Self::into_response(api_resp)
    }
}

// --- Anthropic API types ---

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    model: String,
    content: Vec<ResponseContentBlock>,
    usage: AnthropicUsage,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ResponseContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor() {
        let generator = AnthropicGenerator::new("sk-ant-test", "claude-sonnet-4-20250514");
        assert_eq!(generator.name(), "anthropic");
        assert_eq!(generator.base_url, DEFAULT_BASE_URL);
        assert!(generator.is_configured());
        assert!(!AnthropicGenerator::new("", "m").is_configured());
    }

    #[test]
    fn constructor_with_base_url() {
        let generator =
            AnthropicGenerator::new("sk-ant-test", "m").with_base_url("https://custom.proxy.com/");
        assert_eq!(generator.base_url, "https://custom.proxy.com");
    }

    #[test]
    fn json_mode_extends_system_prompt() {
        let request = GenerationRequest::new("Plan").with_system_prompt("Be a designer").json();
        let system = AnthropicGenerator::system_prompt(&request).unwrap();
        assert!(system.starts_with("Be a designer"));
        assert!(system.ends_with(JSON_INSTRUCTION));

        let bare = GenerationRequest::new("Plan");
        assert!(AnthropicGenerator::system_prompt(&bare).is_none());
    }

    #[test]
    fn request_body_shape() {
        let generator = AnthropicGenerator::new("k", "claude-sonnet-4-20250514");
        let body = generator.request_body(&GenerationRequest::new("Hello").with_max_tokens(500));
        assert_eq!(body["model"], "claude-sonnet-4-20250514");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Hello");
        assert_eq!(body["max_tokens"], 500);
        assert!(body.get("system").is_none());
    }

    #[test]
    fn parse_text_response() {
        let resp: AnthropicResponse = serde_json::from_str(
            r#"{
                "id": "msg_01",
                "model": "claude-sonnet-4-20250514",
                "content": [{"type": "text", "text": "{\"a\":"}, {"type": "text", "text": " 1}"}],
                "usage": {"input_tokens": 10, "output_tokens": 5},
                "stop_reason": "end_turn"
            }"#,
        )
        .unwrap();

        let response = AnthropicGenerator::into_response(resp).unwrap();
        assert_eq!(response.text, "{\"a\": 1}");
        assert_eq!(response.usage.unwrap().total_tokens, 15);
        assert_eq!(response.model, "claude-sonnet-4-20250514");
    }

    #[test]
    fn non_text_blocks_are_skipped() {
        let resp: AnthropicResponse = serde_json::from_str(
            r#"{
                "model": "m",
                "content": [{"type": "thinking", "thinking": "hmm"}],
                "usage": {"input_tokens": 1, "output_tokens": 1}
            }"#,
        )
        .unwrap();
        assert!(matches!(
            AnthropicGenerator::into_response(resp),
            Err(GeneratorError::EmptyResponse)
        ));
    }
}
