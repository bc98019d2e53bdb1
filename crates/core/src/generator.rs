//! TextGenerator trait — the abstraction over text-generation backends.
//!
//! The pipeline treats every response as untrusted text and routes it through
//! the resilient parser before use.
//!
//! Implementations: OpenAI-compatible endpoints, Anthropic, scripted mocks.

use crate::error::GeneratorError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Ask the backend for a bare JSON object when it supports it.
    #[serde(default)]
    pub json_mode: bool,
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_temperature() -> f32 {
    0.7
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            json_mode: false,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn json(mut self) -> Self {
        self.json_mode = true;
        self
    }
}

/// A complete response from a generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub text: String,

    /// Which model actually responded.
    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Token usage information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The core generator trait.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// A human-readable name (e.g., "openai", "anthropic").
    fn name(&self) -> &str;

    /// Whether the backend has what it needs (credentials, endpoint) to
    /// accept requests. Unconfigured generators abort a run up front.
    fn is_configured(&self) -> bool {
        true
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GenerationResponse, GeneratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl TextGenerator for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(
            &self,
            request: GenerationRequest,
        ) -> std::result::Result<GenerationResponse, GeneratorError> {
            Ok(GenerationResponse {
                text: request.prompt,
                model: "echo-1".into(),
                usage: None,
            })
        }
    }

    #[test]
    fn request_builder() {
        let req = GenerationRequest::new("hi")
            .with_system_prompt("be brief")
            .with_max_tokens(4000)
            .with_temperature(0.9)
            .json();
        assert_eq!(req.max_tokens, 4000);
        assert!(req.json_mode);
        assert_eq!(req.system_prompt.as_deref(), Some("be brief"));
        assert!((req.temperature - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn request_defaults_from_json() {
        let req: GenerationRequest = serde_json::from_str(r#"{"prompt":"x"}"#).unwrap();
        assert_eq!(req.max_tokens, 2000);
        assert!(!req.json_mode);
    }

    #[tokio::test]
    async fn trait_objects_dispatch() {
        let generator: Box<dyn TextGenerator> = Box::new(Echo);
        assert!(generator.is_configured());
        let resp = generator.generate(GenerationRequest::new("ping")).await.unwrap();
        assert_eq!(resp.text, "ping");
        assert_eq!(generator.name(), "echo");
    }
}
