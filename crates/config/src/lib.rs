//! Configuration loading, validation, and management for Pagewright.
//!
//! Loads configuration from `~/.pagewright/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Visual styles the token resolver knows about.
pub const KNOWN_STYLES: &[&str] = &["modern", "minimal", "bold", "elegant"];

/// The root configuration structure.
///
/// Maps directly to `~/.pagewright/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Text-generation backend
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Stock-photo backend
    #[serde(default)]
    pub photos: PhotosConfig,

    /// Pipeline defaults
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// `openai`, `openrouter`, `anthropic`, `ollama`, or a custom name with `api_url`
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default = "default_generator_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_provider() -> String {
    "openai".into()
}
fn default_model() -> String {
    "gpt-4o-mini".into()
}
fn default_generator_timeout() -> u64 {
    120
}
fn default_max_retries() -> u32 {
    2
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_key: None,
            api_url: None,
            timeout_secs: default_generator_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct PhotosConfig {
    #[serde(default = "default_photo_provider")]
    pub provider: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default = "default_photo_timeout")]
    pub timeout_secs: u64,
}

fn default_photo_provider() -> String {
    "pexels".into()
}
fn default_photo_timeout() -> u64 {
    30
}

impl Default for PhotosConfig {
    fn default() -> Self {
        Self {
            provider: default_photo_provider(),
            api_key: None,
            api_url: None,
            timeout_secs: default_photo_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_style")]
    pub default_style: String,

    #[serde(default = "default_page_kind")]
    pub default_page_kind: String,

    #[serde(default = "default_outline_max_tokens")]
    pub outline_max_tokens: u32,

    #[serde(default = "default_content_max_tokens")]
    pub content_max_tokens: u32,

    #[serde(default = "default_outline_temperature")]
    pub outline_temperature: f32,

    #[serde(default = "default_content_temperature")]
    pub content_temperature: f32,

    #[serde(default = "default_true")]
    pub enrich_media: bool,
}

fn default_style() -> String {
    "modern".into()
}
fn default_page_kind() -> String {
    "landing".into()
}
fn default_outline_max_tokens() -> u32 {
    2000
}
fn default_content_max_tokens() -> u32 {
    4000
}
fn default_outline_temperature() -> f32 {
    0.9
}
fn default_content_temperature() -> f32 {
    0.7
}
fn default_true() -> bool {
    true
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_style: default_style(),
            default_page_kind: default_page_kind(),
            outline_max_tokens: default_outline_max_tokens(),
            content_max_tokens: default_content_max_tokens(),
            outline_temperature: default_outline_temperature(),
            content_temperature: default_content_temperature(),
            enrich_media: true,
        }
    }
}

/// Redact a secret for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl std::fmt::Debug for PhotosConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotosConfig")
            .field("provider", &self.provider)
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeneratorConfig {
    /// Provider-specific environment variable holding the API key.
    pub fn provider_key_var(&self) -> Option<&'static str> {
        match self.provider.as_str() {
            "openai" => Some("OPENAI_API_KEY"),
            "openrouter" => Some("OPENROUTER_API_KEY"),
            "anthropic" => Some("ANTHROPIC_API_KEY"),
            _ => None,
        }
    }

    /// Local backends accept requests without a key.
    pub fn requires_api_key(&self) -> bool {
        !matches!(self.provider.as_str(), "ollama" | "local")
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.pagewright/config.toml).
    ///
    /// Environment overrides (highest priority):
    /// - `PAGEWRIGHT_API_KEY`, then the provider's own key variable
    /// - `PAGEWRIGHT_PROVIDER`, `PAGEWRIGHT_MODEL`
    /// - `PEXELS_API_KEY`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(provider) = lookup("PAGEWRIGHT_PROVIDER") {
            self.generator.provider = provider;
        }
        if let Some(model) = lookup("PAGEWRIGHT_MODEL") {
            self.generator.model = model;
        }

        let env_key = lookup("PAGEWRIGHT_API_KEY").or_else(|| {
            self.generator
                .provider_key_var()
                .and_then(|var| lookup(var))
        });
        if env_key.is_some() {
            self.generator.api_key = env_key;
        }

        if let Some(key) = lookup("PEXELS_API_KEY") {
            self.photos.api_key = Some(key);
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".pagewright")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.pipeline;
        for (name, value) in [
            ("outline_temperature", p.outline_temperature),
            ("content_temperature", p.content_temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                return Err(ConfigError::ValidationError(format!(
                    "pipeline.{name} must be between 0.0 and 2.0"
                )));
            }
        }

        if p.outline_max_tokens == 0 || p.content_max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "pipeline token limits must be > 0".into(),
            ));
        }

        if self.generator.max_retries > 10 {
            return Err(ConfigError::ValidationError(
                "generator.max_retries must be at most 10".into(),
            ));
        }

        if self.generator.timeout_secs == 0 || self.photos.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeouts must be > 0 seconds".into(),
            ));
        }

        if !KNOWN_STYLES.contains(&p.default_style.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "pipeline.default_style '{}' is not one of {}",
                p.default_style,
                KNOWN_STYLES.join(", ")
            )));
        }

        Ok(())
    }

    /// Check if the generator has credentials (or needs none).
    pub fn has_generator_key(&self) -> bool {
        self.generator.api_key.is_some() || !self.generator.requires_api_key()
    }

    pub fn has_photo_key(&self) -> bool {
        self.photos.api_key.is_some()
    }

    /// Generate a default config TOML string (for `config init`).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.generator.provider, "openai");
        assert_eq!(config.pipeline.outline_max_tokens, 2000);
        assert!(config.pipeline.enrich_media);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.generator.model, config.generator.model);
        assert_eq!(parsed.photos.timeout_secs, config.photos.timeout_secs);
    }

    #[test]
    fn invalid_temperature_rejected() {
        let mut config = AppConfig::default();
        config.pipeline.content_temperature = 5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_style_rejected() {
        let mut config = AppConfig::default();
        config.pipeline.default_style = "brutalist".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("brutalist"));
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.generator.provider, "openai");
    }

    #[test]
    fn load_from_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[generator]\nprovider = \"anthropic\"\nmodel = \"claude-3-5-haiku-latest\"\n\n[pipeline]\ndefault_style = \"bold\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.generator.provider, "anthropic");
        assert_eq!(config.pipeline.default_style, "bold");
        assert_eq!(config.generator.max_retries, 2);
    }

    #[test]
    fn invalid_file_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[generator\nprovider = ").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn env_overrides_take_priority() {
        let mut config = AppConfig::default();
        config.generator.api_key = Some("from-file".into());
        config.apply_env_overrides(env(&[
            ("PAGEWRIGHT_PROVIDER", "anthropic"),
            ("ANTHROPIC_API_KEY", "sk-ant"),
            ("PEXELS_API_KEY", "px"),
        ]));
        assert_eq!(config.generator.provider, "anthropic");
        assert_eq!(config.generator.api_key.as_deref(), Some("sk-ant"));
        assert_eq!(config.photos.api_key.as_deref(), Some("px"));

        config.apply_env_overrides(env(&[("PAGEWRIGHT_API_KEY", "generic")]));
        assert_eq!(config.generator.api_key.as_deref(), Some("generic"));
    }

    #[test]
    fn absent_env_keeps_file_key() {
        let mut config = AppConfig::default();
        config.generator.api_key = Some("from-file".into());
        config.apply_env_overrides(env(&[]));
        assert_eq!(config.generator.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn debug_redacts_secrets() {
        let mut config = AppConfig::default();
        config.generator.api_key = Some("sk-secret".into());
        config.photos.api_key = Some("px-secret".into());
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(!debug.contains("px-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn ollama_needs_no_key() {
        let mut config = AppConfig::default();
        config.generator.provider = "ollama".into();
        assert!(config.has_generator_key());
        assert!(!AppConfig::default().has_generator_key());
    }

    #[test]
    fn default_toml_generation() {
        let toml_str = AppConfig::default_toml();
        assert!(toml_str.contains("gpt-4o-mini"));
        assert!(toml_str.contains("[pipeline]"));
    }
}
