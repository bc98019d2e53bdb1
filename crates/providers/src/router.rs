//! Config-driven construction of the text generator and photo source.

use crate::anthropic::AnthropicGenerator;
use crate::openai_compat::OpenAiCompatGenerator;
use crate::pexels::PexelsPhotoSource;
use crate::retry::RetryingGenerator;
use pagewright_config::AppConfig;
use pagewright_core::generator::TextGenerator;
use pagewright_core::photos::PhotoSource;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Build the configured text generator, wrapped in retry handling.
///
/// A missing key still yields a generator; it reports itself unconfigured
/// and the pipeline refuses to start with it.
pub fn build_generator(config: &AppConfig) -> Arc<dyn TextGenerator> {
    let gen_config = &config.generator;
    let api_key = gen_config.api_key.clone().unwrap_or_default();
    let timeout = Duration::from_secs(gen_config.timeout_secs);

    let inner: Arc<dyn TextGenerator> = if gen_config.provider == "anthropic" {
        let mut generator = AnthropicGenerator::new(&api_key, &gen_config.model).with_timeout(timeout);
        if let Some(url) = &gen_config.api_url {
            generator = generator.with_base_url(url);
        }
        Arc::new(generator)
    } else {
        let base_url = gen_config
            .api_url
            .clone()
            .or_else(|| default_base_url(&gen_config.provider))
            .unwrap_or_default();
        Arc::new(
            OpenAiCompatGenerator::new(&gen_config.provider, base_url, &api_key, &gen_config.model)
                .with_timeout(timeout),
        )
    };

    debug!(
        provider = %gen_config.provider,
        model = %gen_config.model,
        configured = inner.is_configured(),
        "Built text generator"
    );

    Arc::new(RetryingGenerator::new(
        inner,
        gen_config.max_retries,
        timeout,
    ))
}

/// Build the configured photo source, or `None` when no key is available.
pub fn build_photo_source(config: &AppConfig) -> Option<Arc<dyn PhotoSource>> {
    let photos = &config.photos;
    let api_key = photos.api_key.as_deref().filter(|k| !k.is_empty())?;

    if photos.provider != "pexels" {
        debug!(provider = %photos.provider, "Unknown photo provider, media enrichment disabled");
        return None;
    }

    let mut source = PexelsPhotoSource::new(api_key)
        .with_timeout(Duration::from_secs(photos.timeout_secs));
    if let Some(url) = &photos.api_url {
        source = source.with_base_url(url);
    }
    Some(Arc::new(source))
}

/// Base URL for well-known OpenAI-compatible providers.
fn default_base_url(provider_name: &str) -> Option<String> {
    let url = match provider_name {
        "openrouter" => "https://openrouter.ai/api/v1",
        "openai" => "https://api.openai.com/v1",
        "ollama" | "local" => "http://localhost:11434/v1",
        "deepseek" => "https://api.deepseek.com/v1",
        "groq" => "https://api.groq.com/openai/v1",
        "together" => "https://api.together.xyz/v1",
        "vllm" => "http://localhost:8000/v1",
        _ => return None,
    };
    Some(url.to_string())
}
