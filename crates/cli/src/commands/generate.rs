//! `pagewright generate` and `pagewright website` — run the pipeline.

use super::{emit_json, load_config};
use crate::StyleArgs;
use pagewright_config::AppConfig;
use pagewright_pipeline::{GenerationOptions, Pipeline, RunStats};
use pagewright_providers::{build_generator, build_photo_source};
use pagewright_tokens::VisualStyle;
use std::path::{Path, PathBuf};

/// Flags shared by both generating commands.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    pub style: StyleArgs,
    pub page_kind: Option<String>,
    pub pages: Vec<String>,
    pub no_media: bool,
    pub output: Option<PathBuf>,
    pub stats: bool,
}

impl PageRequest {
    /// Config defaults overlaid with the command-line flags.
    pub fn options(&self, config: &AppConfig) -> GenerationOptions {
        let mut options = GenerationOptions::from_config(&config.pipeline);
        if let Some(style) = &self.style.style {
            options = options.with_style(VisualStyle::parse(style));
        }
        if let Some(industry) = &self.style.industry {
            options = options.with_industry(industry.clone());
        }
        if let Some(kind) = &self.page_kind {
            options = options.with_page_kind(kind.clone());
        }
        if !self.pages.is_empty() {
            options = options.with_pages(self.pages.clone());
        }
        if self.no_media {
            options = options.without_media();
        }
        options
    }
}

fn pipeline(config: &AppConfig, request: &PageRequest) -> Pipeline {
    let photos = build_photo_source(config);
    if photos.is_none() && !request.no_media {
        tracing::info!("No photo source configured (set PEXELS_API_KEY); images stay empty");
    }
    Pipeline::new(build_generator(config))
        .with_photos(photos)
        .with_options(request.options(config))
}

fn report(stats: &RunStats, label: &str) {
    if stats.is_clean() {
        eprintln!("   ✅ {label}: {} sections in {}ms", stats.sections_count, stats.total_ms);
    } else {
        eprintln!(
            "   ⚠️  {label}: {} sections in {}ms, {} diagnostics",
            stats.sections_count,
            stats.total_ms,
            stats.diagnostics.len()
        );
        for diagnostic in &stats.diagnostics {
            eprintln!("      - {diagnostic}");
        }
    }
}

pub async fn run(config: Option<&Path>, prompt: &str, request: PageRequest) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let pipeline = pipeline(&config, &request);

    let output = pipeline.generate(prompt).await?;
    report(&output.stats, &output.outline.page_title);
    if request.stats {
        eprintln!("{}", serde_json::to_string_pretty(&output.stats)?);
    }
    emit_json(&output.document, request.output.as_deref())
}

pub async fn website(config: Option<&Path>, prompt: &str, request: PageRequest) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let pipeline = pipeline(&config, &request);

    let output = pagewright_pipeline::generate_website(&pipeline, prompt).await?;
    for (slug, stats) in &output.pages {
        report(stats, slug);
    }
    if request.stats {
        eprintln!("{}", serde_json::to_string_pretty(&output.pages)?);
    }
    emit_json(&output.website, request.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_defaults() {
        let mut config = AppConfig::default();
        config.pipeline.default_style = "minimal".into();

        let request = PageRequest {
            style: StyleArgs {
                style: Some("elegant".into()),
                industry: Some("legal".into()),
            },
            page_kind: Some("pricing".into()),
            no_media: true,
            ..PageRequest::default()
        };
        let options = request.options(&config);
        assert_eq!(options.style, VisualStyle::Elegant);
        assert_eq!(options.industry.as_deref(), Some("legal"));
        assert_eq!(options.page_kind, "pricing");
        assert!(!options.enrich_media);
    }

    #[test]
    fn config_defaults_apply_without_flags() {
        let mut config = AppConfig::default();
        config.pipeline.default_style = "minimal".into();
        let options = PageRequest::default().options(&config);
        assert_eq!(options.style, VisualStyle::Minimal);
        assert_eq!(options.page_kind, "landing");
        assert!(options.enrich_media);
    }
}
