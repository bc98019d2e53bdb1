//! Per-request generation options.
//!
//! Options only select which default tables are used (palette, style preset,
//! section lists); they carry no control flow of their own.

use pagewright_config::PipelineConfig;
use pagewright_tokens::{VisualStyle, detect_industry};

#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Requested industry. Used when detection over the prompt finds nothing
    /// more specific than `business`.
    pub industry: Option<String>,
    pub style: VisualStyle,
    /// `landing` for a single page, or a page slug (`about`, `pricing`, ...).
    pub page_kind: String,
    /// Page slugs for the website variant.
    pub pages: Vec<String>,
    pub enrich_media: bool,
    pub outline_max_tokens: u32,
    pub content_max_tokens: u32,
    pub outline_temperature: f32,
    pub content_temperature: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}

impl GenerationOptions {
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            industry: None,
            style: VisualStyle::parse(&config.default_style),
            page_kind: config.default_page_kind.clone(),
            pages: Vec::new(),
            enrich_media: config.enrich_media,
            outline_max_tokens: config.outline_max_tokens,
            content_max_tokens: config.content_max_tokens,
            outline_temperature: config.outline_temperature,
            content_temperature: config.content_temperature,
        }
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_style(mut self, style: VisualStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_page_kind(mut self, page_kind: impl Into<String>) -> Self {
        self.page_kind = page_kind.into();
        self
    }

    pub fn with_pages(mut self, pages: Vec<String>) -> Self {
        self.pages = pages;
        self
    }

    pub fn without_media(mut self) -> Self {
        self.enrich_media = false;
        self
    }

    /// Industry for `prompt`: the detected one, unless detection only
    /// yields `business` and an industry was requested.
    pub fn industry_for(&self, prompt: &str) -> String {
        let detected = detect_industry(prompt);
        match (&self.industry, detected) {
            (Some(requested), "business") if !requested.trim().is_empty() => {
                requested.trim().to_ascii_lowercase()
            }
            _ => detected.to_string(),
        }
    }
}
