//! `pagewright section` — one section, no network.

use super::{emit_json, load_config};
use crate::StyleArgs;
use pagewright_pipeline::{GenerationOptions, generate_section};
use pagewright_tokens::VisualStyle;
use std::path::Path;

pub fn run(config: Option<&Path>, kind: &str, prompt: &str, style: &StyleArgs) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let mut options = GenerationOptions::from_config(&config.pipeline);
    if let Some(name) = &style.style {
        options = options.with_style(VisualStyle::parse(name));
    }
    if let Some(industry) = &style.industry {
        options = options.with_industry(industry.clone());
    }

    let document = generate_section(kind, prompt, &options);
    emit_json(&document, None)
}
