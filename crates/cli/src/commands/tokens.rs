//! `pagewright tokens` — print a resolved design-token set.

use super::{emit_json, load_config};
use crate::StyleArgs;
use pagewright_pipeline::outline::base_tokens;
use pagewright_tokens::{DesignTokens, VisualStyle, resolve};
use std::path::Path;

pub fn tokens_for(style: VisualStyle, industry: &str) -> DesignTokens {
    resolve(&base_tokens(industry, style))
}

pub fn run(config: Option<&Path>, args: &StyleArgs) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let style = VisualStyle::parse(
        args.style
            .as_deref()
            .unwrap_or(&config.pipeline.default_style),
    );
    let industry = args
        .industry
        .as_deref()
        .map(|i| i.trim().to_ascii_lowercase())
        .unwrap_or_else(|| "business".to_string());

    eprintln!("🎨 {style} tokens for {industry}");
    emit_json(&tokens_for(style, &industry), None)
}
