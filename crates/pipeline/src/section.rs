//! Single-section generation. Local and deterministic: no generator or
//! photo calls.

use crate::options::GenerationOptions;
use crate::outline::{base_tokens, business_name, default_plan};
use pagewright_core::document::finalize;
use pagewright_core::{Document, IdAllocator};
use pagewright_layout::{Placeholders, StyleEngine, synthesize_section};
use pagewright_tokens::resolve;
use tracing::debug;

/// One styled section of `kind` with placeholder content.
pub fn generate_section(kind: &str, prompt: &str, options: &GenerationOptions) -> Document {
    let industry = options.industry_for(prompt);
    let tokens = resolve(&base_tokens(&industry, options.style));
    let name = business_name(prompt);

    let mut ids = IdAllocator::new();
    let plan = default_plan(kind, &name);
    let section = synthesize_section(&plan, &mut ids);

    let mut sections = StyleEngine::default().apply(&[section], &tokens).sections;
    Placeholders::new(name)
        .with_pages(options.pages.clone())
        .fill(&mut sections);
    finalize(&mut sections, &mut ids);

    debug!(kind, industry = %industry, "Section generated");
    Document::new(sections)
}
