//! Prompt text for the two generator calls (outline and content).

use crate::outline::Outline;
use pagewright_layout::ModuleSlot;
use pagewright_tokens::VisualStyle;

const OUTLINE_SYSTEM: &str = r#"You are a senior web designer planning a single web page.
Reply with one JSON object, no prose, no code fences. Schema:
{
  "page_title": string,
  "page_subtitle": string,
  "brand_voice": string,
  "color_scheme": {"primary": hex, "secondary": hex, "accent": hex, "dark": hex, "light_bg": hex, "text": hex},
  "typography": {"h1_size": int, "h2_size": int, "h3_size": int, "body_size": int},
  "spacing": {"section_padding": int, "hero_padding": int, "element_gap": int, "card_padding": int},
  "sections": [
    {"type": string, "layout": string, "headline": string, "purpose": string, "background": "white" | "light" | "dark" | "primary"}
  ]
}
Section types: hero, features, stats, testimonials, pricing, faq, team, about, process, gallery, contact, cta.
Layouts: centered, split-left, split-right, grid-2, grid-3, grid-4, asymmetric.
Start with a hero and end with a cta. Vary the layouts."#;

const CONTENT_SYSTEM: &str = r#"You are a conversion copywriter filling a page layout with real content.
Reply with one JSON object, no prose, no code fences:
{"modules": {"<module id>": {<fields>}}}
Fields by module type:
- heading: text
- text: content (HTML paragraphs allowed)
- button: text, link_url
- blurb: title, content, icon
- number_counter / circle_counter: number, suffix, title
- testimonial: content, author, job_title, company
- pricing_table: title, price, currency, period, features (array of strings), button_text
- team_member: name, position, content
- cta: title, content, button_text
- accordion: items (array of {title, content})
- image: alt
Text fields are plain strings. Never invent module ids."#;

pub fn outline_system_prompt() -> &'static str {
    OUTLINE_SYSTEM
}

pub fn outline_prompt(prompt: &str, industry: &str, style: VisualStyle, page_kind: &str) -> String {
    format!(
        "Create a creative brief for this business.\n\n\
         BUSINESS DESCRIPTION:\n{prompt}\n\n\
         REQUIREMENTS:\n\
         - Industry: {industry}\n\
         - Visual style: {style}\n\
         - Page type: {page_kind}\n\n\
         Choose sections that fit a {page_kind} page, a color scheme that fits the \
         industry and style, and headlines specific to this business.\n\
         Output ONLY the JSON object."
    )
}

pub fn content_system_prompt() -> &'static str {
    CONTENT_SYSTEM
}

/// Content request listing the planned sections and every module to fill.
pub fn content_prompt(prompt: &str, outline: &Outline, modules: &[ModuleSlot]) -> String {
    let sections = serde_json::to_string_pretty(&outline.sections).unwrap_or_default();
    let modules = serde_json::to_string_pretty(modules).unwrap_or_default();
    format!(
        "## BUSINESS\n{prompt}\n\
         Brand voice: {voice}\n\n\
         ## PAGE STRUCTURE\n{sections}\n\n\
         ## MODULES TO FILL\n{modules}\n\n\
         Match each module id exactly and fill every module listed. \
         Content must be specific to the business above.",
        voice = outline.brand_voice,
    )
}
