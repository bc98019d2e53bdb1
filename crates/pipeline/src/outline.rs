//! The creative brief: page title, voice, token seed and section plans.
//!
//! A producer outline is accepted when it is an object with at least one
//! usable section. Anything else is rejected and the caller substitutes
//! [`default_outline`].

use pagewright_core::{SectionKind, SectionPlan};
use pagewright_layout::title_case;
use pagewright_tokens::{Palette, TokenInput, VisualStyle};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BUSINESS_NAME: &str = "Your Business";
pub const DEFAULT_SUBTITLE: &str = "Professional services tailored to your needs";
pub const DEFAULT_VOICE: &str = "professional";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outline {
    pub page_title: String,
    pub page_subtitle: String,
    pub brand_voice: String,
    pub industry: String,
    pub tokens: TokenInput,
    pub sections: Vec<SectionPlan>,
}

/// Why a producer outline was not used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutlineRejected {
    #[error("outline is not a JSON object")]
    NotAnObject,
    #[error("outline has no usable sections")]
    NoSections,
}

/// Business name from the start of the prompt: up to 30 characters before
/// the first comma, period or newline, when at least 3 are available.
pub fn business_name(prompt: &str) -> String {
    let head: String = prompt
        .trim()
        .chars()
        .take_while(|c| !matches!(c, ',' | '.' | '\n'))
        .take(30)
        .collect();
    if head.chars().count() >= 3 && !head.trim().is_empty() {
        head.trim().to_string()
    } else {
        DEFAULT_BUSINESS_NAME.to_string()
    }
}

/// Token seed for an industry and style: preset typography, spacing,
/// borders and shadows plus the industry palette.
pub fn base_tokens(industry: &str, style: VisualStyle) -> TokenInput {
    let mut tokens = style.preset();
    tokens.color_scheme = Palette::for_industry(industry).to_family();
    tokens
}

fn plan(kind: &str, layout: &str, headline: &str, background: &str) -> SectionPlan {
    SectionPlan::new(kind)
        .with_layout(layout)
        .with_headline(headline)
        .with_background(background)
}

/// Fallback plan for one section kind.
pub fn default_plan(kind: &str, hero_headline: &str) -> SectionPlan {
    match SectionKind::normalize(kind) {
        SectionKind::Hero => plan("hero", "split-left", hero_headline, "light")
            .with_purpose("Capture attention"),
        SectionKind::Stats => plan("stats", "grid-4", "Our Track Record", "white")
            .with_purpose("Build credibility"),
        SectionKind::Features => plan("features", "grid-3", "What We Offer", "white")
            .with_purpose("Show benefits"),
        SectionKind::Testimonials => plan("testimonials", "grid-3", "What Our Clients Say", "light")
            .with_purpose("Social proof"),
        SectionKind::Cta => plan("cta", "centered", "Ready to Get Started?", "dark")
            .with_purpose("Convert"),
        SectionKind::About => plan("about", "split-right", "Our Story", "white"),
        SectionKind::Team => plan("team", "grid-4", "Meet the Team", "light"),
        SectionKind::Process => plan("process", "grid-4", "How It Works", "white"),
        SectionKind::Pricing => plan("pricing", "grid-3", "Simple, Transparent Pricing", "light"),
        SectionKind::Faq => plan("faq", "centered", "Frequently Asked Questions", "white"),
        SectionKind::Contact => plan("contact", "grid-2", "Get in Touch", "white"),
        SectionKind::Gallery => plan("gallery", "grid-3", "Our Work", "white"),
        SectionKind::Other(name) => plan(&name, "centered", &title_case(&name), "white"),
    }
}

/// Section kinds used when a page has no producer outline.
pub fn default_section_kinds(page_kind: &str) -> &'static [&'static str] {
    let slug = page_kind
        .trim()
        .to_ascii_lowercase()
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    match slug.as_str() {
        "landing" | "" => &["hero", "stats", "features", "testimonials", "cta"],
        "home" | "index" => &["hero", "features", "stats", "testimonials", "cta"],
        "about" | "about_us" | "our_story" => &["hero", "about", "team", "stats", "cta"],
        "services" | "our_services" => &["hero", "features", "process", "testimonials", "cta"],
        "contact" | "contact_us" => &["hero", "contact", "faq", "cta"],
        "pricing" => &["hero", "pricing", "faq", "cta"],
        _ => &["hero", "features", "cta"],
    }
}

/// The fixed outline used when the producer's outline is unusable.
pub fn default_outline(prompt: &str, industry: &str, style: VisualStyle, page_kind: &str) -> Outline {
    let name = business_name(prompt);
    let hero_headline = match page_kind {
        "landing" | "home" | "" => name.clone(),
        other => title_case(other),
    };
    let sections = default_section_kinds(page_kind)
        .iter()
        .map(|kind| default_plan(kind, &hero_headline))
        .collect();

    Outline {
        page_title: name,
        page_subtitle: DEFAULT_SUBTITLE.into(),
        brand_voice: DEFAULT_VOICE.into(),
        industry: industry.to_string(),
        tokens: base_tokens(industry, style),
        sections,
    }
}

impl Outline {
    /// Accept a producer outline. Token families it supplies are laid over
    /// `fallback`'s; missing page fields come from `fallback` too.
    pub fn from_value(value: &Value, fallback: &Outline) -> Result<Self, OutlineRejected> {
        let object = value.as_object().ok_or(OutlineRejected::NotAnObject)?;

        let sections: Vec<SectionPlan> = object
            .get("sections")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| item.is_object())
                    .filter_map(|item| match serde_json::from_value::<SectionPlan>(item.clone()) {
                        Ok(plan) => Some(plan),
                        Err(e) => {
                            debug!(error = %e, "Skipping unusable section plan");
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();
        if sections.is_empty() {
            return Err(OutlineRejected::NoSections);
        }

        let text = |key: &str, default: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        let producer_tokens: TokenInput = serde_json::from_value(value.clone()).unwrap_or_default();

        Ok(Self {
            page_title: text("page_title", &fallback.page_title),
            page_subtitle: text("page_subtitle", &fallback.page_subtitle),
            brand_voice: text("brand_voice", &fallback.brand_voice),
            industry: fallback.industry.clone(),
            tokens: fallback.tokens.clone().merged_with(&producer_tokens),
            sections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fallback() -> Outline {
        default_outline("Bright Dental, a family clinic", "healthcare", VisualStyle::Modern, "landing")
    }

    #[test]
    fn business_name_from_prompt() {
        assert_eq!(business_name("Acme Plumbing, fast repairs"), "Acme Plumbing");
        assert_eq!(business_name("  Zen Yoga. Calm classes"), "Zen Yoga");
        assert_eq!(business_name("Ab, tiny"), DEFAULT_BUSINESS_NAME);
        assert_eq!(business_name(""), DEFAULT_BUSINESS_NAME);
        assert_eq!(
            business_name("An extremely long business description without punctuation"),
            "An extremely long business des"
        );
    }

    #[test]
    fn default_outline_has_five_sections() {
        let outline = fallback();
        assert_eq!(outline.page_title, "Bright Dental");
        assert_eq!(outline.page_subtitle, DEFAULT_SUBTITLE);
        assert_eq!(outline.brand_voice, "professional");

        let kinds: Vec<SectionKind> = outline.sections.iter().map(SectionPlan::kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Hero,
                SectionKind::Stats,
                SectionKind::Features,
                SectionKind::Testimonials,
                SectionKind::Cta
            ]
        );
        assert_eq!(outline.sections[0].headline.as_deref(), Some("Bright Dental"));
        assert_eq!(outline.sections[0].layout.as_deref(), Some("split-left"));
        assert_eq!(outline.sections[1].layout.as_deref(), Some("grid-4"));
        assert_eq!(outline.sections[4].background.as_deref(), Some("dark"));
    }

    #[test]
    fn default_outline_carries_palette_and_preset() {
        let outline = fallback();
        let palette = Palette::for_industry("healthcare");
        assert_eq!(
            outline.tokens.color_scheme.text("primary").as_deref(),
            Some(palette.primary.as_str())
        );
        assert_eq!(outline.tokens.typography.int("h1_size"), Some(56));
    }

    #[test]
    fn page_kinds_pick_section_lists() {
        assert_eq!(default_section_kinds("pricing"), &["hero", "pricing", "faq", "cta"]);
        assert_eq!(default_section_kinds("careers"), &["hero", "features", "cta"]);
        for about in ["about_us", "About-Us", "about us", "our-story"] {
            assert_eq!(default_section_kinds(about), &["hero", "about", "team", "stats", "cta"], "{about}");
        }
        assert_eq!(default_section_kinds("contact-us"), &["hero", "contact", "faq", "cta"]);

        let about = default_outline("Acme", "business", VisualStyle::Minimal, "about");
        assert_eq!(about.sections[0].headline.as_deref(), Some("About"));
        assert_eq!(about.sections[1].kind(), SectionKind::About);
    }

    #[test]
    fn accepts_producer_outline() {
        let value = json!({
            "page_title": "Bright Dental",
            "brand_voice": "warm",
            "color_scheme": {"primary": "#0ea5e9"},
            "typography": {"h1_size": 64},
            "sections": [
                {"type": "hero", "layout": "centered", "headline": "Smiles first"},
                {"type": "social proof", "layout": "grid-4"},
                "not a section"
            ]
        });
        let outline = Outline::from_value(&value, &fallback()).unwrap();
        assert_eq!(outline.sections.len(), 2);
        assert_eq!(outline.sections[1].kind(), SectionKind::Stats);
        assert_eq!(outline.brand_voice, "warm");
        assert_eq!(outline.page_subtitle, DEFAULT_SUBTITLE);
        assert_eq!(outline.tokens.color_scheme.text("primary").as_deref(), Some("#0ea5e9"));
        assert_eq!(outline.tokens.typography.int("h1_size"), Some(64));
        // Families the producer left out keep the fallback's values.
        assert_eq!(outline.tokens.spacing.int("section_padding"), Some(100));
    }

    #[test]
    fn rejects_outline_without_sections() {
        assert_eq!(
            Outline::from_value(&json!({"sections": []}), &fallback()),
            Err(OutlineRejected::NoSections)
        );
        assert_eq!(
            Outline::from_value(&json!({"page_title": "x"}), &fallback()),
            Err(OutlineRejected::NoSections)
        );
        assert_eq!(
            Outline::from_value(&json!([1, 2]), &fallback()),
            Err(OutlineRejected::NotAnObject)
        );
    }
}
