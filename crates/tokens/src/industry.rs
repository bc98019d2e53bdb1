//! Industry detection and industry color palettes.

use crate::color::{darken, lighten};
use crate::input::TokenFamily;

const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "technology",
        &["tech", "software", "saas", "app", "startup", "digital", "cloud", "ai", "platform"],
    ),
    (
        "ecommerce",
        &["ecommerce", "e-commerce", "online store", "shop", "products", "retail", "marketplace"],
    ),
    (
        "healthcare",
        &["health", "medical", "clinic", "doctor", "hospital", "dental", "wellness", "fitness", "gym"],
    ),
    (
        "education",
        &["education", "school", "university", "course", "training", "learning", "tutorial", "academy"],
    ),
    (
        "agency",
        &["agency", "creative", "design studio", "marketing agency", "digital agency", "consultancy"],
    ),
    (
        "restaurant",
        &["restaurant", "cafe", "food", "menu", "dining", "catering", "bar", "bistro"],
    ),
    (
        "realestate",
        &["real estate", "property", "realtor", "homes", "apartments", "housing", "broker"],
    ),
    ("legal", &["law", "legal", "attorney", "lawyer", "law firm", "counsel"]),
    (
        "finance",
        &["finance", "banking", "investment", "insurance", "financial", "accounting", "tax"],
    ),
    ("nonprofit", &["nonprofit", "charity", "foundation", "ngo", "donation", "cause"]),
    (
        "travel",
        &["travel", "tourism", "hotel", "vacation", "booking", "flights", "adventure"],
    ),
    (
        "photography",
        &["photography", "photographer", "photo studio", "wedding photography"],
    ),
    (
        "construction",
        &["construction", "contractor", "building", "renovation", "architect"],
    ),
    (
        "automotive",
        &["automotive", "car", "auto", "vehicle", "dealership", "garage"],
    ),
];

/// Split into lowercase alphanumeric words joined by single spaces, padded
/// so whole-word lookups are substring checks on `" word "`.
fn word_text(text: &str) -> String {
    let words: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    format!(" {} ", words.join(" "))
}

/// First industry whose keyword list has a whole-word hit, else `"business"`.
pub fn detect_industry(prompt: &str) -> &'static str {
    let haystack = word_text(prompt);
    INDUSTRY_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|kw| haystack.contains(&word_text(kw)))
        })
        .map(|(industry, _)| *industry)
        .unwrap_or("business")
}

/// Seven-color palette for an industry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub dark: String,
    pub light_bg: String,
    pub text: String,
    pub text_light: String,
}

impl Palette {
    /// Industry palette; an unrecognized industry gets the neutral blue one.
    pub fn for_industry(industry: &str) -> Self {
        let base = match industry.trim().to_ascii_lowercase().as_str() {
            "healthcare" => Some(("#0D9488", "#115E59", "#F97316")),
            "finance" => Some(("#1E40AF", "#1E3A8A", "#10B981")),
            "technology" => Some(("#6366F1", "#4F46E5", "#06B6D4")),
            "education" => Some(("#2563EB", "#1D4ED8", "#F59E0B")),
            "restaurant" => Some(("#DC2626", "#B91C1C", "#F59E0B")),
            "realestate" | "real_estate" => Some(("#059669", "#047857", "#0284C7")),
            "fitness" => Some(("#EF4444", "#DC2626", "#F97316")),
            "agency" => Some(("#7C3AED", "#6D28D9", "#EC4899")),
            "creative" => Some(("#BE185D", "#DB2777", "#7C3AED")),
            "retail" | "ecommerce" => Some(("#DB2777", "#EC4899", "#F59E0B")),
            "construction" => Some(("#EA580C", "#78716C", "#F59E0B")),
            "legal" => Some(("#1E3A5F", "#1E40AF", "#B8860B")),
            _ => None,
        };

        match base {
            Some((primary, secondary, accent)) => Self {
                dark: darken(primary, 30),
                light_bg: lighten(primary, 92),
                text: darken(primary, 40),
                text_light: "#6b7280".into(),
                primary: primary.into(),
                secondary: secondary.into(),
                accent: accent.into(),
            },
            None => Self {
                primary: "#2563eb".into(),
                secondary: "#3b82f6".into(),
                accent: "#1e3a8a".into(),
                dark: "#1e3a8a".into(),
                light_bg: "#f8fafc".into(),
                text: "#111827".into(),
                text_light: "#6b7280".into(),
            },
        }
    }

    /// The palette as a `color_scheme` token family.
    pub fn to_family(&self) -> TokenFamily {
        TokenFamily::new()
            .with("primary", self.primary.as_str())
            .with("secondary", self.secondary.as_str())
            .with("accent", self.accent.as_str())
            .with("dark", self.dark.as_str())
            .with("light_bg", self.light_bg.as_str())
            .with("text", self.text.as_str())
            .with("text_light", self.text_light.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_whole_words_only() {
        assert_eq!(detect_industry("A SaaS platform for teams"), "technology");
        assert_eq!(detect_industry("Family dental clinic in Austin"), "healthcare");
        // "cart" and "barn" must not hit "car" / "bar".
        assert_eq!(detect_industry("a barn with a cart"), "business");
    }

    #[test]
    fn multi_word_keywords_match() {
        assert_eq!(detect_industry("Luxury REAL-ESTATE listings"), "realestate");
        assert_eq!(detect_industry("boutique law firm"), "legal");
    }

    #[test]
    fn first_listed_industry_wins() {
        // "app" (technology) is listed before "shop" (ecommerce).
        assert_eq!(detect_industry("shop app"), "technology");
    }

    #[test]
    fn empty_prompt_is_business() {
        assert_eq!(detect_industry(""), "business");
    }

    #[test]
    fn palette_derives_dark_and_light() {
        let p = Palette::for_industry("technology");
        assert_eq!(p.primary, "#6366F1");
        assert_eq!(p.dark, "#171aa5");
        assert_eq!(p.light_bg, "#f2f2fd");
        assert_eq!(p.text_light, "#6b7280");
    }

    #[test]
    fn unknown_industry_gets_neutral_palette() {
        let p = Palette::for_industry("business");
        assert_eq!(p.primary, "#2563eb");
        assert_eq!(p.accent, "#1e3a8a");
        assert_eq!(p.to_family().text("text").as_deref(), Some("#111827"));
    }

    #[test]
    fn real_estate_alias() {
        assert_eq!(
            Palette::for_industry("real_estate"),
            Palette::for_industry("realestate")
        );
    }
}
