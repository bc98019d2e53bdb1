//! Section kinds — the semantic tag that drives both structure templates
//! and styling context.

use serde::{Deserialize, Serialize};

/// The semantic kind of a page section.
///
/// Producer-supplied kinds are normalized through a synonym table
/// (`"social proof"` → `Stats`); anything unrecognized is kept verbatim
/// as `Other` and handled by the generic templates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionKind {
    Hero,
    Features,
    Stats,
    Testimonials,
    Cta,
    Pricing,
    Faq,
    Team,
    About,
    Contact,
    Gallery,
    Process,
    Other(String),
}

/// Producer phrasing → canonical kind name.
const SYNONYMS: &[(&str, &str)] = &[
    ("social proof", "stats"),
    ("social-proof", "stats"),
    ("socialproof", "stats"),
    ("trust", "stats"),
    ("numbers", "stats"),
    ("metrics", "stats"),
    ("benefits", "features"),
    ("services", "features"),
    ("offerings", "features"),
    ("what we do", "features"),
    ("reviews", "testimonials"),
    ("quotes", "testimonials"),
    ("clients", "testimonials"),
    ("call to action", "cta"),
    ("call-to-action", "cta"),
    ("final cta", "cta"),
    ("questions", "faq"),
    ("faqs", "faq"),
    ("our team", "team"),
    ("meet the team", "team"),
    ("about us", "about"),
    ("who we are", "about"),
    ("contact us", "contact"),
    ("get in touch", "contact"),
    ("plans", "pricing"),
    ("packages", "pricing"),
    ("how it works", "process"),
    ("our process", "process"),
    ("steps", "process"),
    ("portfolio", "gallery"),
    ("work", "gallery"),
    ("projects", "gallery"),
];

impl SectionKind {
    /// Normalize a free-form kind name: trim, lowercase, resolve synonyms.
    pub fn normalize(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        let canonical = SYNONYMS
            .iter()
            .find(|(alias, _)| *alias == lowered)
            .map(|(_, kind)| *kind)
            .unwrap_or(lowered.as_str());

        match canonical {
            "hero" => Self::Hero,
            "features" => Self::Features,
            "stats" => Self::Stats,
            "testimonials" => Self::Testimonials,
            "cta" => Self::Cta,
            "pricing" => Self::Pricing,
            "faq" => Self::Faq,
            "team" => Self::Team,
            "about" => Self::About,
            "contact" => Self::Contact,
            "gallery" => Self::Gallery,
            "process" => Self::Process,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Hero => "hero",
            Self::Features => "features",
            Self::Stats => "stats",
            Self::Testimonials => "testimonials",
            Self::Cta => "cta",
            Self::Pricing => "pricing",
            Self::Faq => "faq",
            Self::Team => "team",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Gallery => "gallery",
            Self::Process => "process",
            Self::Other(name) => name,
        }
    }

    /// Sections rendered on a dark background with inverted text.
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Cta)
    }

    /// Whether templated structure opens with a full-width title row.
    pub fn takes_title_row(&self) -> bool {
        !matches!(self, Self::Hero | Self::Cta | Self::About)
    }
}

impl From<String> for SectionKind {
    fn from(value: String) -> Self {
        Self::normalize(&value)
    }
}

impl From<SectionKind> for String {
    fn from(kind: SectionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
