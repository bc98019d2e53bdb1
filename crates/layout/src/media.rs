//! Media enrichment: fills image, portrait and team photo fields from a
//! [`PhotoSource`].
//!
//! Best-effort. Each lookup is isolated; a failure is recorded as an
//! [`EnrichmentError`] for that node and the walk moves on.

use pagewright_core::{
    EnrichmentError, LayoutNode, Orientation, Photo, PhotoQuery, PhotoSource, SectionKind,
};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "from", "your", "our", "are", "was", "will",
    "have", "has", "been", "into", "about", "page", "website", "site", "landing", "create",
    "make", "build", "want", "need", "company", "business", "please", "should", "would",
    "could", "their", "they", "them", "what", "which", "where", "when", "more", "some", "also",
    "just", "like", "very", "modern", "professional", "services", "service", "design",
    "looking", "help", "new", "best", "great",
];

const HERO_QUERIES: &[(&str, &[&str])] = &[
    (
        "technology",
        &["technology workspace modern", "software team collaboration", "laptop code screen"],
    ),
    (
        "healthcare",
        &["modern medical clinic", "doctor patient consultation", "healthcare professional"],
    ),
    (
        "ecommerce",
        &["online shopping lifestyle", "product flat lay", "retail store interior"],
    ),
    (
        "agency",
        &["creative agency office", "design team brainstorming", "marketing workspace"],
    ),
    (
        "education",
        &["students learning classroom", "online education laptop", "university campus"],
    ),
    (
        "restaurant",
        &["restaurant interior dining", "chef cooking kitchen", "gourmet food plating"],
    ),
    (
        "realestate",
        &["modern house exterior", "luxury home interior", "real estate agent keys"],
    ),
    (
        "real_estate",
        &["modern house exterior", "luxury home interior", "real estate agent keys"],
    ),
    (
        "fitness",
        &["gym workout training", "fitness class group", "personal trainer coaching"],
    ),
    (
        "legal",
        &["law office professional", "lawyer consultation meeting", "legal books justice"],
    ),
    (
        "construction",
        &["construction site workers", "architecture building project", "renovation tools"],
    ),
    (
        "general",
        &["modern business office professional", "team meeting collaboration", "city skyline business"],
    ),
];

const PORTRAIT_QUERIES: &[&str] = &[
    "professional portrait business",
    "corporate headshot smiling",
    "business woman portrait",
    "business man portrait",
    "professional headshot office",
    "confident professional portrait",
    "smiling executive portrait",
    "young professional headshot",
    "creative professional portrait",
    "friendly business portrait",
    "entrepreneur portrait",
    "manager headshot",
    "consultant portrait professional",
];

const PHOTOS_PER_QUERY: u32 = 5;

/// Up to five distinctive words from a prompt, for photo queries.
pub fn business_keywords(prompt: &str) -> String {
    let mut seen = Vec::new();
    for word in prompt.split_whitespace() {
        let word: String = word
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect();
        if word.len() <= 3 || STOP_WORDS.contains(&word.as_str()) || seen.contains(&word) {
            continue;
        }
        seen.push(word);
        if seen.len() == 5 {
            break;
        }
    }
    seen.join(" ")
}

/// Query for the hero image: the business keywords, else the industry's
/// first hero query.
pub fn hero_query(keywords: &str, industry: &str) -> String {
    if !keywords.is_empty() {
        return keywords.to_string();
    }
    let industry = industry.trim().to_ascii_lowercase();
    HERO_QUERIES
        .iter()
        .find(|(name, _)| *name == industry)
        .or_else(|| HERO_QUERIES.iter().find(|(name, _)| *name == "general"))
        .and_then(|(_, queries)| queries.first())
        .map(|q| q.to_string())
        .unwrap_or_default()
}

/// Outcome of an enrichment pass.
#[derive(Debug, Default)]
pub struct EnrichmentReport {
    /// Nodes that received a photo.
    pub enriched: usize,
    pub failures: Vec<EnrichmentError>,
}

impl EnrichmentReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// What a media node needs.
struct Slot {
    field: &'static str,
    query: String,
    orientation: Orientation,
    portrait: bool,
}

/// Walks a tree and fills empty media fields. One per run: it remembers
/// which photos it has handed out.
pub struct MediaEnricher<'a> {
    photos: &'a dyn PhotoSource,
    keywords: String,
    industry: String,
    used: HashSet<u64>,
    portrait_cursor: usize,
}

impl<'a> MediaEnricher<'a> {
    pub fn new(photos: &'a dyn PhotoSource, prompt: &str, industry: &str) -> Self {
        Self {
            photos,
            keywords: business_keywords(prompt),
            industry: industry.to_string(),
            used: HashSet::new(),
            portrait_cursor: 0,
        }
    }

    pub async fn enrich(&mut self, sections: &mut [LayoutNode]) -> EnrichmentReport {
        let mut report = EnrichmentReport::default();

        for section in sections.iter_mut() {
            let kind = section.section_kind.clone();
            for module in section.modules_mut() {
                let Some(slot) = self.slot_for(module, kind.as_ref()) else {
                    continue;
                };
                match self.lookup(module, &slot).await {
                    Ok(photo) => {
                        let url = if slot.portrait {
                            &photo.src.medium
                        } else {
                            &photo.src.large
                        };
                        module
                            .attrs
                            .insert(slot.field.into(), Value::String(url.clone()));
                        let alt_missing = module
                            .attrs
                            .get("alt")
                            .and_then(Value::as_str)
                            .is_none_or(|alt| alt.is_empty() || alt == "Image");
                        if slot.field == "src" && alt_missing && !photo.alt.is_empty() {
                            module.attrs.insert("alt".into(), Value::String(photo.alt.clone()));
                        }
                        report.enriched += 1;
                    }
                    Err(e) => {
                        warn!(node = %module.id, error = %e, "Media lookup failed");
                        report.failures.push(e);
                    }
                }
            }
        }

        debug!(
            enriched = report.enriched,
            failures = report.failures.len(),
            "Media enrichment finished"
        );
        report
    }

    fn slot_for(&mut self, module: &LayoutNode, section: Option<&SectionKind>) -> Option<Slot> {
        let field = match module.module_type()? {
            "image" => "src",
            "testimonial" => "portrait_url",
            "team_member" => "image_url",
            _ => return None,
        };
        let filled = module
            .attrs
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|v| !v.trim().is_empty());
        if filled {
            return None;
        }

        if field == "src" {
            let query = if matches!(section, Some(SectionKind::Hero)) {
                hero_query(&self.keywords, &self.industry)
            } else if !self.keywords.is_empty() {
                self.keywords.clone()
            } else {
                self.industry.clone()
            };
            return Some(Slot {
                field,
                query,
                orientation: Orientation::Landscape,
                portrait: false,
            });
        }

        let query = PORTRAIT_QUERIES[self.portrait_cursor % PORTRAIT_QUERIES.len()];
        self.portrait_cursor += 1;
        Some(Slot {
            field,
            query: query.to_string(),
            orientation: Orientation::Portrait,
            portrait: true,
        })
    }

    async fn lookup(&mut self, module: &LayoutNode, slot: &Slot) -> Result<Photo, EnrichmentError> {
        let query = PhotoQuery::new(&slot.query, slot.orientation, PHOTOS_PER_QUERY);
        let photos = self
            .photos
            .search(&query)
            .await
            .map_err(|source| EnrichmentError::Lookup {
                node_id: module.id.clone(),
                module_type: module.module_type().unwrap_or_default().to_string(),
                source,
            })?;

        let chosen = photos
            .iter()
            .find(|p| !self.used.contains(&p.id))
            .or_else(|| photos.first())
            .cloned()
            .ok_or_else(|| EnrichmentError::NoResults {
                node_id: module.id.clone(),
                query: slot.query.clone(),
            })?;
        self.used.insert(chosen.id);
        Ok(chosen)
    }
}

/// Enrich `sections` with a fresh enricher.
pub async fn enrich_media(
    sections: &mut [LayoutNode],
    photos: &dyn PhotoSource,
    prompt: &str,
    industry: &str,
) -> EnrichmentReport {
    MediaEnricher::new(photos, prompt, industry)
        .enrich(sections)
        .await
}
