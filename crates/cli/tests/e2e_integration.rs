//! End-to-end integration tests for the Pagewright pipeline.
//!
//! These tests drive the public crate APIs from a business description to a
//! serialized layout document: outline, structure, style, content, media and
//! finalize, plus the single-section and website variants.

use std::sync::{Arc, Mutex};

use pagewright_core::document::validate;
use pagewright_core::error::{GeneratorError, PhotoError};
use pagewright_core::{
    GenerationRequest, GenerationResponse, LayoutNode, Photo, PhotoQuery, PhotoSource, PhotoSrc,
    TextGenerator, Usage,
};
use pagewright_pipeline::{
    Diagnostic, GenerationOptions, Pipeline, Stage, generate_section, generate_website,
};
use serde_json::{Value, json};

// ── Mock Generator ───────────────────────────────────────────────────────

/// A mock generator that returns scripted responses in sequence, then
/// fails with a network error.
struct ScriptedGenerator {
    responses: Mutex<Vec<String>>,
    requests: Mutex<Vec<GenerationRequest>>,
    call_count: Mutex<usize>,
}

impl ScriptedGenerator {
    fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(String::from).collect()),
            requests: Mutex::new(Vec::new()),
            call_count: Mutex::new(0),
        }
    }

    fn offline() -> Self {
        Self::new(vec![])
    }

    fn calls(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    fn request(&self, index: usize) -> GenerationRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait::async_trait]
impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &str {
        "e2e_mock"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GeneratorError> {
        let mut count = self.call_count.lock().unwrap();
        self.requests.lock().unwrap().push(request);
        let responses = self.responses.lock().unwrap();
        let Some(text) = responses.get(*count).cloned() else {
            *count += 1;
            return Err(GeneratorError::Network("scripted generator exhausted".into()));
        };
        *count += 1;
        Ok(GenerationResponse {
            text,
            model: "mock-1".into(),
            usage: Some(Usage {
                prompt_tokens: 100,
                completion_tokens: 50,
                total_tokens: 150,
            }),
        })
    }
}

// ── Mock Photo Source ────────────────────────────────────────────────────

struct CatalogPhotos {
    queries: Mutex<Vec<PhotoQuery>>,
}

impl CatalogPhotos {
    fn new() -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl PhotoSource for CatalogPhotos {
    fn name(&self) -> &str {
        "catalog"
    }

    async fn search(&self, query: &PhotoQuery) -> Result<Vec<Photo>, PhotoError> {
        let mut queries = self.queries.lock().unwrap();
        queries.push(query.clone());
        let base = queries.len() as u64 * 10;
        Ok((0..query.per_page as u64)
            .map(|i| Photo {
                id: base + i,
                alt: format!("{} photo", query.query),
                photographer: "Catalog".into(),
                src: PhotoSrc {
                    large: format!("https://photos.test/{}/large.jpg", base + i),
                    medium: format!("https://photos.test/{}/medium.jpg", base + i),
                    ..PhotoSrc::default()
                },
            })
            .collect())
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────

const BAKERY_OUTLINE: &str = r##"Here's the brief:
```json
{
  "page_title": "Fresh Crumb Bakery",
  "page_subtitle": "Artisan bread, baked every morning",
  "brand_voice": "warm",
  "color_scheme": {"primary": "#b45309", "secondary": "#78350f"},
  "typography": {"h1_size": 60},
  "sections": [
    {"type": "hero", "layout": "split-left", "headline": "Bread Worth Waking Up For", "background": "light"},
    {"type": "services", "layout": "grid-3", "headline": "From Our Ovens"},
    {"type": "call to action", "layout": "centered", "headline": "Order for Pickup", "background": "dark"}
  ]
}
```"##;

fn modules_of<'a>(sections: &'a [LayoutNode], module_type: &str) -> Vec<&'a LayoutNode> {
    sections
        .iter()
        .flat_map(|s| s.modules())
        .filter(|m| m.module_type() == Some(module_type))
        .collect()
}

fn ids_of(sections: &[LayoutNode]) -> Vec<String> {
    let mut ids = Vec::new();
    for section in sections {
        section.walk(&mut |node| ids.push(node.id.clone()));
    }
    ids
}

/// Every row's widths must be parseable and its child count must match.
fn assert_rows_consistent(doc: &Value) {
    fn visit(node: &Value) {
        if node["type"] == "row" {
            let columns = node["attrs"]["columns"].as_str().unwrap();
            let children = node["children"].as_array().unwrap();
            assert_eq!(columns.split(',').count(), children.len(), "row {}", node["id"]);
        }
        if let Some(children) = node["children"].as_array() {
            children.iter().for_each(visit);
        }
    }
    for section in doc["sections"].as_array().unwrap() {
        visit(section);
    }
}

// ── Full Pipeline ────────────────────────────────────────────────────────

#[tokio::test]
async fn e2e_full_pipeline_with_content_and_media() {
    // Ids are deterministic for this outline: hero section_1..el_8,
    // features section_9 (title el_12, blurbs el_15/el_17/el_19),
    // cta section_20 (heading el_23).
    let content = r#"{"modules": {
        "el_4": {"heading": "Bread Worth Waking Up For"},
        "el_5": {"content": "Slow-fermented loaves from a wood-fired oven."},
        "el_15": {"title": "Sourdough", "content": "Naturally leavened, 36-hour ferment.", "icon": "bread"},
        "el_17": {"title": "Pastries", "content": "Laminated by hand daily."},
        "el_23": {"text": "Order for Pickup"},
        "el_999": {"text": "Unknown module"}
    }}"#;
    let generator = Arc::new(ScriptedGenerator::new(vec![BAKERY_OUTLINE, content]));
    let photos = Arc::new(CatalogPhotos::new());
    let pipeline = Pipeline::new(generator.clone()).with_photos(Some(photos.clone()));

    let output = pipeline
        .generate("Fresh Crumb Bakery, an artisan sourdough bakery in Portland")
        .await
        .unwrap();

    assert_eq!(generator.calls(), 2);
    assert!(generator.request(0).json_mode);
    assert!(generator.request(1).prompt.contains("\"el_15\""));

    let sections = &output.document.sections;
    assert_eq!(sections.len(), 3);
    assert_eq!(output.tokens.colors.primary, "#b45309");
    assert_eq!(output.tokens.typography.h1.size, 60);

    let blurbs = modules_of(sections, "blurb");
    assert_eq!(blurbs.len(), 3);
    assert_eq!(blurbs[0].attrs["title"], "Sourdough");
    assert_eq!(blurbs[1].attrs["title"], "Pastries");
    // The third blurb kept its placeholder.
    assert!(blurbs[2].attrs["title"].as_str().is_some_and(|t| !t.is_empty()));

    let image = modules_of(sections, "image")[0];
    assert!(image.attrs["src"].as_str().unwrap().starts_with("https://photos.test/"));
    assert_eq!(photos.queries.lock().unwrap().len(), 1);

    let content_stage = output.stats.stage(Stage::Content).unwrap();
    assert_eq!(content_stage.metrics["ai_generated"], true);
    assert_eq!(content_stage.metrics["modules_merged"], 5);
    assert!(output.stats.is_clean(), "{:?}", output.stats.diagnostics);

    let doc = serde_json::to_value(&output.document).unwrap();
    assert_eq!(doc["sections"][0]["type"], "section");
    assert_eq!(doc["sections"][1]["children"][1]["attrs"]["columns"], "1_3,1_3,1_3");
    assert_rows_consistent(&doc);
    assert!(validate(sections).is_empty());
}

#[tokio::test]
async fn e2e_offline_generator_still_produces_a_page() {
    let generator = Arc::new(ScriptedGenerator::offline());
    let pipeline = Pipeline::new(generator.clone())
        .with_options(GenerationOptions::default().with_industry("fitness"));

    let output = pipeline.generate("Iron Temple Gym, strength coaching").await.unwrap();

    assert_eq!(generator.calls(), 2);
    assert_eq!(output.outline.page_title, "Iron Temple Gym");
    assert_eq!(output.document.sections.len(), 5);
    assert_eq!(output.stats.fallback_stages(), vec![Stage::Outline, Stage::Content]);
    assert_eq!(
        output
            .stats
            .diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::GenerationFailed { .. }))
            .count(),
        2
    );

    let counters = modules_of(&output.document.sections, "number_counter");
    assert_eq!(counters.len(), 4);
    assert_eq!(counters[0].attrs["title"], "Happy Clients");

    let ids = ids_of(&output.document.sections);
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert!(ids.iter().all(|id| !id.is_empty()));
}

#[tokio::test]
async fn e2e_truncated_outline_is_recovered() {
    let truncated = r#"{"page_title": "Zen Yoga", "sections": [
        {"type": "hero", "headline": "Breathe In"},
        {"type": "testimonials", "layout": "grid-3"},
        {"type": "faq", "headl"#;
    let generator = Arc::new(ScriptedGenerator::new(vec![truncated]));
    let output = Pipeline::new(generator)
        .generate("Zen Yoga studio")
        .await
        .unwrap();

    assert!(!output.stats.stage(Stage::Outline).unwrap().fallback);
    let kinds: Vec<_> = output
        .document
        .sections
        .iter()
        .map(|s| s.section_kind.as_ref().unwrap().as_str().to_string())
        .collect();
    assert_eq!(kinds, ["hero", "testimonials", "faq"]);
}

// ── Variants ─────────────────────────────────────────────────────────────

#[test]
fn e2e_single_section_is_local_and_valid() {
    let doc = generate_section("team", "Northwind Dental, family dentistry", &GenerationOptions::default());
    let members = modules_of(&doc.sections, "team_member");
    assert_eq!(members.len(), 4);
    assert!(members.iter().all(|m| m.attrs.contains_key("name")));
    assert!(doc.validate().is_empty());
}

#[tokio::test]
async fn e2e_website_serializes_header_footer_and_pages() {
    let generator = Arc::new(ScriptedGenerator::offline());
    let options = GenerationOptions::default()
        .without_media()
        .with_pages(vec!["home".into(), "about".into(), "contact-us".into()]);
    let pipeline = Pipeline::new(generator.clone()).with_options(options);

    let output = generate_website(&pipeline, "Acme Legal, trusted counsel").await.unwrap();
    let site = serde_json::to_value(&output.website).unwrap();

    assert_eq!(site["header"]["sections"][0]["children"][0]["attrs"]["columns"], "1_4,1_2,1_4");
    assert_eq!(site["footer"]["sections"][0]["children"][0]["attrs"]["columns"], "1_3,1_3,1_3");
    assert_eq!(site["pages"]["contact_us"]["title"], "Contact Us");
    assert_eq!(site["pages"]["about"]["sections"].as_array().unwrap().len(), 5);

    let menu = modules_of(&output.website.header.sections, "menu")[0];
    assert_eq!(
        menu.attrs["items"],
        json!([
            {"label": "Home", "url": "/"},
            {"label": "About", "url": "/about"},
            {"label": "Contact Us", "url": "/contact-us"}
        ])
    );

    for (slug, page) in &output.website.pages {
        assert!(ids_of(&page.sections).iter().all(|id| id.starts_with(&format!("{slug}_"))));
        assert!(validate(&page.sections).is_empty(), "{slug}");
    }
    assert_eq!(generator.calls(), 6);
}
