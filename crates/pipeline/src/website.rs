//! Multi-page website variant.
//!
//! Every page is an independent pipeline run with its own id scope. Pages
//! run concurrently; the shared header and footer are synthesized locally
//! and styled with the first page's tokens.

use crate::orchestrator::Pipeline;
use crate::stats::RunStats;
use futures::future::join_all;
use pagewright_core::{Document, IdAllocator, Page, PipelineError, Website};
use pagewright_layout::{
    DEFAULT_PAGES, Placeholders, StyleEngine, footer_section, header_section, title_case,
};
use pagewright_tokens::DesignTokens;
use std::collections::BTreeMap;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct WebsiteOutput {
    pub website: Website,
    /// Tokens of the first page, shared by header and footer.
    pub tokens: DesignTokens,
    /// Run statistics per page slug.
    pub pages: BTreeMap<String, RunStats>,
}

/// `"About-Us"` → `"about_us"`.
pub fn page_slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Slugs for the requested pages, deduplicated in order. An empty request
/// yields the default four-page site.
pub fn page_slugs(requested: &[String]) -> Vec<String> {
    let mut slugs: Vec<String> = Vec::new();
    for slug in requested.iter().map(|p| page_slug(p)) {
        if !slug.is_empty() && !slugs.contains(&slug) {
            slugs.push(slug);
        }
    }
    if slugs.is_empty() {
        slugs = DEFAULT_PAGES.iter().map(|p| p.to_string()).collect();
    }
    slugs
}

/// Generate every page in `pipeline`'s options plus a shared header and
/// footer.
pub async fn generate_website(
    pipeline: &Pipeline,
    prompt: &str,
) -> Result<WebsiteOutput, PipelineError> {
    let slugs = page_slugs(&pipeline.options().pages);
    info!(pages = ?slugs, "Generating website");

    let runs = slugs.iter().map(|slug| {
        let options = pipeline
            .options()
            .clone()
            .with_page_kind(slug.clone())
            .with_pages(slugs.clone());
        let page_pipeline = pipeline.clone().with_options(options);
        let ids = IdAllocator::scoped(slug.clone());
        async move { page_pipeline.generate_with_ids(prompt, ids).await }
    });
    let results = join_all(runs).await;

    let mut pages = BTreeMap::new();
    let mut stats = BTreeMap::new();
    let mut shared: Option<(DesignTokens, String)> = None;
    for (slug, result) in slugs.iter().zip(results) {
        let output = result?;
        if shared.is_none() {
            shared = Some((output.tokens.clone(), output.outline.page_title.clone()));
        }
        pages.insert(
            slug.clone(),
            Page {
                title: title_case(slug),
                sections: output.document.sections,
            },
        );
        stats.insert(slug.clone(), output.stats);
    }
    let Some((tokens, site_name)) = shared else {
        return Err(PipelineError::ServiceUnavailable("no pages were generated".into()));
    };

    let styles = StyleEngine::default();
    let mut header = styles
        .apply(&[header_section(&mut IdAllocator::scoped("header"))], &tokens)
        .sections;
    let mut footer = styles
        .apply(&[footer_section(&mut IdAllocator::scoped("footer"))], &tokens)
        .sections;
    let mut placeholders = Placeholders::new(site_name).with_pages(slugs.clone());
    placeholders.fill(&mut header);
    placeholders.fill(&mut footer);

    let mut website = Website {
        header: Document::new(header),
        footer: Document::new(footer),
        pages,
    };
    let report = website.finalize();
    if !report.rows_repaired.is_empty() {
        warn!(rows = ?report.rows_repaired, "Website rows repaired during finalize");
    }

    info!(pages = website.pages.len(), "Website complete");
    Ok(WebsiteOutput {
        website,
        tokens,
        pages: stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenerationOptions;
    use async_trait::async_trait;
    use pagewright_core::error::GeneratorError;
    use pagewright_core::{GenerationRequest, GenerationResponse, LayoutNode, TextGenerator};
    use std::sync::{Arc, Mutex};

    /// Always fails, so every page uses its default outline.
    struct OfflineGenerator {
        configured: bool,
        call_count: Mutex<usize>,
    }

    impl OfflineGenerator {
        fn new(configured: bool) -> Self {
            Self {
                configured,
                call_count: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl TextGenerator for OfflineGenerator {
        fn name(&self) -> &str {
            "offline"
        }

        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn generate(
            &self,
            _request: GenerationRequest,
        ) -> std::result::Result<GenerationResponse, GeneratorError> {
            *self.call_count.lock().unwrap() += 1;
            Err(GeneratorError::Network("offline".into()))
        }
    }

    fn pipeline(pages: &[&str]) -> (Pipeline, Arc<OfflineGenerator>) {
        let generator = Arc::new(OfflineGenerator::new(true));
        let options = GenerationOptions::default()
            .with_pages(pages.iter().map(|p| p.to_string()).collect());
        (Pipeline::new(generator.clone()).with_options(options), generator)
    }

    fn all_ids(sections: &[LayoutNode]) -> Vec<String> {
        let mut ids = Vec::new();
        for section in sections {
            section.walk(&mut |node| ids.push(node.id.clone()));
        }
        ids
    }

    #[test]
    fn slugs_normalize_and_dedupe() {
        assert_eq!(page_slug("About-Us"), "about_us");
        assert_eq!(page_slug("  Our Team "), "our_team");
        assert_eq!(
            page_slugs(&["Home".into(), "about-us".into(), "about_us".into(), " ".into()]),
            vec!["home", "about_us"]
        );
        assert_eq!(page_slugs(&[]), vec!["home", "about", "services", "contact"]);
    }

    #[tokio::test]
    async fn pages_get_scoped_ids_and_titles() {
        let (pipeline, generator) = pipeline(&["home", "about-us", "pricing"]);
        let output = generate_website(&pipeline, "Acme Cloud, hosting for teams").await.unwrap();

        let site = &output.website;
        assert_eq!(site.pages.len(), 3);
        assert_eq!(site.pages["about_us"].title, "About Us");
        assert_eq!(site.pages["home"].sections.len(), 5);
        assert_eq!(site.pages["pricing"].sections.len(), 4);
        // Two calls (outline and content) per page.
        assert_eq!(generator.calls(), 6);

        for (slug, page) in &site.pages {
            let prefix = format!("{slug}_");
            assert!(all_ids(&page.sections).iter().all(|id| id.starts_with(&prefix)), "{slug}");
        }

        let mut every_id = all_ids(&site.header.sections);
        every_id.extend(all_ids(&site.footer.sections));
        for page in site.pages.values() {
            every_id.extend(all_ids(&page.sections));
        }
        let unique: std::collections::HashSet<_> = every_id.iter().collect();
        assert_eq!(unique.len(), every_id.len());

        assert_eq!(output.pages.len(), 3);
        assert_eq!(output.pages["pricing"].sections_count, 4);
    }

    #[tokio::test]
    async fn header_and_footer_are_shared() {
        let (pipeline, _) = pipeline(&["home", "contact"]);
        let output = generate_website(&pipeline, "Acme Cloud, hosting for teams").await.unwrap();

        let header = &output.website.header.sections[0];
        assert_eq!(header.children[0].columns(), Some("1_4,1_2,1_4"));
        let modules = header.modules();
        let logo = modules.iter().find(|m| m.module_type() == Some("site_logo")).unwrap();
        assert_eq!(logo.attrs["text"], "Acme Cloud");
        let menu = modules.iter().find(|m| m.module_type() == Some("menu")).unwrap();
        assert_eq!(menu.attrs["items"].as_array().unwrap().len(), 2);
        assert_eq!(menu.attrs["items"][1]["url"], "/contact");

        let footer = &output.website.footer.sections[0];
        assert_eq!(footer.children[0].columns(), Some("1_3,1_3,1_3"));
        assert!(footer.id.starts_with("footer_"));
        assert!(output.website.header.validate().is_empty());
    }

    #[tokio::test]
    async fn footer_text_contrasts_with_its_background() {
        let (pipeline, _) = pipeline(&["home"]);
        let output = generate_website(&pipeline, "Acme Cloud, hosting for teams").await.unwrap();
        let colors = &output.tokens.colors;

        let footer = &output.website.footer.sections[0];
        assert_eq!(footer.attrs["background_color"], colors.dark.as_str());
        for module in footer.modules() {
            let color = module.attrs["text_color"].as_str().unwrap();
            assert_ne!(color, colors.text, "{}", module.id);
            assert_ne!(color, colors.text_light, "{}", module.id);
        }
        let heading = footer.modules()[0];
        assert_eq!(heading.attrs["text_color"], colors.white.as_str());

        let header = &output.website.header.sections[0];
        assert_eq!(header.attrs["background_color"], colors.white.as_str());
    }

    #[tokio::test]
    async fn unconfigured_generator_fails_the_site() {
        let generator = Arc::new(OfflineGenerator::new(false));
        let pipeline = Pipeline::new(generator.clone());
        let err = generate_website(&pipeline, "Acme").await.unwrap_err();
        assert!(matches!(err, PipelineError::ServiceUnavailable(_)));
        assert_eq!(generator.calls(), 0);
    }
}
