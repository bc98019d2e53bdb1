//! The staged pipeline: outline → structure → style → content → media →
//! finalize.
//!
//! Only an unconfigured generator fails a run. Every other problem degrades
//! to local content and is recorded as a [`Diagnostic`].

use crate::options::GenerationOptions;
use crate::outline::{Outline, default_outline};
use crate::prompts;
use crate::stats::{Diagnostic, RunStats, Stage, StageStats};
use pagewright_core::document::{finalize, validate};
use pagewright_core::{
    Document, GenerationRequest, IdAllocator, LayoutNode, PhotoSource, PipelineError, TextGenerator,
};
use pagewright_layout::{
    ContentPayload, Placeholders, StyleEngine, collect_modules, enrich_media, merge_content,
    synthesize,
};
use pagewright_parser::parse_detailed;
use pagewright_tokens::{DesignTokens, resolve};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Everything a successful run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub document: Document,
    pub outline: Outline,
    pub tokens: DesignTokens,
    pub stats: RunStats,
}

/// A configured pipeline. Cheap to clone; clones share collaborators.
#[derive(Clone)]
pub struct Pipeline {
    generator: Arc<dyn TextGenerator>,
    photos: Option<Arc<dyn PhotoSource>>,
    options: GenerationOptions,
    styles: Arc<StyleEngine>,
}

impl Pipeline {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            photos: None,
            options: GenerationOptions::default(),
            styles: Arc::new(StyleEngine::default()),
        }
    }

    /// Attach a photo source for media enrichment.
    pub fn with_photos(mut self, photos: Option<Arc<dyn PhotoSource>>) -> Self {
        self.photos = photos;
        self
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_style_engine(mut self, styles: StyleEngine) -> Self {
        self.styles = Arc::new(styles);
        self
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Run the whole pipeline for one page.
    pub async fn generate(&self, prompt: &str) -> Result<PipelineOutput, PipelineError> {
        self.generate_with_ids(prompt, IdAllocator::new()).await
    }

    /// Run the pipeline drawing node ids from `ids`.
    pub async fn generate_with_ids(
        &self,
        prompt: &str,
        mut ids: IdAllocator,
    ) -> Result<PipelineOutput, PipelineError> {
        if !self.generator.is_configured() {
            return Err(PipelineError::ServiceUnavailable(format!(
                "text generator '{}' is not configured",
                self.generator.name()
            )));
        }

        let mut stats = RunStats::new(self.generator.name());
        let industry = self.options.industry_for(prompt);
        info!(
            run_id = %stats.run_id,
            provider = %stats.provider,
            industry = %industry,
            style = %self.options.style,
            page_kind = %self.options.page_kind,
            "Pipeline started"
        );

        let outline = self.outline_stage(prompt, &industry, &mut stats).await;

        let mut stage = StageStats::start(Stage::Structure);
        let skeleton = synthesize(&outline.sections, &mut ids);
        stage.metric("sections_generated", skeleton.len());
        stage.end(true);
        stats.record(stage);

        let (mut sections, tokens) = self.style_stage(&outline, &skeleton, &mut stats);

        self.content_stage(prompt, &outline, &mut sections, &mut stats)
            .await;
        self.media_stage(prompt, &industry, &mut sections, &mut stats)
            .await;
        finalize_stage(&mut sections, &mut ids, &mut stats);

        stats.finish(sections.len());
        info!(
            run_id = %stats.run_id,
            sections = stats.sections_count,
            total_ms = stats.total_ms,
            diagnostics = stats.diagnostics.len(),
            "Pipeline complete"
        );

        Ok(PipelineOutput {
            document: Document::new(sections),
            outline,
            tokens,
            stats,
        })
    }

    // ── Stage 1: outline ──────────────────────────────────────────────

    async fn outline_stage(&self, prompt: &str, industry: &str, stats: &mut RunStats) -> Outline {
        let mut stage = StageStats::start(Stage::Outline);
        let fallback = default_outline(
            prompt,
            industry,
            self.options.style,
            &self.options.page_kind,
        );

        let request = GenerationRequest::new(prompts::outline_prompt(
            prompt,
            industry,
            self.options.style,
            &self.options.page_kind,
        ))
        .with_system_prompt(prompts::outline_system_prompt())
        .with_max_tokens(self.options.outline_max_tokens)
        .with_temperature(self.options.outline_temperature)
        .json();

        let accepted = match self.generator.generate(request).await {
            Ok(response) => match parse_detailed(&response.text) {
                Ok(parsed) => {
                    if parsed.repaired {
                        debug!(stage = "outline", "Outline response needed truncation repair");
                    }
                    match Outline::from_value(&parsed.value, &fallback) {
                        Ok(outline) => Some(outline),
                        Err(rejected) => {
                            stats.diagnose(Diagnostic::MalformedResponse {
                                stage: Stage::Outline,
                                reason: rejected.to_string(),
                            });
                            None
                        }
                    }
                }
                Err(failure) => {
                    stats.diagnose(Diagnostic::MalformedResponse {
                        stage: Stage::Outline,
                        reason: failure.to_string(),
                    });
                    None
                }
            },
            Err(e) => {
                warn!(stage = "outline", error = %e, "Outline generation failed");
                stats.diagnose(Diagnostic::GenerationFailed {
                    stage: Stage::Outline,
                    error: e.to_string(),
                });
                None
            }
        };

        let outline = match accepted {
            Some(outline) => outline,
            None => {
                info!(stage = "outline", "Using default outline");
                stage.mark_fallback();
                fallback
            }
        };

        stage.metric("sections_planned", outline.sections.len());
        stage.end(true);
        stats.record(stage);
        info!(stage = "outline", sections = outline.sections.len(), "Outline ready");
        outline
    }

    // ── Stage 3: style ────────────────────────────────────────────────

    fn style_stage(
        &self,
        outline: &Outline,
        skeleton: &[LayoutNode],
        stats: &mut RunStats,
    ) -> (Vec<LayoutNode>, DesignTokens) {
        let mut stage = StageStats::start(Stage::Style);
        let tokens = resolve(&outline.tokens);
        let outcome = self.styles.apply(skeleton, &tokens);

        if !outcome.unstyled.is_empty() {
            debug!(stage = "style", unstyled = ?outcome.unstyled, "Modules without a style entry");
        }
        stage.metric("modules_styled", outcome.modules_styled);
        stage.metric("modules_unstyled", outcome.unstyled.len());
        stage.end(true);
        stats.record(stage);
        (outcome.sections, tokens)
    }

    // ── Stage 4: content ──────────────────────────────────────────────

    async fn content_stage(
        &self,
        prompt: &str,
        outline: &Outline,
        sections: &mut [LayoutNode],
        stats: &mut RunStats,
    ) {
        let mut stage = StageStats::start(Stage::Content);

        let filled = Placeholders::new(outline.page_title.as_str())
            .with_pages(self.options.pages.clone())
            .fill(sections);
        stage.metric("placeholders_filled", filled);

        let modules = collect_modules(sections);
        let mut merged = 0;
        if !modules.is_empty() {
            let request = GenerationRequest::new(prompts::content_prompt(prompt, outline, &modules))
                .with_system_prompt(prompts::content_system_prompt())
                .with_max_tokens(self.options.content_max_tokens)
                .with_temperature(self.options.content_temperature)
                .json();

            match self.generator.generate(request).await {
                Ok(response) => match ContentPayload::parse(&response.text) {
                    Ok(payload) if payload.is_empty() => {
                        stats.diagnose(Diagnostic::MalformedResponse {
                            stage: Stage::Content,
                            reason: "content payload names no modules".into(),
                        });
                    }
                    Ok(payload) => {
                        let report = merge_content(sections, &payload);
                        stage.metric("modules_missing", report.missing);
                        merged = report.merged;
                        if merged == 0 {
                            stats.diagnose(Diagnostic::MalformedResponse {
                                stage: Stage::Content,
                                reason: "content payload matched no module ids".into(),
                            });
                        }
                    }
                    Err(failure) => {
                        stats.diagnose(Diagnostic::MalformedResponse {
                            stage: Stage::Content,
                            reason: failure.to_string(),
                        });
                    }
                },
                Err(e) => {
                    warn!(stage = "content", error = %e, "Content generation failed, keeping placeholders");
                    stats.diagnose(Diagnostic::GenerationFailed {
                        stage: Stage::Content,
                        error: e.to_string(),
                    });
                }
            }
        }

        let ai_generated = merged > 0;
        if !ai_generated {
            stage.mark_fallback();
        }
        stage.metric("ai_generated", ai_generated);
        stage.metric("modules_merged", merged);
        stage.end(true);
        stats.record(stage);
        info!(stage = "content", ai_generated, merged, placeholders = filled, "Content applied");
    }

    // ── Stage 5: media ────────────────────────────────────────────────

    async fn media_stage(
        &self,
        prompt: &str,
        industry: &str,
        sections: &mut [LayoutNode],
        stats: &mut RunStats,
    ) {
        let mut stage = StageStats::start(Stage::Media);

        match (&self.photos, self.options.enrich_media) {
            (Some(photos), true) => {
                let report = enrich_media(sections, photos.as_ref(), prompt, industry).await;
                stage.metric("images_enriched", report.enriched);
                stage.metric("enrichment_failures", report.failures.len());
                for failure in report.failures {
                    stats.diagnose(Diagnostic::PartialEnrichmentFailure {
                        node_id: failure.node_id().to_string(),
                        reason: failure.to_string(),
                    });
                }
                info!(stage = "media", enriched = report.enriched, "Media enriched");
            }
            (None, true) => {
                debug!(stage = "media", "No photo source configured, skipping media");
                stage.metric("skipped", true);
            }
            (_, false) => {
                debug!(stage = "media", "Media enrichment disabled");
                stage.metric("skipped", true);
            }
        }

        stage.end(true);
        stats.record(stage);
    }
}

// ── Stage 6: finalize ─────────────────────────────────────────────────

fn finalize_stage(sections: &mut [LayoutNode], ids: &mut IdAllocator, stats: &mut RunStats) {
    let mut stage = StageStats::start(Stage::Finalize);
    let report = finalize(sections, ids);

    stage.metric("ids_assigned", report.ids_assigned);
    stage.metric("rows_repaired", report.rows_repaired.len());
    for row_id in report.rows_repaired {
        stats.diagnose(Diagnostic::StructureRepaired { row_id });
    }

    let issues = validate(sections);
    for issue in &issues {
        warn!(stage = "finalize", issue = %issue, "Structure issue after finalize");
    }
    stage.end(issues.is_empty());
    stats.record(stage);
}
