//! Run statistics and diagnostics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ── Stage ─────────────────────────────────────────────────────────────────

/// The pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Outline,
    Structure,
    Style,
    Content,
    Media,
    Finalize,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::Structure => "structure",
            Self::Style => "style",
            Self::Content => "content",
            Self::Media => "media",
            Self::Finalize => "finalize",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timing and counters for one stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageStats {
    pub stage: Stage,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub success: bool,
    /// Whether the stage substituted local fallback content.
    pub fallback: bool,
    /// Stage-specific counters (`sections_planned`, `images_enriched`, ...).
    pub metrics: serde_json::Map<String, Value>,
}

impl StageStats {
    pub fn start(stage: Stage) -> Self {
        Self {
            stage,
            started_at: Utc::now(),
            duration_ms: 0,
            success: true,
            fallback: false,
            metrics: serde_json::Map::new(),
        }
    }

    pub fn metric(&mut self, key: &str, value: impl Into<Value>) {
        self.metrics.insert(key.to_string(), value.into());
    }

    pub fn mark_fallback(&mut self) {
        self.fallback = true;
    }

    /// Stamp the duration since [`StageStats::start`].
    pub fn end(&mut self, success: bool) {
        self.duration_ms = Utc::now()
            .signed_duration_since(self.started_at)
            .num_milliseconds()
            .max(0) as u64;
        self.success = success;
    }
}

// ── Diagnostics ───────────────────────────────────────────────────────────

/// A recovered problem. None of these fail a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The generator call itself failed; local content was used instead.
    GenerationFailed { stage: Stage, error: String },
    /// A generator response could not be parsed or used.
    MalformedResponse { stage: Stage, reason: String },
    /// One media node could not be enriched.
    PartialEnrichmentFailure { node_id: String, reason: String },
    /// Finalize rebalanced a row whose widths or children disagreed.
    StructureRepaired { row_id: String },
}

impl Diagnostic {
    pub fn stage(&self) -> Stage {
        match self {
            Self::GenerationFailed { stage, .. } | Self::MalformedResponse { stage, .. } => *stage,
            Self::PartialEnrichmentFailure { .. } => Stage::Media,
            Self::StructureRepaired { .. } => Stage::Finalize,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GenerationFailed { stage, error } => write!(f, "{stage}: generation failed: {error}"),
            Self::MalformedResponse { stage, reason } => write!(f, "{stage}: malformed response: {reason}"),
            Self::PartialEnrichmentFailure { node_id, reason } => {
                write!(f, "media: node '{node_id}' not enriched: {reason}")
            }
            Self::StructureRepaired { row_id } => write!(f, "finalize: row '{row_id}' repaired"),
        }
    }
}

// ── Run ───────────────────────────────────────────────────────────────────

/// Statistics for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub total_ms: u64,
    /// Name of the text generator used.
    pub provider: String,
    pub sections_count: usize,
    pub stages: Vec<StageStats>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunStats {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            ended_at: None,
            total_ms: 0,
            provider: provider.into(),
            sections_count: 0,
            stages: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn record(&mut self, stage: StageStats) {
        self.stages.push(stage);
    }

    pub fn diagnose(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn finish(&mut self, sections_count: usize) {
        let now = Utc::now();
        self.ended_at = Some(now);
        self.total_ms = now
            .signed_duration_since(self.started_at)
            .num_milliseconds()
            .max(0) as u64;
        self.sections_count = sections_count;
    }

    pub fn stage(&self, stage: Stage) -> Option<&StageStats> {
        self.stages.iter().find(|s| s.stage == stage)
    }

    /// Stages that fell back to local content.
    pub fn fallback_stages(&self) -> Vec<Stage> {
        self.stages
            .iter()
            .filter(|s| s.fallback)
            .map(|s| s.stage)
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
