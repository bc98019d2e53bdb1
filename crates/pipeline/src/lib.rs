//! # Pagewright Pipeline
//!
//! Turns a business description into a layout document in six stages:
//!
//! 1. **Outline**: the generator drafts a creative brief (title, voice,
//!    tokens, section plans). Unusable briefs fall back to a default outline.
//! 2. **Structure**: section plans become section/row/column/module trees.
//! 3. **Style**: resolved design tokens become attributes on every node.
//! 4. **Content**: placeholders fill every module, then generator content is
//!    merged over them by module id.
//! 5. **Media**: optional stock photos for image, portrait and team slots.
//! 6. **Finalize**: ids are completed, rows repaired and the tree validated.
//!
//! Single sections ([`generate_section`]) and multi-page sites
//! ([`generate_website`]) reuse the same stages.

pub mod options;
pub mod orchestrator;
pub mod outline;
pub mod prompts;
pub mod section;
pub mod stats;
pub mod website;

pub use options::GenerationOptions;
pub use orchestrator::{Pipeline, PipelineOutput};
pub use outline::{Outline, OutlineRejected, default_outline};
pub use section::generate_section;
pub use stats::{Diagnostic, RunStats, Stage, StageStats};
pub use website::{WebsiteOutput, generate_website, page_slug, page_slugs};
