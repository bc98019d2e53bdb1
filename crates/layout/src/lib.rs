//! # Pagewright Layout
//!
//! The local stages of the pipeline, each usable on its own:
//!
//! - [`structure`]: section plans → section/row/column/module skeletons
//! - [`style`]: design tokens → attributes on every node
//! - [`content`] and [`placeholders`]: generator content and fallbacks
//! - [`media`]: stock photos for image, portrait and team slots

pub mod content;
pub mod media;
pub mod placeholders;
pub mod structure;
pub mod style;

pub use content::{ContentPayload, MergeReport, ModuleSlot, collect_modules, merge_content, normalize_fields};
pub use media::{EnrichmentReport, MediaEnricher, business_keywords, enrich_media, hero_query};
pub use placeholders::{DEFAULT_PAGES, Placeholders, apply_placeholders, title_case};
pub use structure::{footer_section, header_section, layout_preset, synthesize, synthesize_section};
pub use style::{ModuleContext, StyleEngine, StyleOutcome, StyleRegistry, apply_styles};
