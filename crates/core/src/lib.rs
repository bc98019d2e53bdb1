//! # Pagewright Core
//!
//! Domain types, traits, and error definitions for the Pagewright layout
//! synthesis pipeline. This crate has **no framework dependencies**: it
//! defines the layout tree and the collaborator traits that every other
//! crate builds on.
//!
//! ## Design Philosophy
//!
//! External services (text generation, stock photos) are traits here.
//! Implementations live in `pagewright-providers`, and tests substitute
//! scripted mocks.

pub mod document;
pub mod error;
pub mod generator;
pub mod ids;
pub mod node;
pub mod photos;
pub mod plan;
pub mod section;
pub mod width;

// Re-export key types at crate root for ergonomics
pub use document::{Document, FinalizeReport, Page, StructureIssue, Website};
pub use error::{EnrichmentError, Error, GeneratorError, PhotoError, PipelineError, Result};
pub use generator::{GenerationRequest, GenerationResponse, TextGenerator, Usage};
pub use ids::IdAllocator;
pub use node::{Attrs, LayoutNode, NodeKind};
pub use photos::{Orientation, Photo, PhotoQuery, PhotoSource, PhotoSrc};
pub use plan::{ColumnPlan, SectionPlan};
pub use section::SectionKind;
pub use width::ColumnWidth;
