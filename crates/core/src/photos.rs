//! PhotoSource trait — stock-photo lookup used by media enrichment.

use crate::error::PhotoError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Square => "square",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoQuery {
    pub query: String,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_per_page() -> u32 {
    1
}

impl PhotoQuery {
    pub fn new(query: impl Into<String>, orientation: Orientation, per_page: u32) -> Self {
        Self {
            query: query.into(),
            orientation,
            per_page: per_page.max(1),
        }
    }
}

/// Size variants of a stock photo. Missing variants deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoSrc {
    pub original: String,
    pub large2x: String,
    pub large: String,
    pub medium: String,
    pub small: String,
    pub portrait: String,
    pub landscape: String,
    pub tiny: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub photographer: String,
    #[serde(default)]
    pub src: PhotoSrc,
}

#[async_trait]
pub trait PhotoSource: Send + Sync {
    fn name(&self) -> &str;

    async fn search(&self, query: &PhotoQuery) -> std::result::Result<Vec<Photo>, PhotoError>;
}
