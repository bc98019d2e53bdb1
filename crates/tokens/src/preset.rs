//! Named visual styles.
//!
//! A preset is a partial [`TokenInput`] over typography, spacing, borders,
//! and shadows. Colors are never part of a preset; they come from the
//! industry palette or the outline.

use crate::input::{TokenFamily, TokenInput};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VisualStyle {
    #[default]
    Modern,
    Minimal,
    Bold,
    Elegant,
}

impl VisualStyle {
    pub const ALL: [VisualStyle; 4] = [Self::Modern, Self::Minimal, Self::Bold, Self::Elegant];

    /// Case-insensitive lookup; unknown names fall back to `Modern`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "minimal" => Self::Minimal,
            "bold" => Self::Bold,
            "elegant" => Self::Elegant,
            _ => Self::Modern,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Minimal => "minimal",
            Self::Bold => "bold",
            Self::Elegant => "elegant",
        }
    }

    pub fn preset(&self) -> TokenInput {
        match self {
            Self::Modern => build(
                Heading::new(56, "700", "1.1"),
                Heading::new(42, "700", "1.2"),
                (24, "600"),
                (18, "400", "1.7"),
                [100, 120, 24, 32],
                [8, 12, 16],
                None,
            ),
            Self::Minimal => build(
                Heading::new(48, "600", "1.2"),
                Heading::new(36, "600", "1.25"),
                (22, "500"),
                (17, "400", "1.8"),
                [120, 140, 20, 28],
                [4, 6, 8],
                Some([
                    "0 1px 3px rgba(0,0,0,0.04)",
                    "0 4px 12px rgba(0,0,0,0.06)",
                    "0 8px 24px rgba(0,0,0,0.08)",
                ]),
            ),
            Self::Bold => build(
                Heading::new(68, "800", "1.05"),
                Heading::new(48, "700", "1.15"),
                (28, "700"),
                (18, "400", "1.6"),
                [80, 100, 28, 36],
                [8, 12, 16],
                Some([
                    "0 8px 30px rgba(0,0,0,0.12)",
                    "0 16px 50px rgba(0,0,0,0.18)",
                    "0 24px 60px rgba(0,0,0,0.22)",
                ]),
            ),
            Self::Elegant => build(
                Heading::new(52, "500", "1.15"),
                Heading::new(40, "500", "1.2"),
                (24, "500"),
                (17, "400", "1.75"),
                [110, 130, 24, 32],
                [16, 20, 24],
                Some([
                    "0 4px 16px rgba(0,0,0,0.06)",
                    "0 8px 32px rgba(0,0,0,0.1)",
                    "0 12px 40px rgba(0,0,0,0.12)",
                ]),
            ),
        }
    }
}

impl fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisualStyle {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

struct Heading {
    size: i64,
    weight: &'static str,
    line_height: &'static str,
}

impl Heading {
    fn new(size: i64, weight: &'static str, line_height: &'static str) -> Self {
        Self {
            size,
            weight,
            line_height,
        }
    }
}

fn build(
    h1: Heading,
    h2: Heading,
    h3: (i64, &str),
    body: (i64, &str, &str),
    spacing: [i64; 4],
    radii: [i64; 3],
    shadows: Option<[&str; 3]>,
) -> TokenInput {
    let typography = TokenFamily::new()
        .with("h1_size", h1.size)
        .with("h1_weight", h1.weight)
        .with("h1_line_height", h1.line_height)
        .with("h2_size", h2.size)
        .with("h2_weight", h2.weight)
        .with("h2_line_height", h2.line_height)
        .with("h3_size", h3.0)
        .with("h3_weight", h3.1)
        .with("body_size", body.0)
        .with("body_weight", body.1)
        .with("body_line_height", body.2);

    let [section, hero, gap, card] = spacing;
    let spacing = TokenFamily::new()
        .with("section_padding", section)
        .with("hero_padding", hero)
        .with("element_gap", gap)
        .with("card_padding", card);

    let [small, medium, large] = radii;
    let borders = TokenFamily::new()
        .with("radius_small", small)
        .with("radius_medium", medium)
        .with("radius_large", large);

    let shadows = match shadows {
        Some([card, elevated, hover]) => TokenFamily::new()
            .with("card", card)
            .with("elevated", elevated)
            .with("hover", hover),
        None => TokenFamily::new(),
    };

    TokenInput {
        typography,
        spacing,
        borders,
        shadows,
        ..Default::default()
    }
}
