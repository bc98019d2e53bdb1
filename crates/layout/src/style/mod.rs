//! Style engine: fills every node's `attrs` from the design tokens.
//!
//! Traversal is depth-first and pre-order. The enclosing section's kind is
//! the styling context for every descendant. Attributes already present on
//! a node are never overwritten, so content set before styling survives.

mod modules;
pub mod registry;

pub use registry::{ModuleContext, StyleFn, StyleRegistry};

use pagewright_core::{Attrs, LayoutNode, NodeKind, SectionKind};
use pagewright_tokens::{Corners, DesignTokens, Sides};
use registry::object;
use serde_json::json;

/// Scale by a fraction, truncating.
fn pct(value: i64, factor: f64) -> i64 {
    (value as f64 * factor) as i64
}

/// Insert every entry of `style` that the node does not already carry.
fn merge_under(attrs: &mut Attrs, style: Attrs) {
    for (key, value) in style {
        attrs.entry(key).or_insert(value);
    }
}

// ── Section level ──────────────────────────────────────────────────

/// Background color for a section.
///
/// An explicit request wins; otherwise `cta` and the last section go dark,
/// hero/testimonials/stats/faq take the light background, the rest white.
pub fn section_background(
    kind: &SectionKind,
    requested: Option<&str>,
    is_last: bool,
    tokens: &DesignTokens,
) -> String {
    let c = &tokens.colors;
    if let Some(requested) = requested {
        return match requested.trim().to_ascii_lowercase().as_str() {
            "dark" => c.dark.clone(),
            "primary" => c.primary.clone(),
            "light" => c.light_bg.clone(),
            _ => c.white.clone(),
        };
    }
    match kind {
        SectionKind::Cta => c.dark.clone(),
        _ if is_last => c.dark.clone(),
        SectionKind::Hero | SectionKind::Testimonials | SectionKind::Stats | SectionKind::Faq => {
            c.light_bg.clone()
        }
        _ => c.white.clone(),
    }
}

/// Backgrounds that take light text: the palette's dark and primary colors.
pub fn is_dark_background(background: &str, tokens: &DesignTokens) -> bool {
    let c = &tokens.colors;
    background.eq_ignore_ascii_case(&c.dark) || background.eq_ignore_ascii_case(&c.primary)
}

pub fn section_attrs(
    kind: &SectionKind,
    requested: Option<&str>,
    is_last: bool,
    tokens: &DesignTokens,
) -> Attrs {
    let s = &tokens.spacing;
    let tablet_h = s.container_padding_tablet;
    let phone_h = s.container_padding_phone;

    let (padding, tablet, phone) = match kind {
        SectionKind::Hero => {
            let hero = s.hero_padding.top;
            (
                s.hero_padding,
                Sides::symmetric(pct(hero, 0.67), tablet_h),
                Sides::symmetric(pct(hero, 0.5), phone_h),
            )
        }
        SectionKind::Stats => {
            let stats = pct(s.section_padding.top, 0.8);
            (
                Sides::symmetric(stats, 0),
                Sides::symmetric(pct(stats, 0.75), tablet_h),
                Sides::symmetric(pct(stats, 0.6), phone_h),
            )
        }
        _ => {
            let base = s.section_padding.top;
            (
                s.section_padding,
                Sides::symmetric(pct(base, 0.8), tablet_h),
                Sides::symmetric(pct(base, 0.6), phone_h),
            )
        }
    };

    object(json!({
        "background_type": "color",
        "background_color": section_background(kind, requested, is_last, tokens),
        "padding": padding,
        "padding__tablet": tablet,
        "padding__phone": phone,
        "border_width": tokens.borders.width_zero,
        "border_style": "solid",
        "border_color": "transparent",
        "border_radius": Corners::uniform(0),
        "min_height": "auto",
    }))
}

// ── Row level ──────────────────────────────────────────────────────

pub fn row_attrs(section: &SectionKind, tokens: &DesignTokens) -> Attrs {
    let s = &tokens.spacing;
    let gap = s.element_gap;
    let (column_gap, row_gap) = match section {
        SectionKind::Features | SectionKind::Pricing | SectionKind::Team => {
            (pct(gap, 1.33), pct(gap, 1.33))
        }
        SectionKind::Stats => (pct(gap, 0.8), gap),
        SectionKind::Testimonials => (pct(gap, 1.25), gap),
        _ => (gap, gap),
    };

    object(json!({
        "column_gap": column_gap,
        "row_gap": row_gap,
        "equal_heights": true,
        "vertical_align": "center",
        "max_width": format!("{}px", s.max_width),
        "padding": Sides::symmetric(0, s.container_padding),
        "padding__tablet": Sides::symmetric(0, s.container_padding_tablet),
        "padding__phone": Sides::symmetric(0, s.container_padding_phone),
        "margin": {"top": 0, "right": "auto", "bottom": 0, "left": "auto"},
    }))
}

// ── Column level ───────────────────────────────────────────────────

pub fn column_attrs(section: &SectionKind, tokens: &DesignTokens) -> Attrs {
    let horizontal = match section {
        SectionKind::Cta | SectionKind::Stats | SectionKind::Pricing | SectionKind::Faq => {
            "center"
        }
        _ => "left",
    };
    let vertical = match section {
        SectionKind::Features => "top",
        _ => "center",
    };

    object(json!({
        "vertical_align": vertical,
        "horizontal_align": horizontal,
        "padding": Sides::zero(),
        "background_color": "transparent",
        "border_radius": tokens.borders.radius_small,
    }))
}

// ── Engine ─────────────────────────────────────────────────────────

/// Result of styling a tree.
#[derive(Debug, Clone)]
pub struct StyleOutcome {
    pub sections: Vec<LayoutNode>,
    /// Modules that received a registry entry.
    pub modules_styled: usize,
    /// Module types with no registry entry, in document order.
    pub unstyled: Vec<String>,
}

/// Per-section facts shared by every descendant.
struct SectionContext<'a> {
    kind: &'a SectionKind,
    is_last: bool,
    dark: bool,
}

/// Applies section, row, column and module styles.
pub struct StyleEngine {
    registry: StyleRegistry,
}

impl StyleEngine {
    pub fn new(registry: StyleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Style a copy of `sections`. The input is left untouched.
    pub fn apply(&self, sections: &[LayoutNode], tokens: &DesignTokens) -> StyleOutcome {
        let mut styled = sections.to_vec();
        let mut outcome_styled = 0;
        let mut unstyled = Vec::new();
        let last = styled.len().saturating_sub(1);

        for (index, section) in styled.iter_mut().enumerate() {
            let kind = section
                .section_kind
                .clone()
                .unwrap_or_else(|| SectionKind::Other("default".into()));
            let background = section
                .attrs
                .get("background_color")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| {
                    section_background(&kind, section.background.as_deref(), index == last, tokens)
                });
            let cx = SectionContext {
                kind: &kind,
                is_last: index == last,
                dark: is_dark_background(&background, tokens),
            };
            self.style_node(section, &cx, tokens, &mut outcome_styled, &mut unstyled);
        }

        tracing::debug!(
            sections = styled.len(),
            modules_styled = outcome_styled,
            unstyled = unstyled.len(),
            "Applied styles"
        );

        StyleOutcome {
            sections: styled,
            modules_styled: outcome_styled,
            unstyled,
        }
    }

    fn style_node(
        &self,
        node: &mut LayoutNode,
        section: &SectionContext<'_>,
        tokens: &DesignTokens,
        styled: &mut usize,
        unstyled: &mut Vec<String>,
    ) {
        let style = match &node.kind {
            NodeKind::Section => {
                section_attrs(section.kind, node.background.as_deref(), section.is_last, tokens)
            }
            NodeKind::Row => row_attrs(section.kind, tokens),
            NodeKind::Column => column_attrs(section.kind, tokens),
            NodeKind::Module(module_type) => {
                let cx = ModuleContext::new(module_type, section.kind, tokens)
                    .with_dark(section.dark)
                    .with_role(node.role.as_deref());
                match self.registry.get(module_type) {
                    Some(style) => {
                        *styled += 1;
                        style(&cx)
                    }
                    None => {
                        unstyled.push(module_type.clone());
                        Attrs::new()
                    }
                }
            }
        };
        merge_under(&mut node.attrs, style);

        for child in &mut node.children {
            self.style_node(child, section, tokens, styled, unstyled);
        }
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new(StyleRegistry::builtin())
    }
}

/// Style `sections` with the built-in registry.
pub fn apply_styles(sections: &[LayoutNode], tokens: &DesignTokens) -> Vec<LayoutNode> {
    StyleEngine::default().apply(sections, tokens).sections
}
