//! The resolved token set and the resolver.

use crate::input::{TokenFamily, TokenInput};
use serde::Serialize;
use serde_json::{Value, json};

/// `{top, right, bottom, left}` spacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Sides {
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
    pub left: i64,
}

impl Sides {
    pub fn new(top: i64, right: i64, bottom: i64, left: i64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(v: i64) -> Self {
        Self::new(v, v, v, v)
    }

    /// Same value top/bottom and left/right.
    pub fn symmetric(vertical: i64, horizontal: i64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn bottom(v: i64) -> Self {
        Self::new(0, 0, v, 0)
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn to_value(self) -> Value {
        json!({"top": self.top, "right": self.right, "bottom": self.bottom, "left": self.left})
    }
}

/// `{top_left, top_right, bottom_right, bottom_left}` radii.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Corners {
    pub top_left: i64,
    pub top_right: i64,
    pub bottom_right: i64,
    pub bottom_left: i64,
}

impl Corners {
    pub fn uniform(r: i64) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    pub fn to_value(self) -> Value {
        json!({
            "top_left": self.top_left,
            "top_right": self.top_right,
            "bottom_right": self.bottom_right,
            "bottom_left": self.bottom_left,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub dark: String,
    pub light_bg: String,
    pub text: String,
    pub text_light: String,
    pub white: String,
    pub gray_50: String,
    pub gray_100: String,
    pub gray_200: String,
    pub gray_300: String,
    pub gray_400: String,
    pub border: String,
    pub input_border: String,
    pub placeholder: String,
    pub success: String,
    pub error: String,
    pub warning: String,
    pub code_bg: String,
    pub code_text: String,
}

/// One entry of the type scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeScale {
    pub size: i64,
    pub size_tablet: i64,
    pub size_phone: i64,
    pub weight: String,
    pub line_height: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonType {
    pub size: i64,
    pub size_tablet: i64,
    pub size_phone: i64,
    pub weight: String,
    pub letter_spacing: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconScale {
    pub size: i64,
    pub size_large: i64,
    pub size_xl: i64,
    pub size_xl_tablet: i64,
    pub size_xl_phone: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Weights {
    pub light: String,
    pub normal: String,
    pub medium: String,
    pub semibold: String,
    pub bold: String,
    pub extrabold: String,
    pub content: String,
    pub label: String,
    pub title: String,
}

/// Transition and animation timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Motion {
    pub transition_fast: String,
    pub transition_normal: String,
    pub transition_slow: String,
    pub animation_duration: i64,
    pub animation_duration_short: i64,
    pub slider_autoplay: i64,
    pub slider_transition: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Typography {
    pub h1: TypeScale,
    pub h2: TypeScale,
    pub h3: TypeScale,
    pub h4: TypeScale,
    pub body: TypeScale,
    pub small: TypeScale,
    pub content: TypeScale,
    pub counter: TypeScale,
    pub name: TypeScale,
    pub subtitle: TypeScale,
    pub button: ButtonType,
    pub code_size: i64,
    pub code_family: String,
    pub icon: IconScale,
    pub weights: Weights,
    pub motion: Motion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spacing {
    pub section_padding: Sides,
    pub hero_padding: Sides,
    pub element_gap: i64,
    pub element_margin: Sides,
    pub card_padding: Sides,
    pub card_padding_tablet: Sides,
    pub card_padding_phone: Sides,
    pub button_padding: Sides,
    pub button_padding_tablet: Sides,
    pub button_padding_phone: Sides,
    pub compact_padding: Sides,
    pub compact_padding_tablet: Sides,
    pub compact_padding_phone: Sides,
    pub cta_padding: Sides,
    pub cta_padding_tablet: Sides,
    pub cta_padding_phone: Sides,
    pub margin_sm: i64,
    pub margin_md: i64,
    pub margin_lg: i64,
    pub margin_xl: i64,
    pub margin_bottom_sm: Sides,
    pub margin_bottom_md: Sides,
    pub margin_bottom_lg: Sides,
    pub margin_bottom_xl: Sides,
    pub container_padding: i64,
    pub container_padding_tablet: i64,
    pub container_padding_phone: i64,
    pub max_width: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Borders {
    pub radius_small: Corners,
    pub radius_medium: Corners,
    pub radius_large: Corners,
    pub width: i64,
    pub width_zero: Sides,
    pub width_all: Sides,
    pub width_bottom: Sides,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shadows {
    pub card: String,
    pub elevated: String,
    pub hero_image: String,
    pub button: String,
    pub button_hover: String,
    pub input_focus: String,
    pub none: String,
}

/// The complete visual vocabulary for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignTokens {
    pub colors: Colors,
    pub typography: Typography,
    pub spacing: Spacing,
    pub borders: Borders,
    pub shadows: Shadows,
}

impl Default for DesignTokens {
    fn default() -> Self {
        resolve(&TokenInput::default())
    }
}

/// `(value * factor)` truncated toward zero.
fn scale(value: i64, factor: f64) -> i64 {
    (value as f64 * factor) as i64
}

/// A responsive type-scale entry. `tablet`/`phone` are `(num, den)` ratios
/// of the resolved size, used unless the input names the size explicitly.
fn type_scale(
    t: &TokenFamily,
    prefix: &str,
    default_size: i64,
    tablet: (i64, i64),
    phone: (i64, i64),
    weight: &str,
    line_height: &str,
) -> TypeScale {
    let size = t.int_or(&format!("{prefix}_size"), default_size);
    TypeScale {
        size,
        size_tablet: t.int_or(&format!("{prefix}_size_tablet"), size * tablet.0 / tablet.1),
        size_phone: t.int_or(&format!("{prefix}_size_phone"), size * phone.0 / phone.1),
        weight: t.text_or(&format!("{prefix}_weight"), weight),
        line_height: t.text_or(&format!("{prefix}_line_height"), line_height),
    }
}

fn resolve_colors(c: &TokenFamily) -> Colors {
    let fixed = |s: &str| s.to_string();
    Colors {
        primary: c.text_or("primary", "#2563eb"),
        secondary: c.text_or("secondary", "#3b82f6"),
        dark: c.text_or("dark", "#1e3a8a"),
        light_bg: c.text_or("light_bg", "#f8fafc"),
        text: c.text_or("text", "#111827"),
        text_light: c.text_or("text_light", "#6b7280"),
        white: fixed("#ffffff"),
        gray_50: fixed("#f9fafb"),
        gray_100: fixed("#f3f4f6"),
        gray_200: fixed("#e5e7eb"),
        gray_300: fixed("#d1d5db"),
        gray_400: fixed("#9ca3af"),
        border: fixed("#e5e7eb"),
        input_border: fixed("#d1d5db"),
        placeholder: fixed("#9ca3af"),
        success: fixed("#10b981"),
        error: fixed("#ef4444"),
        warning: fixed("#d97706"),
        code_bg: fixed("#1e293b"),
        code_text: fixed("#e2e8f0"),
    }
}

fn resolve_typography(t: &TokenFamily) -> Typography {
    let body_size = t.int_or("body_size", 18);
    let small_size = body_size - 2;

    let icon_xl = t.int_or("icon_size_xl", 48);

    Typography {
        h1: type_scale(t, "h1", 56, (17, 20), (7, 10), "700", "1.1"),
        h2: type_scale(t, "h2", 42, (17, 20), (7, 10), "700", "1.2"),
        h3: type_scale(t, "h3", 32, (7, 8), (3, 4), "700", "1.3"),
        h4: type_scale(t, "h4", 20, (9, 10), (17, 20), "600", "1.4"),
        body: TypeScale {
            size: body_size,
            size_tablet: small_size,
            size_phone: small_size - 1,
            weight: t.text_or("body_weight", "400"),
            line_height: t.text_or("body_line_height", "1.7"),
        },
        small: TypeScale {
            size: small_size,
            size_tablet: small_size,
            size_phone: small_size - 1,
            weight: t.text_or("small_weight", "400"),
            line_height: t.text_or("small_line_height", "1.6"),
        },
        content: type_scale(t, "content", 16, (15, 16), (7, 8), "400", "1.6"),
        counter: type_scale(t, "counter", 48, (5, 6), (2, 3), "700", "1.2"),
        name: type_scale(t, "name", 18, (17, 18), (8, 9), "600", "1.4"),
        subtitle: type_scale(t, "subtitle", 14, (13, 14), (13, 14), "400", "normal"),
        button: {
            let size = t.int_or("button_size", 16);
            ButtonType {
                size,
                size_tablet: t.int_or("button_size_tablet", size * 15 / 16),
                size_phone: t.int_or("button_size_phone", size * 7 / 8),
                weight: t.text_or("button_weight", "600"),
                letter_spacing: t.text_or("button_letter_spacing", "0.025em"),
            }
        },
        code_size: t.int_or("code_size", 14),
        code_family: "monospace".into(),
        icon: IconScale {
            size: t.int_or("icon_size", 20),
            size_large: t.int_or("icon_size_large", 24),
            size_xl: icon_xl,
            size_xl_tablet: t.int_or("icon_size_xl_tablet", icon_xl * 5 / 6),
            size_xl_phone: t.int_or("icon_size_xl_phone", icon_xl * 3 / 4),
        },
        weights: Weights {
            light: t.text_or("weight_light", "300"),
            normal: t.text_or("weight_normal", "400"),
            medium: t.text_or("weight_medium", "500"),
            semibold: t.text_or("weight_semibold", "600"),
            bold: t.text_or("weight_bold", "700"),
            extrabold: t.text_or("weight_extrabold", "800"),
            content: t.text_or("content_weight", "400"),
            label: t.text_or("label_weight", "500"),
            title: t.text_or("title_weight", "600"),
        },
        motion: Motion {
            transition_fast: t.text_or("transition_fast", "200ms"),
            transition_normal: t.text_or("transition_normal", "300ms"),
            transition_slow: t.text_or("transition_slow", "500ms"),
            animation_duration: t.int_or("animation_duration", 2000),
            animation_duration_short: t.int_or("animation_duration_short", 1500),
            slider_autoplay: t.int_or("slider_autoplay", 5000),
            slider_transition: t.int_or("slider_transition", 500),
        },
    }
}

/// Base values come from the input; everything derived from them is
/// recomputed here so proportions always hold.
fn resolve_spacing(s: &TokenFamily) -> Spacing {
    let section = s.int_or("section_padding", 100);
    let hero = s.int_or("hero_padding", 120);
    let gap = s.int_or("element_gap", 24);
    let card = s.int_or("card_padding", 32);

    let btn_v = s.int_or("button_padding_v", 16);
    let btn_h = s.int_or("button_padding_h", 32);
    let btn_v_tablet = s.int_or("button_padding_v_tablet", 14);
    let btn_h_tablet = s.int_or("button_padding_h_tablet", 28);
    let btn_v_phone = s.int_or("button_padding_v_phone", 12);
    let btn_h_phone = s.int_or("button_padding_h_phone", 24);

    let margin_sm = scale(gap, 0.5);
    let margin_md = gap;
    let margin_lg = scale(gap, 1.33);
    let margin_xl = gap * 2;

    Spacing {
        section_padding: Sides::symmetric(section, 0),
        hero_padding: Sides::symmetric(hero, 0),
        element_gap: gap,
        element_margin: Sides::bottom(gap),
        card_padding: Sides::symmetric(card, scale(card, 0.75)),
        card_padding_tablet: Sides::symmetric(scale(card, 0.875), scale(card, 0.625)),
        card_padding_phone: Sides::symmetric(scale(card, 0.75), scale(card, 0.5)),
        button_padding: Sides::symmetric(btn_v, btn_h),
        button_padding_tablet: Sides::symmetric(btn_v_tablet, btn_h_tablet),
        button_padding_phone: Sides::symmetric(btn_v_phone, btn_h_phone),
        compact_padding: Sides::symmetric(scale(card, 0.5), scale(card, 0.75)),
        compact_padding_tablet: Sides::symmetric(scale(card, 0.44), scale(card, 0.625)),
        compact_padding_phone: Sides::symmetric(scale(card, 0.375), scale(card, 0.5)),
        cta_padding: Sides::symmetric(scale(card, 1.875), scale(card, 1.25)),
        cta_padding_tablet: Sides::symmetric(scale(card, 1.5), card),
        cta_padding_phone: Sides::symmetric(scale(card, 1.25), scale(card, 0.75)),
        margin_sm,
        margin_md,
        margin_lg,
        margin_xl,
        margin_bottom_sm: Sides::bottom(margin_sm),
        margin_bottom_md: Sides::bottom(margin_md),
        margin_bottom_lg: Sides::bottom(margin_lg),
        margin_bottom_xl: Sides::bottom(margin_xl),
        container_padding: scale(gap, 0.83),
        container_padding_tablet: scale(gap, 0.66),
        container_padding_phone: scale(gap, 0.5),
        max_width: scale(section, 12.8),
    }
}

fn resolve_borders(b: &TokenFamily) -> Borders {
    let width = b.int_or("width", 1);
    Borders {
        radius_small: Corners::uniform(b.int_or("radius_small", 8)),
        radius_medium: Corners::uniform(b.int_or("radius_medium", 12)),
        radius_large: Corners::uniform(b.int_or("radius_large", 16)),
        width,
        width_zero: Sides::zero(),
        width_all: Sides::all(width),
        width_bottom: Sides::bottom(width),
    }
}

fn resolve_shadows(s: &TokenFamily, primary: &str) -> Shadows {
    Shadows {
        card: s.text_or("card", "0 4px 20px rgba(0,0,0,0.08)"),
        elevated: s.text_or("elevated", "0 10px 40px rgba(0,0,0,0.12)"),
        hero_image: s.text_or("hover", "0 20px 40px rgba(0,0,0,0.15)"),
        button: s.text_or("button", "0 4px 14px rgba(0,0,0,0.1)"),
        button_hover: s.text_or("button_hover", "0 6px 20px rgba(0,0,0,0.15)"),
        input_focus: s
            .text("input_focus")
            .unwrap_or_else(|| format!("0 0 0 3px {primary}20")),
        none: "none".into(),
    }
}

/// Resolve a complete token set. Each family is resolved independently;
/// missing values take fixed defaults.
pub fn resolve(input: &TokenInput) -> DesignTokens {
    let colors = resolve_colors(&input.color_scheme);
    let typography = resolve_typography(&input.typography);
    let spacing = resolve_spacing(&input.spacing);
    let borders = resolve_borders(&input.borders);
    let shadows = resolve_shadows(&input.shadows, &colors.primary);

    tracing::debug!(
        h1_size = typography.h1.size,
        section_padding = spacing.section_padding.top,
        radius = borders.radius_medium.top_left,
        "Resolved design tokens"
    );

    DesignTokens {
        colors,
        typography,
        spacing,
        borders,
        shadows,
    }
}
