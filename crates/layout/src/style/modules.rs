//! Built-in module style entries.

use super::registry::{ModuleContext, StyleRegistry, object};
use pagewright_core::{Attrs, SectionKind};
use pagewright_tokens::{Sides, adjust_color};
use serde_json::json;

/// `value * factor`, truncated.
fn pct(value: i64, factor: f64) -> i64 {
    (value as f64 * factor) as i64
}

pub(crate) fn register_builtin(registry: &mut StyleRegistry) {
    // ── Core content ─────────────────────────────────────────────
    registry.register("heading", heading);
    registry.register("text", text);
    registry.register("button", button);
    registry.register("image", image);
    registry.register("divider", divider);
    registry.register("icon", icon);
    registry.register("code", code);

    // ── Cards ────────────────────────────────────────────────────
    registry.register("blurb", blurb);
    registry.register("number_counter", number_counter);
    registry.register("circle_counter", circle_counter);
    registry.register("bar_counter", bar_counter);
    registry.register("testimonial", testimonial);
    registry.register("pricing_table", pricing_table);
    registry.register("team_member", team_member);
    registry.register("cta", cta);

    // ── Interactive ──────────────────────────────────────────────
    registry.register("accordion", accordion);
    registry.register("accordion_item", accordion_item);
    registry.register("toggle", toggle);
    registry.register("tabs", tabs);
    registry.register("contact_form", contact_form);
    registry.register("countdown", countdown);

    // ── Media ────────────────────────────────────────────────────
    registry.register("gallery", gallery);
    registry.register("video", video);
    registry.register("slider", slider);
    registry.register("audio", audio);
    registry.register("map", map);

    // ── Header and footer ────────────────────────────────────────
    registry.register("social_follow", social_follow);
    registry.register("site_logo", site_logo);
    registry.register("menu", menu);
    registry.register("header_button", header_button);
    registry.register("copyright", copyright);
    registry.register("footer_menu", footer_menu);
    registry.register("footer_info", footer_info);

    registry.alias("social_icons", "social_follow");
    registry.alias("portfolio", "gallery");
}

fn heading(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;

    let (level, scale) = if cx.in_hero() { ("h1", &t.h1) } else { ("h2", &t.h2) };
    let centered = matches!(
        cx.section,
        SectionKind::Cta
            | SectionKind::Stats
            | SectionKind::Features
            | SectionKind::Testimonials
            | SectionKind::Pricing
            | SectionKind::Faq
            | SectionKind::Team
    );
    let title = cx.is_section_title();
    let dark = cx.in_dark_section();

    object(json!({
        "level": level,
        "font_size": scale.size,
        "font_size__tablet": scale.size_tablet,
        "font_size__phone": scale.size_phone,
        "font_weight": scale.weight,
        "font_family": "inherit",
        "line_height": scale.line_height,
        "letter_spacing": "-0.02em",
        "text_color": if dark { &c.white } else { &c.text },
        "text_align": if centered { "center" } else { "left" },
        "text_align__tablet": "center",
        "text_align__phone": "center",
        "margin": if title { s.margin_bottom_xl } else { s.margin_bottom_md },
        "margin__tablet": if title { s.margin_bottom_lg } else { Sides::bottom(pct(s.margin_md, 0.83)) },
        "margin__phone": if title { s.margin_bottom_md } else { s.margin_bottom_sm },
        "hover_text_color": if dark { &c.gray_100 } else { &c.primary },
    }))
}

fn text(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;
    let centered = matches!(cx.section, SectionKind::Cta | SectionKind::Hero);

    object(json!({
        "font_size": t.body.size,
        "font_size__tablet": t.small.size,
        "font_size__phone": t.small.size - 1,
        "font_family": "inherit",
        "font_weight": t.body.weight,
        "line_height": t.body.line_height,
        "letter_spacing": "normal",
        "text_color": if cx.in_dark_section() { &c.gray_200 } else { &c.text_light },
        "text_align": if centered { "center" } else { "left" },
        "text_align__tablet": "center",
        "text_align__phone": "center",
        "margin": s.margin_bottom_lg,
        "margin__tablet": s.margin_bottom_md,
        "margin__phone": Sides::bottom(pct(s.margin_md, 0.83)),
        "max_width": if centered { "700px" } else { "100%" },
    }))
}

fn button(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;
    let b = &cx.tokens.borders;
    let sh = &cx.tokens.shadows;
    let dark = cx.in_dark_section();

    let hover_background = if dark {
        c.gray_100.clone()
    } else {
        adjust_color(&c.primary, -15)
    };

    object(json!({
        "background_color": if dark { &c.white } else { &c.primary },
        "text_color": if dark { &c.dark } else { &c.white },
        "font_size": t.button.size,
        "font_size__tablet": t.button.size_tablet,
        "font_size__phone": t.button.size_phone,
        "font_weight": t.button.weight,
        "font_family": "inherit",
        "text_transform": "none",
        "letter_spacing": t.button.letter_spacing,
        "padding": s.button_padding,
        "padding__tablet": s.button_padding_tablet,
        "padding__phone": s.button_padding_phone,
        "border_radius": b.radius_small,
        "border_width": b.width_zero,
        "border_color": "transparent",
        "border_style": "solid",
        "box_shadow": sh.button,
        "hover_background_color": hover_background,
        "hover_text_color": if dark { &c.dark } else { &c.white },
        "hover_box_shadow": sh.button_hover,
        "hover_border_color": "transparent",
        "transition_duration": t.motion.transition_normal,
        "align": if matches!(cx.section, SectionKind::Cta) { "center" } else { "left" },
        "align__tablet": "center",
        "align__phone": "center",
        "display": "inline-block",
        "margin": Sides::new(pct(s.margin_sm, 0.66), 0, 0, 0),
    }))
}

fn image(cx: &ModuleContext<'_>) -> Attrs {
    let b = &cx.tokens.borders;
    let sh = &cx.tokens.shadows;
    let hero = cx.in_hero();

    object(json!({
        "align": "center",
        "width": "auto",
        "max_width": "100%",
        "height": "auto",
        "border_radius": if hero { b.radius_large } else { b.radius_medium },
        "box_shadow": if hero { &sh.hero_image } else { &sh.card },
        "hover_box_shadow": sh.elevated,
        "hover_transform": "translateY(-4px)",
        "transition_duration": cx.tokens.typography.motion.transition_normal,
        "object_fit": "cover",
        "link_url": "",
        "link_target": "_self",
    }))
}

fn divider(cx: &ModuleContext<'_>) -> Attrs {
    let s = &cx.tokens.spacing;
    object(json!({
        "divider_style": "solid",
        "divider_weight": cx.tokens.borders.width,
        "divider_color": cx.tokens.colors.gray_200,
        "height": "auto",
        "max_width": "100%",
        "align": "center",
        "margin": s.margin_bottom_lg,
        "margin__tablet": s.margin_bottom_md,
        "margin__phone": Sides::bottom(pct(s.margin_md, 0.83)),
    }))
}

fn icon(cx: &ModuleContext<'_>) -> Attrs {
    let c = &cx.tokens.colors;
    let icon = &cx.tokens.typography.icon;
    let hover = adjust_color(&c.primary, -15);
    object(json!({
        "icon_color": c.primary,
        "icon_size": icon.size_xl,
        "icon_size__tablet": icon.size_xl_tablet,
        "icon_size__phone": icon.size_xl_phone,
        "icon_style": "none",
        "icon_bg_color": c.primary,
        "icon_padding": cx.tokens.spacing.margin_sm,
        "icon_border_radius": "50%",
        "hover_icon_color": hover,
        "hover_icon_bg_color": hover,
        "hover_transform": "scale(1.1)",
        "align": "center",
        "margin": cx.tokens.spacing.margin_bottom_sm,
        "transition_duration": cx.tokens.typography.motion.transition_normal,
    }))
}

fn code(cx: &ModuleContext<'_>) -> Attrs {
    let c = &cx.tokens.colors;
    let t = &cx.tokens.typography;
    object(json!({
        "background_color": c.code_bg,
        "text_color": c.code_text,
        "font_size": t.code_size,
        "font_family": t.code_family,
        "padding": cx.tokens.spacing.card_padding,
        "border_radius": cx.tokens.borders.radius_medium,
        "line_numbers": true,
        "line_number_color": c.text_light,
    }))
}

fn blurb(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;
    let b = &cx.tokens.borders;
    let sh = &cx.tokens.shadows;

    object(json!({
        "use_icon": true,
        "icon_color": c.primary,
        "icon_font_size": t.icon.size_xl,
        "icon_font_size__tablet": t.icon.size_xl_tablet,
        "icon_font_size__phone": t.icon.size_xl_phone,
        "icon_placement": "top",
        "title_font_size": t.h4.size,
        "title_font_size__tablet": t.h4.size_tablet,
        "title_font_size__phone": t.h4.size_phone,
        "title_font_weight": t.h4.weight,
        "title_font_family": "inherit",
        "title_color": c.text,
        "title_line_height": t.h4.line_height,
        "title_margin": Sides::symmetric(s.margin_sm, 0),
        "content_font_size": t.content.size,
        "content_font_size__tablet": t.content.size_tablet,
        "content_font_size__phone": t.content.size_phone,
        "content_color": c.text_light,
        "content_line_height": t.content.line_height,
        "text_orientation": "center",
        "padding": s.card_padding,
        "padding__tablet": s.card_padding_tablet,
        "padding__phone": s.card_padding_phone,
        "background_color": c.white,
        "border_radius": b.radius_medium,
        "border_width": b.width_zero,
        "border_color": "transparent",
        "box_shadow": sh.card,
        "hover_box_shadow": sh.elevated,
        "hover_background_color": c.white,
        "hover_transform": "translateY(-4px)",
        "hover_icon_color": adjust_color(&c.primary, -10),
        "transition_duration": t.motion.transition_normal,
    }))
}

fn number_counter(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;

    object(json!({
        "number_font_size": t.counter.size,
        "number_font_size__tablet": t.counter.size_tablet,
        "number_font_size__phone": t.counter.size_phone,
        "number_font_weight": t.counter.weight,
        "number_font_family": "inherit",
        "number_color": if cx.in_dark_section() { &c.white } else { &c.primary },
        "number_line_height": t.counter.line_height,
        "title_font_size": t.content.size,
        "title_font_size__tablet": t.content.size_tablet,
        "title_font_size__phone": t.content.size_phone,
        "title_font_weight": t.weights.label,
        "title_color": if cx.in_dark_section() { &c.gray_200 } else { &c.text_light },
        "title_line_height": t.h4.line_height,
        "title_margin": Sides::new(pct(s.margin_sm, 0.66), 0, 0, 0),
        "text_orientation": "center",
        "prefix_font_size": pct(t.counter.size, 0.66),
        "suffix_font_size": pct(t.counter.size, 0.66),
        "animation_duration": t.motion.animation_duration,
        "animation_delay": 0,
        "background_color": "transparent",
        "padding": s.compact_padding,
        "border_radius": cx.tokens.borders.radius_small,
    }))
}

fn circle_counter(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;

    object(json!({
        "circle_size": pct(s.margin_xl, 3.33),
        "circle_size__tablet": pct(s.margin_xl, 2.92),
        "circle_size__phone": pct(s.margin_xl, 2.5),
        "stroke_width": pct(s.margin_sm, 0.83),
        "bar_bg_color": c.gray_200,
        "circle_color": c.primary,
        "circle_bg_color": "transparent",
        "number_font_size": pct(t.counter.size, 0.75),
        "number_font_size__tablet": pct(t.counter.size_tablet, 0.8),
        "number_font_size__phone": pct(t.counter.size_phone, 0.875),
        "number_font_weight": t.counter.weight,
        "number_color": c.text,
        "show_percent_sign": true,
        "title_font_size": t.content.size,
        "title_font_size__tablet": t.content.size_tablet,
        "title_font_size__phone": t.content.size_phone,
        "title_font_weight": t.weights.label,
        "title_color": c.text_light,
        "title_margin": Sides::new(s.margin_sm, 0, 0, 0),
        "animation_duration": t.motion.animation_duration_short,
        "animation_delay": 0,
        "text_orientation": "center",
    }))
}

fn bar_counter(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;
    object(json!({
        "bar_bg_color": c.gray_200,
        "bar_color": c.primary,
        "bar_height": s.margin_sm,
        "bar_border_radius": pct(s.margin_sm, 0.5),
        "title_font_size": t.small.size,
        "title_color": c.text,
        "percent_font_size": t.small.size,
        "percent_color": c.text_light,
    }))
}

fn testimonial(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;
    let b = &cx.tokens.borders;
    let sh = &cx.tokens.shadows;

    object(json!({
        "quote_icon": "on",
        "quote_icon_color": c.primary,
        "text_orientation": "left",
        "background_color": c.white,
        "padding": s.card_padding,
        "padding__tablet": s.card_padding_tablet,
        "padding__phone": s.card_padding_phone,
        "border_radius": b.radius_large,
        "border_width": b.width_zero,
        "border_color": "transparent",
        "box_shadow": sh.card,
        "content_font_size": t.content.size,
        "content_font_size__tablet": t.content.size_tablet,
        "content_font_size__phone": t.content.size_phone,
        "content_color": c.text,
        "content_line_height": t.body.line_height,
        "content_font_style": "italic",
        "content_margin": Sides::bottom(pct(s.margin_md, 0.83)),
        "author_font_size": t.content.size,
        "author_font_weight": t.weights.title,
        "author_color": c.text,
        "position_font_size": t.content.size_phone,
        "position_color": c.text_light,
        "portrait_width": pct(s.margin_xl, 1.25),
        "portrait_border_radius": "50%",
        "hover_box_shadow": sh.elevated,
        "hover_transform": "translateY(-2px)",
        "transition_duration": t.motion.transition_normal,
    }))
}

fn pricing_table(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;
    let b = &cx.tokens.borders;
    let sh = &cx.tokens.shadows;

    object(json!({
        "header_bg_color": c.primary,
        "header_text_color": c.white,
        "header_padding": s.compact_padding,
        "title_font_size": t.h4.size,
        "title_font_weight": t.h4.weight,
        "price_color": c.text,
        "price_font_size": t.counter.size,
        "price_font_size__tablet": t.counter.size_tablet,
        "price_font_size__phone": t.counter.size_phone,
        "price_font_weight": t.counter.weight,
        "currency_font_size": pct(t.counter.size, 0.5),
        "period_font_size": t.content.size,
        "period_color": c.text_light,
        "features_color": c.text_light,
        "features_font_size": t.content.size_tablet,
        "features_line_height": "2",
        "feature_icon_color": c.primary,
        "button_bg_color": c.primary,
        "button_text_color": c.white,
        "button_font_size": t.button.size,
        "button_font_weight": t.button.weight,
        "button_padding": s.button_padding,
        "button_border_radius": b.radius_small,
        "button_hover_bg_color": adjust_color(&c.primary, -15),
        "background_color": c.white,
        "border_radius": b.radius_medium,
        "border_width": b.width_zero,
        "border_color": c.gray_200,
        "box_shadow": sh.card,
        "padding": Sides::bottom(s.margin_lg),
        "featured": false,
        "badge_text": "Popular",
        "badge_bg_color": c.secondary,
        "badge_text_color": c.white,
        "hover_box_shadow": sh.elevated,
        "hover_transform": "translateY(-4px)",
        "transition_duration": t.motion.transition_normal,
    }))
}

fn team_member(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;
    let b = &cx.tokens.borders;
    let sh = &cx.tokens.shadows;
    let photo = pct(s.margin_xl, 2.5);

    object(json!({
        "text_orientation": "center",
        "header_level": "h4",
        "name_font_size": t.name.size,
        "name_font_size__tablet": t.name.size_tablet,
        "name_font_size__phone": t.name.size_phone,
        "name_font_weight": t.name.weight,
        "name_color": c.text,
        "name_line_height": t.name.line_height,
        "name_margin": Sides::new(s.margin_sm, 0, pct(s.margin_sm, 0.33), 0),
        "position_font_size": t.subtitle.size,
        "position_font_size__tablet": t.subtitle.size_tablet,
        "position_color": c.text_light,
        "position_font_weight": t.subtitle.weight,
        "content_font_size": t.subtitle.size,
        "content_color": c.text_light,
        "content_margin": Sides::symmetric(s.margin_sm, 0),
        "image_width": photo,
        "image_height": photo,
        "image_border_radius": "50%",
        "image_box_shadow": sh.card,
        "social_icon_size": t.name.size,
        "social_icon_color": c.text_light,
        "social_icon_hover_color": c.primary,
        "social_icon_spacing": s.margin_sm,
        "background_color": c.white,
        "padding": s.card_padding,
        "padding__tablet": s.card_padding_tablet,
        "padding__phone": s.card_padding_phone,
        "border_radius": b.radius_medium,
        "border_width": b.width_zero,
        "border_color": "transparent",
        "box_shadow": sh.card,
        "hover_box_shadow": sh.elevated,
        "hover_transform": "translateY(-4px)",
        "transition_duration": t.motion.transition_normal,
    }))
}

/// The call-to-action block module (distinct from a `cta` section).
fn cta(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;
    let b = &cx.tokens.borders;
    let sh = &cx.tokens.shadows;

    object(json!({
        "header_level": "h3",
        "text_orientation": "center",
        "background_color": c.primary,
        "background_type": "color",
        "title_font_size": t.h3.size,
        "title_font_size__tablet": t.h3.size_tablet,
        "title_font_size__phone": t.h3.size_phone,
        "title_font_weight": t.h3.weight,
        "title_color": c.white,
        "title_line_height": t.h3.line_height,
        "title_margin": s.margin_bottom_sm,
        "content_font_size": t.body.size,
        "content_font_size__tablet": t.content.size,
        "content_font_size__phone": t.content.size_tablet,
        "content_color": c.gray_200,
        "content_line_height": t.content.line_height,
        "content_max_width": "600px",
        "content_margin": s.margin_bottom_md,
        "button_background_color": c.white,
        "button_text_color": c.primary,
        "button_font_size": t.button.size,
        "button_font_weight": t.button.weight,
        "button_padding": s.button_padding,
        "button_border_radius": b.radius_small,
        "button_hover_background_color": c.gray_100,
        "button_hover_text_color": c.primary,
        "button_box_shadow": sh.card,
        "padding": s.cta_padding,
        "padding__tablet": s.cta_padding_tablet,
        "padding__phone": s.cta_padding_phone,
        "border_radius": b.radius_medium,
        "box_shadow": sh.elevated,
        "max_width": "800px",
    }))
}

fn accordion(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;
    let b = &cx.tokens.borders;

    object(json!({
        "icon_color": c.primary,
        "icon_size": t.icon.size,
        "icon_position": "right",
        "open_title_color": c.primary,
        "open_header_bg": c.gray_50,
        "open_icon_color": c.primary,
        "closed_title_color": c.text,
        "closed_header_bg": c.white,
        "title_font_size": t.content.size,
        "title_font_size__tablet": t.content.size_tablet,
        "title_font_size__phone": t.content.size_phone,
        "title_font_weight": t.weights.title,
        "title_line_height": t.h4.line_height,
        "header_padding": s.compact_padding,
        "header_padding__tablet": s.compact_padding_tablet,
        "header_padding__phone": s.compact_padding_phone,
        "content_bg": c.white,
        "content_color": c.text_light,
        "content_font_size": t.content.size_tablet,
        "content_line_height": t.body.line_height,
        "content_padding": s.compact_padding,
        "content_padding__tablet": s.compact_padding_tablet,
        "content_padding__phone": s.compact_padding_phone,
        "border_color": c.gray_200,
        "border_width": b.width,
        "border_radius": b.radius_small,
        "item_margin": s.margin_bottom_sm,
        "transition_duration": t.motion.transition_normal,
    }))
}

fn accordion_item(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    object(json!({
        "title_font_size": t.body.size,
        "title_font_weight": t.weights.title,
        "title_color": c.text,
        "content_color": c.text_light,
        "open": false,
    }))
}

fn toggle(cx: &ModuleContext<'_>) -> Attrs {
    let c = &cx.tokens.colors;
    object(json!({
        "icon_color": c.primary,
        "open_title_color": c.primary,
        "open_header_bg": c.light_bg,
        "closed_title_color": c.text,
        "closed_header_bg": c.white,
        "title_font_size": cx.tokens.typography.body.size,
        "title_font_weight": cx.tokens.typography.weights.semibold,
    }))
}

fn tabs(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;
    let sm = s.margin_sm;
    let md = s.margin_md;

    object(json!({
        "active_tab_bg": c.primary,
        "active_tab_color": c.white,
        "active_tab_font_weight": t.weights.title,
        "inactive_tab_bg": c.gray_100,
        "inactive_tab_color": c.text,
        "inactive_tab_font_weight": t.weights.label,
        "hover_tab_bg": c.gray_200,
        "hover_tab_color": c.text,
        "tab_font_size": t.content.size,
        "tab_font_size__tablet": t.content.size_tablet,
        "tab_font_size__phone": t.content.size_phone,
        "tab_padding": Sides::symmetric(sm, md),
        "tab_padding__tablet": Sides::symmetric(pct(sm, 0.83), pct(md, 0.83)),
        "tab_padding__phone": Sides::symmetric(pct(sm, 0.83), sm),
        "tab_border_radius": cx.tokens.borders.radius_small,
        "content_bg": c.white,
        "content_color": c.text,
        "content_font_size": t.content.size_tablet,
        "content_padding": s.compact_padding,
        "content_padding__tablet": s.compact_padding_tablet,
        "content_padding__phone": s.compact_padding_phone,
        "border_color": c.gray_200,
        "border_width": cx.tokens.borders.width,
        "transition_duration": t.motion.transition_normal,
    }))
}

fn contact_form(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;
    let b = &cx.tokens.borders;

    object(json!({
        "input_bg_color": c.white,
        "input_text_color": c.text,
        "input_placeholder_color": c.gray_400,
        "input_border_color": c.gray_300,
        "input_border_width": b.width,
        "input_border_radius": b.radius_small.top_left,
        "input_font_size": t.content.size,
        "input_font_size__tablet": t.content.size_tablet,
        "input_font_size__phone": t.content.size_phone,
        "input_padding": Sides::all(s.margin_sm),
        "input_margin": s.margin_bottom_sm,
        "input_focus_border_color": c.primary,
        "input_focus_box_shadow": cx.tokens.shadows.input_focus,
        "label_color": c.text,
        "label_font_size": t.subtitle.size,
        "label_font_weight": t.weights.label,
        "label_margin": Sides::bottom(pct(s.margin_sm, 0.5)),
        "submit_bg_color": c.primary,
        "submit_text_color": c.white,
        "submit_font_size": t.button.size,
        "submit_font_weight": t.button.weight,
        "submit_border_radius": b.radius_small.top_left,
        "submit_padding": s.button_padding,
        "submit_hover_bg_color": adjust_color(&c.primary, -15),
        "submit_margin": Sides::new(pct(s.margin_sm, 0.66), 0, 0, 0),
        "field_spacing": s.margin_sm,
        "form_max_width": "600px",
        "success_color": c.success,
        "error_color": c.error,
        "transition_duration": t.motion.transition_fast,
    }))
}

fn countdown(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;
    let md = s.margin_md;

    object(json!({
        "show_labels": true,
        "show_days": true,
        "show_hours": true,
        "show_minutes": true,
        "show_seconds": true,
        "number_font_size": t.counter.size,
        "number_font_size__tablet": t.counter.size_tablet,
        "number_font_size__phone": t.counter.size_phone,
        "number_font_weight": t.counter.weight,
        "number_color": c.text,
        "label_font_size": t.subtitle.size,
        "label_font_size__tablet": t.subtitle.size_tablet,
        "label_font_size__phone": s.margin_sm,
        "label_font_weight": t.weights.label,
        "label_color": c.text_light,
        "label_text_transform": "uppercase",
        "label_letter_spacing": "0.05em",
        "separator_color": c.primary,
        "separator_size": pct(s.margin_sm, 0.66),
        "show_separator": true,
        "unit_bg_color": c.gray_100,
        "unit_padding": Sides::symmetric(pct(md, 0.83), md),
        "unit_border_radius": cx.tokens.borders.radius_medium,
        "unit_box_shadow": cx.tokens.shadows.card,
        "unit_gap": s.margin_sm,
        "unit_gap__tablet": s.margin_sm,
        "unit_gap__phone": pct(s.margin_sm, 0.66),
        "text_orientation": "center",
        "expired_message": "Event has started!",
    }))
}

fn gallery(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;

    object(json!({
        "layout": "grid",
        "columns": 3,
        "columns__tablet": 2,
        "columns__phone": 1,
        "gutter": pct(s.margin_md, 0.83),
        "gutter__tablet": s.margin_sm,
        "gutter__phone": s.margin_sm,
        "image_border_radius": cx.tokens.borders.radius_small.top_left,
        "image_aspect_ratio": "1:1",
        "image_object_fit": "cover",
        "overlay_color": "rgba(0,0,0,0.4)",
        "overlay_hover_color": "rgba(0,0,0,0.6)",
        "show_overlay_on_hover": true,
        "title_font_size": t.content.size,
        "title_font_size__tablet": t.content.size_tablet,
        "title_font_size__phone": t.content.size_phone,
        "title_font_weight": t.weights.title,
        "title_color": c.white,
        "caption_font_size": t.subtitle.size,
        "caption_color": c.gray_200,
        "enable_lightbox": true,
        "lightbox_bg_color": "rgba(0,0,0,0.9)",
        "hover_transform": "scale(1.05)",
        "hover_box_shadow": cx.tokens.shadows.elevated,
        "transition_duration": t.motion.transition_normal,
    }))
}

fn video(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    object(json!({
        "autoplay": false,
        "loop": false,
        "muted": false,
        "controls": true,
        "play_icon_color": c.white,
        "play_icon_size": pct(t.counter.size, 1.33),
        "play_icon_size__tablet": pct(t.counter.size_tablet, 1.4),
        "play_icon_size__phone": t.counter.size_phone,
        "play_icon_bg_color": "rgba(0,0,0,0.6)",
        "play_icon_hover_bg_color": c.primary,
        "play_icon_border_radius": "50%",
        "overlay_color": "rgba(0,0,0,0.3)",
        "border_radius": cx.tokens.borders.radius_medium,
        "box_shadow": cx.tokens.shadows.card,
        "aspect_ratio": "16:9",
        "max_width": "100%",
        "transition_duration": t.motion.transition_normal,
    }))
}

fn slider(cx: &ModuleContext<'_>) -> Attrs {
    let t = &cx.tokens.typography;
    let c = &cx.tokens.colors;
    let s = &cx.tokens.spacing;
    object(json!({
        "autoplay": true,
        "autoplay_speed": t.motion.slider_autoplay,
        "loop": true,
        "pause_on_hover": true,
        "arrows": true,
        "arrow_color": c.text,
        "arrow_bg_color": "rgba(255,255,255,0.9)",
        "arrow_hover_bg_color": c.white,
        "arrow_size": pct(s.margin_xl, 0.83),
        "arrow_border_radius": "50%",
        "dots": true,
        "dot_color": c.text_light,
        "dot_active_color": c.primary,
        "dot_size": pct(s.margin_sm, 0.83),
        "dot_spacing": pct(s.margin_sm, 0.66),
        "transition_type": "slide",
        "transition_speed": t.motion.slider_transition,
        "border_radius": cx.tokens.borders.radius_medium,
        "overflow": "hidden",
    }))
}

fn audio(cx: &ModuleContext<'_>) -> Attrs {
    let c = &cx.tokens.colors;
    object(json!({
        "player_bg": c.light_bg,
        "player_color": c.primary,
        "progress_color": c.primary,
        "progress_bg": c.gray_200,
        "border_radius": cx.tokens.borders.radius_medium,
    }))
}

fn map(cx: &ModuleContext<'_>) -> Attrs {
    let xl = cx.tokens.spacing.margin_xl;
    object(json!({
        "zoom": 14,
        "height": pct(xl, 8.33),
        "height__tablet": pct(xl, 7.3),
        "height__phone": pct(xl, 6.25),
        "border_radius": cx.tokens.borders.radius_medium,
        "box_shadow": cx.tokens.shadows.card,
        "marker_color": cx.tokens.colors.primary,
        "show_zoom_controls": true,
        "draggable": true,
        "map_type": "roadmap",
        "grayscale": false,
        "max_width": "100%",
    }))
}

fn social_follow(cx: &ModuleContext<'_>) -> Attrs {
    let icon = &cx.tokens.typography.icon;
    let c = &cx.tokens.colors;
    let sm = cx.tokens.spacing.margin_sm;
    object(json!({
        "icon_color": c.text,
        "icon_hover_color": c.primary,
        "icon_size": icon.size_large,
        "icon_size__tablet": pct(icon.size_large, 0.92),
        "icon_size__phone": icon.size,
        "icon_bg_color": "transparent",
        "icon_hover_bg_color": "transparent",
        "icon_padding": pct(sm, 0.66),
        "icon_border_radius": "50%",
        "icon_spacing": sm,
        "icon_spacing__tablet": sm,
        "icon_spacing__phone": pct(sm, 0.83),
        "icon_style": "simple",
        "align": "left",
        "transition_duration": cx.tokens.typography.motion.transition_fast,
    }))
}

fn site_logo(cx: &ModuleContext<'_>) -> Attrs {
    let xl = cx.tokens.spacing.margin_xl;
    object(json!({
        "width": pct(xl, 3.125),
        "width__tablet": pct(xl, 2.5),
        "width__phone": pct(xl, 2.08),
    }))
}

fn menu(cx: &ModuleContext<'_>) -> Attrs {
    let c = &cx.tokens.colors;
    object(json!({
        "font_size": cx.tokens.typography.small.size,
        "font_weight": cx.tokens.typography.weights.label,
        "link_color": c.text,
        "link_hover_color": c.primary,
        "link_active_color": c.primary,
        "dropdown_bg": c.white,
        "dropdown_link_color": c.text,
        "dropdown_hover_bg": c.light_bg,
        "mobile_bg": c.white,
        "hamburger_color": c.text,
    }))
}

fn header_button(cx: &ModuleContext<'_>) -> Attrs {
    let c = &cx.tokens.colors;
    let compact = cx.tokens.spacing.compact_padding;
    object(json!({
        "background_color": c.primary,
        "text_color": c.white,
        "font_size": cx.tokens.typography.body.size - 2,
        "font_weight": cx.tokens.typography.weights.title,
        "padding": Sides::symmetric(pct(compact.top, 0.6), pct(compact.right, 0.8)),
        "border_radius": cx.tokens.borders.radius_small,
        "hover_background_color": adjust_color(&c.primary, -15),
    }))
}

fn copyright(cx: &ModuleContext<'_>) -> Attrs {
    let c = &cx.tokens.colors;
    object(json!({
        "font_size": cx.tokens.typography.body.size - 4,
        "text_color": c.text_light,
        "link_color": c.primary,
        "text_align": "center",
    }))
}

fn footer_menu(cx: &ModuleContext<'_>) -> Attrs {
    let c = &cx.tokens.colors;
    object(json!({
        "font_size": cx.tokens.typography.body.size - 2,
        "link_color": c.text_light,
        "link_hover_color": c.primary,
        "separator": "|",
    }))
}

fn footer_info(cx: &ModuleContext<'_>) -> Attrs {
    let c = &cx.tokens.colors;
    object(json!({
        "title_font_size": cx.tokens.typography.h3.size,
        "title_color": c.text,
        "text_font_size": cx.tokens.typography.body.size - 2,
        "text_color": c.text_light,
        "link_color": c.primary,
    }))
}
