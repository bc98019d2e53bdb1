//! Structure synthesis: section plans → section/row/column/module skeletons.
//!
//! A plan with an explicit column specification is mirrored as one row.
//! Otherwise the section kind selects a fixed template. Every node gets an
//! id from the caller's [`IdAllocator`] as soon as it is created.

use pagewright_core::document::repair_row;
use pagewright_core::{ColumnPlan, ColumnWidth, IdAllocator, LayoutNode, SectionKind, SectionPlan};
use tracing::debug;

/// Role given to the heading of a section's title row.
pub const SECTION_TITLE_ROLE: &str = "section_title";

/// Role given to process-step cards.
pub const STEP_ROLE: &str = "step";

/// Column widths for a named layout preset. Unknown names are full width.
pub fn layout_preset(name: &str) -> Vec<ColumnWidth> {
    use ColumnWidth::*;
    match name.trim().to_ascii_lowercase().as_str() {
        "split-left" => vec![ThreeFifths, TwoFifths],
        "split-right" => vec![TwoFifths, ThreeFifths],
        "grid-2" => vec![Half, Half],
        "grid-3" => vec![Third, Third, Third],
        "grid-4" => vec![Quarter, Quarter, Quarter, Quarter],
        "asymmetric" => vec![TwoThirds, Third],
        _ => vec![Full],
    }
}

/// Build the section skeletons for an outline, in plan order.
pub fn synthesize(plans: &[SectionPlan], ids: &mut IdAllocator) -> Vec<LayoutNode> {
    let sections: Vec<LayoutNode> = plans.iter().map(|plan| synthesize_section(plan, ids)).collect();
    debug!(sections = sections.len(), ids = ids.issued(), "Structure synthesized");
    sections
}

/// Build one section from its plan.
pub fn synthesize_section(plan: &SectionPlan, ids: &mut IdAllocator) -> LayoutNode {
    let kind = plan.kind();
    let section_id = ids.next_section();
    let layout = plan.layout.as_deref().unwrap_or("centered");

    let mut rows = Vec::new();
    match plan.columns.as_deref() {
        Some(columns) if !columns.is_empty() => rows.push(explicit_row(columns, ids)),
        _ => {
            if kind.takes_title_row() && plan.headline.is_some() {
                rows.push(title_row(ids));
            }
            rows.push(template_row(&kind, layout, ids));
        }
    }

    let mut section = LayoutNode::section(section_id, kind)
        .with_background(plan.background.clone())
        .with_children(rows);
    if let Some(headline) = plan.headline.as_deref().filter(|h| !h.trim().is_empty()) {
        seed_headline(&mut section, headline);
    }
    section
}

/// Put the planned headline on the section's first heading.
fn seed_headline(section: &mut LayoutNode, headline: &str) {
    if let Some(heading) = section
        .modules_mut()
        .into_iter()
        .find(|m| m.module_type() == Some("heading"))
    {
        heading
            .attrs
            .entry("text")
            .or_insert_with(|| headline.into());
    }
}

/// One row mirroring a requested column specification.
fn explicit_row(columns: &[ColumnPlan], ids: &mut IdAllocator) -> LayoutNode {
    let row_id = ids.next_row();
    let widths: Vec<ColumnWidth> = columns.iter().map(|c| c.width).collect();
    let children = columns
        .iter()
        .map(|column| {
            let modules: Vec<&str> = column.modules.iter().map(String::as_str).collect();
            column_of(&modules, ids)
        })
        .collect();

    let mut row = LayoutNode::row(row_id, &widths).with_children(children);
    if repair_row(&mut row) {
        debug!(
            row = %row.id,
            columns = row.columns().unwrap_or_default(),
            "Requested columns did not fill the row; rebalanced"
        );
    }
    row
}

fn title_row(ids: &mut IdAllocator) -> LayoutNode {
    let row_id = ids.next_row();
    let col_id = ids.next_column();
    let heading = LayoutNode::module(ids.next_element(), "heading").with_role(SECTION_TITLE_ROLE);
    LayoutNode::row(row_id, &[ColumnWidth::Full])
        .with_children(vec![LayoutNode::column(col_id).with_children(vec![heading])])
}

fn column_of(modules: &[&str], ids: &mut IdAllocator) -> LayoutNode {
    let col_id = ids.next_column();
    let children = modules
        .iter()
        .map(|module_type| LayoutNode::module(ids.next_element(), module_type))
        .collect();
    LayoutNode::column(col_id).with_children(children)
}

/// `count` equal columns, each holding one module of `module_type`.
fn card_grid(count: usize, module_type: &str, role: Option<&str>, ids: &mut IdAllocator) -> LayoutNode {
    let row_id = ids.next_row();
    let widths = ColumnWidth::equal(count).unwrap_or_else(|| vec![ColumnWidth::Full]);
    let children = (0..widths.len())
        .map(|_| {
            let col_id = ids.next_column();
            let mut module = LayoutNode::module(ids.next_element(), module_type);
            if let Some(role) = role {
                module = module.with_role(role);
            }
            LayoutNode::column(col_id).with_children(vec![module])
        })
        .collect();
    LayoutNode::row(row_id, &widths).with_children(children)
}

fn row_of(widths: &[ColumnWidth], columns: &[&[&str]], ids: &mut IdAllocator) -> LayoutNode {
    let row_id = ids.next_row();
    let children = columns.iter().map(|modules| column_of(modules, ids)).collect();
    LayoutNode::row(row_id, widths).with_children(children)
}

/// The content row for a section kind.
fn template_row(kind: &SectionKind, layout: &str, ids: &mut IdAllocator) -> LayoutNode {
    use ColumnWidth::*;
    const TEXT_STACK: &[&str] = &["heading", "text", "button"];

    match kind {
        SectionKind::Hero => {
            let preset = layout_preset(layout);
            let widths = if preset.len() == 2 { preset } else { vec![Half, Half] };
            row_of(&widths, &[TEXT_STACK, &["image"]], ids)
        }
        SectionKind::Features => {
            let count = if layout.trim().eq_ignore_ascii_case("grid-4") { 4 } else { 3 };
            card_grid(count, "blurb", None, ids)
        }
        SectionKind::Stats => card_grid(4, "number_counter", None, ids),
        SectionKind::Testimonials => card_grid(3, "testimonial", None, ids),
        SectionKind::Cta => row_of(&[Full], &[TEXT_STACK], ids),
        SectionKind::Pricing => card_grid(3, "pricing_table", None, ids),
        SectionKind::Faq => row_of(&[Full], &[&["accordion"]], ids),
        SectionKind::Team => card_grid(4, "team_member", None, ids),
        SectionKind::About => row_of(&[TwoFifths, ThreeFifths], &[&["image"], TEXT_STACK], ids),
        SectionKind::Gallery => card_grid(3, "image", None, ids),
        SectionKind::Process => card_grid(4, "blurb", Some(STEP_ROLE), ids),
        SectionKind::Contact => row_of(&[Half, Half], &[&["heading", "text"], &["contact_form"]], ids),
        SectionKind::Other(_) => row_of(&[Full], &[&["text"]], ids),
    }
}

/// Site header: logo, menu and call-to-action button.
pub fn header_section(ids: &mut IdAllocator) -> LayoutNode {
    use ColumnWidth::*;
    let section_id = ids.next_section();
    let row = row_of(
        &[Quarter, Half, Quarter],
        &[&["site_logo"], &["menu"], &["header_button"]],
        ids,
    );
    LayoutNode::section(section_id, SectionKind::Other("header".into()))
        .with_background(Some("white".into()))
        .with_children(vec![row])
}

/// Site footer: three heading + text columns.
pub fn footer_section(ids: &mut IdAllocator) -> LayoutNode {
    use ColumnWidth::*;
    let section_id = ids.next_section();
    const BLOCK: &[&str] = &["heading", "text"];
    let row = row_of(&[Third, Third, Third], &[BLOCK, BLOCK, BLOCK], ids);
    LayoutNode::section(section_id, SectionKind::Other("footer".into()))
        .with_background(Some("dark".into()))
        .with_children(vec![row])
}
