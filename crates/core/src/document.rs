//! Documents — the serialized top level of a generated layout.
//!
//! A single page serializes as `{sections: [...]}`; the multi-page variant as
//! `{header, footer, pages: {name: {title, sections}}}`.

use crate::ids::{IdAllocator, assign_missing_ids};
use crate::node::{LayoutNode, NodeKind};
use crate::width::ColumnWidth;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Rows never hold more than this many columns after repair.
pub const MAX_COLUMNS: usize = 6;

/// A single-page layout document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub sections: Vec<LayoutNode>,
}

/// One page of a website.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<LayoutNode>,
}

/// A multi-page website with shared header and footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Website {
    pub header: Document,
    pub footer: Document,
    pub pages: BTreeMap<String, Page>,
}

/// A structural problem found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureIssue {
    MissingId { kind: String },
    DuplicateId { id: String },
    /// A row whose `columns` attribute disagrees with its children.
    RowMismatch {
        row_id: String,
        columns: String,
        children: usize,
    },
    /// A row child that is not a column.
    StrayRowChild { row_id: String, child_type: String },
}

impl std::fmt::Display for StructureIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingId { kind } => write!(f, "{kind} node without id"),
            Self::DuplicateId { id } => write!(f, "duplicate id '{id}'"),
            Self::RowMismatch {
                row_id,
                columns,
                children,
            } => write!(
                f,
                "row '{row_id}' declares columns '{columns}' but has {children} children"
            ),
            Self::StrayRowChild { row_id, child_type } => {
                write!(f, "row '{row_id}' holds a '{child_type}' node outside a column")
            }
        }
    }
}

/// What [`finalize`] had to fix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FinalizeReport {
    pub ids_assigned: usize,
    /// Ids of rows whose columns were rebalanced.
    pub rows_repaired: Vec<String>,
}

impl FinalizeReport {
    pub fn absorb(&mut self, other: FinalizeReport) {
        self.ids_assigned += other.ids_assigned;
        self.rows_repaired.extend(other.rows_repaired);
    }

    pub fn is_clean(&self) -> bool {
        self.ids_assigned == 0 && self.rows_repaired.is_empty()
    }
}

/// List every structural violation in a section list.
pub fn validate(sections: &[LayoutNode]) -> Vec<StructureIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for section in sections {
        section.walk(&mut |node| {
            if node.id.is_empty() {
                issues.push(StructureIssue::MissingId {
                    kind: node.kind.type_name().to_string(),
                });
            } else if !seen.insert(node.id.clone()) {
                issues.push(StructureIssue::DuplicateId {
                    id: node.id.clone(),
                });
            }

            if node.is_row() {
                for child in &node.children {
                    if child.kind != NodeKind::Column {
                        issues.push(StructureIssue::StrayRowChild {
                            row_id: node.id.clone(),
                            child_type: child.kind.type_name().to_string(),
                        });
                    }
                }
                if !row_is_consistent(node) {
                    issues.push(StructureIssue::RowMismatch {
                        row_id: node.id.clone(),
                        columns: node.columns().unwrap_or_default().to_string(),
                        children: node.children.len(),
                    });
                }
            }
        });
    }
    issues
}

/// Repair rows, then assign any missing or duplicate ids.
pub fn finalize(sections: &mut [LayoutNode], allocator: &mut IdAllocator) -> FinalizeReport {
    let mut rows_repaired = Vec::new();
    for section in sections.iter_mut() {
        section.walk_mut(&mut |node| {
            if node.is_row() && repair_row(node) {
                rows_repaired.push(node.id.clone());
            }
        });
    }

    let ids_assigned = assign_missing_ids(sections, allocator);
    if ids_assigned > 0 || !rows_repaired.is_empty() {
        tracing::debug!(
            ids_assigned,
            rows_repaired = rows_repaired.len(),
            "Finalized layout tree"
        );
    }
    FinalizeReport {
        ids_assigned,
        rows_repaired,
    }
}

fn row_is_consistent(row: &LayoutNode) -> bool {
    let widths = row.column_widths();
    widths.len() == row.children.len() && ColumnWidth::fills_row(&widths)
}

/// Bring a row back in line with its `columns` attribute.
///
/// Stray children are wrapped in columns, columns past the sixth are folded
/// into the sixth, an empty row gets one empty column, and inconsistent widths
/// become equal widths. Returns whether anything changed.
pub fn repair_row(row: &mut LayoutNode) -> bool {
    let mut changed = false;

    if row.children.iter().any(|c| c.kind != NodeKind::Column) {
        row.children = std::mem::take(&mut row.children)
            .into_iter()
            .map(|child| {
                if child.kind == NodeKind::Column {
                    child
                } else {
                    LayoutNode::column("").with_children(vec![child])
                }
            })
            .collect();
        changed = true;
    }

    if row.children.len() > MAX_COLUMNS {
        let overflow: Vec<LayoutNode> = row.children.drain(MAX_COLUMNS..).collect();
        if let Some(last) = row.children.last_mut() {
            for column in overflow {
                last.children.extend(column.children);
            }
        }
        changed = true;
    }

    if row.children.is_empty() {
        row.children.push(LayoutNode::column(""));
        changed = true;
    }

    if changed || !row_is_consistent(row) {
        if let Some(widths) = ColumnWidth::equal(row.children.len()) {
            row.set_column_widths(&widths);
        }
        return true;
    }
    false
}

impl Document {
    pub fn new(sections: Vec<LayoutNode>) -> Self {
        Self { sections }
    }

    pub fn validate(&self) -> Vec<StructureIssue> {
        validate(&self.sections)
    }

    pub fn finalize(&mut self, allocator: &mut IdAllocator) -> FinalizeReport {
        finalize(&mut self.sections, allocator)
    }

    pub fn module_count(&self) -> usize {
        self.sections.iter().map(|s| s.modules().len()).sum()
    }
}

impl Website {
    /// Finalize header, footer and every page, each with its own id scope.
    pub fn finalize(&mut self) -> FinalizeReport {
        let mut report = self.header.finalize(&mut IdAllocator::scoped("header"));
        report.absorb(self.footer.finalize(&mut IdAllocator::scoped("footer")));
        for (slug, page) in self.pages.iter_mut() {
            report.absorb(finalize(
                &mut page.sections,
                &mut IdAllocator::scoped(format!("{slug}_fix")),
            ));
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionKind;
    use serde_json::json;

    fn row_with(columns: &str, children: usize) -> LayoutNode {
        let mut row = LayoutNode::row("row_x", &[]);
        row.attrs.insert("columns".into(), json!(columns));
        row.children = (0..children)
            .map(|i| LayoutNode::column(format!("col_{i}")))
            .collect();
        row
    }

    #[test]
    fn consistent_asymmetric_row_is_untouched() {
        let mut row = row_with("2_5,3_5", 2);
        assert!(!repair_row(&mut row));
        assert_eq!(row.columns(), Some("2_5,3_5"));
    }

    #[test]
    fn mismatched_row_becomes_equal_widths() {
        let mut row = row_with("1_2,1_2", 3);
        assert!(repair_row(&mut row));
        assert_eq!(row.columns(), Some("1_3,1_3,1_3"));
    }

    #[test]
    fn overflowing_columns_fold_into_the_last() {
        let mut row = row_with("1", 8);
        for (i, column) in row.children.iter_mut().enumerate() {
            column.children.push(LayoutNode::module(format!("el_{i}"), "text"));
        }
        assert!(repair_row(&mut row));
        assert_eq!(row.children.len(), MAX_COLUMNS);
        assert_eq!(row.children[5].children.len(), 3);
        assert_eq!(row.columns(), Some("1_6,1_6,1_6,1_6,1_6,1_6"));
    }

    #[test]
    fn stray_modules_are_wrapped_in_columns() {
        let mut row = LayoutNode::row("row_1", &[ColumnWidth::Full]);
        row.children.push(LayoutNode::module("el_1", "text"));
        assert!(repair_row(&mut row));
        assert_eq!(row.children[0].kind, NodeKind::Column);
        assert_eq!(row.children[0].children[0].id, "el_1");
    }

    #[test]
    fn finalize_leaves_a_valid_document() {
        let mut doc = Document::new(vec![
            LayoutNode::section("", SectionKind::Stats)
                .with_children(vec![row_with("1_4,1_4", 0), row_with("1_2", 1)]),
        ]);
        assert!(!doc.validate().is_empty());

        let report = doc.finalize(&mut IdAllocator::new());
        assert!(doc.validate().is_empty(), "{:?}", doc.validate());
        assert_eq!(report.rows_repaired.len(), 2);
        assert!(report.ids_assigned >= 2);
    }

    #[test]
    fn website_serializes_with_pages_map() {
        let mut site = Website::default();
        site.pages.insert(
            "home".into(),
            Page {
                title: "Home".into(),
                sections: vec![],
            },
        );
        let value = serde_json::to_value(&site).unwrap();
        assert_eq!(value["pages"]["home"]["title"], "Home");
        assert_eq!(value["header"]["sections"], json!([]));
    }
}
