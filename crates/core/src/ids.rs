//! Node identifier allocation.
//!
//! Ids are drawn from an explicit [`IdAllocator`] threaded through synthesis,
//! so concurrent runs never share counter state.

use crate::node::{LayoutNode, NodeKind};
use std::collections::HashSet;

/// Sequential id source: `section_1`, `row_2`, `col_3`, `el_4`, ...
///
/// A single counter is shared by all node kinds, so ids stay unique even
/// across kinds. Scoped allocators prefix every id (`about_section_1`),
/// which keeps pages of a website from colliding.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    prefix: Option<String>,
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scoped(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            next: 0,
        }
    }

    pub fn next_section(&mut self) -> String {
        self.allocate("section")
    }

    pub fn next_row(&mut self) -> String {
        self.allocate("row")
    }

    pub fn next_column(&mut self) -> String {
        self.allocate("col")
    }

    pub fn next_element(&mut self) -> String {
        self.allocate("el")
    }

    /// Next id appropriate for the given node kind.
    pub fn next_for(&mut self, kind: &NodeKind) -> String {
        match kind {
            NodeKind::Section => self.next_section(),
            NodeKind::Row => self.next_row(),
            NodeKind::Column => self.next_column(),
            NodeKind::Module(_) => self.next_element(),
        }
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.next
    }

    fn allocate(&mut self, kind: &str) -> String {
        self.next += 1;
        match &self.prefix {
            Some(prefix) => format!("{prefix}_{kind}_{}", self.next),
            None => format!("{kind}_{}", self.next),
        }
    }
}

/// Give every node with an empty or duplicate id a fresh one.
///
/// The first occurrence of a duplicated id keeps it. Fresh ids never collide
/// with ids already present in the tree. Returns the number of ids assigned.
pub fn assign_missing_ids(sections: &mut [LayoutNode], allocator: &mut IdAllocator) -> usize {
    let mut taken = HashSet::new();
    for section in sections.iter() {
        section.walk(&mut |node| {
            if !node.id.is_empty() {
                taken.insert(node.id.clone());
            }
        });
    }

    let mut seen = HashSet::new();
    let mut assigned = 0;
    for section in sections.iter_mut() {
        section.walk_mut(&mut |node| {
            if node.id.is_empty() || seen.contains(&node.id) {
                let mut fresh = allocator.next_for(&node.kind);
                while taken.contains(&fresh) {
                    fresh = allocator.next_for(&node.kind);
                }
                taken.insert(fresh.clone());
                node.id = fresh;
                assigned += 1;
            }
            seen.insert(node.id.clone());
        });
    }
    assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionKind;

    #[test]
    fn allocator_shares_one_counter() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_section(), "section_1");
        assert_eq!(ids.next_row(), "row_2");
        assert_eq!(ids.next_column(), "col_3");
        assert_eq!(ids.next_element(), "el_4");
        assert_eq!(ids.issued(), 4);
    }

    #[test]
    fn scoped_allocator_prefixes_ids() {
        let mut ids = IdAllocator::scoped("about");
        assert_eq!(ids.next_section(), "about_section_1");
    }

    #[test]
    fn fills_empty_and_duplicate_ids() {
        let mut sections = vec![
            LayoutNode::section("", SectionKind::Hero).with_children(vec![
                LayoutNode::row("row_1", &[]).with_children(vec![
                    LayoutNode::column("dup").with_children(vec![LayoutNode::module("", "text")]),
                    LayoutNode::column("dup"),
                ]),
            ]),
        ];

        let mut ids = IdAllocator::new();
        let assigned = assign_missing_ids(&mut sections, &mut ids);
        assert_eq!(assigned, 3);

        let mut all = Vec::new();
        sections[0].walk(&mut |n| all.push(n.id.clone()));
        let unique: HashSet<_> = all.iter().cloned().collect();
        assert_eq!(unique.len(), all.len());
        assert!(all.iter().all(|id| !id.is_empty()));
        assert_eq!(sections[0].children[0].children[0].id, "dup");
    }

    #[test]
    fn fresh_ids_skip_taken_names() {
        let mut sections = vec![
            LayoutNode::section("section_1", SectionKind::Faq),
            LayoutNode::section("", SectionKind::Faq),
        ];
        let mut ids = IdAllocator::new();
        assign_missing_ids(&mut sections, &mut ids);
        assert_eq!(sections[1].id, "section_2");
    }
}
