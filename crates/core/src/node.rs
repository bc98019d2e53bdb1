//! The layout tree — sections own rows, rows own columns, columns own
//! modules (or nested rows).
//!
//! Every node serializes as `{type, id, attrs, children?}`. Section nodes
//! additionally carry `section_type`; any node may carry a non-structural
//! `role` (e.g. `section_title`).

use crate::section::SectionKind;
use crate::width::ColumnWidth;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute mapping carried by every node.
pub type Attrs = Map<String, Value>;

/// Structural kind of a node. Modules carry their module type
/// (`heading`, `pricing_table`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Section,
    Row,
    Column,
    Module(String),
}

impl NodeKind {
    /// Map a wire `type` to a node kind. Module types are normalized.
    pub fn from_type(raw: &str) -> Self {
        match raw.trim() {
            "section" => Self::Section,
            "row" => Self::Row,
            "column" => Self::Column,
            other => Self::Module(normalize_module_type(other)),
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::Section => "section",
            Self::Row => "row",
            Self::Column => "column",
            Self::Module(module_type) => module_type,
        }
    }

    /// Sections, rows and columns always carry a `children` array.
    pub fn is_container(&self) -> bool {
        !matches!(self, Self::Module(_))
    }
}

/// Module type slugs use underscores (`site-logo` → `site_logo`).
pub fn normalize_module_type(raw: &str) -> String {
    raw.trim().to_lowercase().replace('-', "_")
}

/// A single element of the layout tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    /// Unique within a document once ids have been assigned.
    pub id: String,
    pub kind: NodeKind,
    /// Semantic kind, set on section nodes.
    pub section_kind: Option<SectionKind>,
    /// Non-structural role marker (`section_title`, `step`, ...).
    pub role: Option<String>,
    /// Requested section background (`dark`, `primary`, `light`, `white`).
    /// Consumed by styling and not serialized.
    pub background: Option<String>,
    pub attrs: Attrs,
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            section_kind: None,
            role: None,
            background: None,
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    pub fn section(id: impl Into<String>, kind: SectionKind) -> Self {
        let mut node = Self::new(id, NodeKind::Section);
        node.section_kind = Some(kind);
        node
    }

    pub fn row(id: impl Into<String>, widths: &[ColumnWidth]) -> Self {
        let mut node = Self::new(id, NodeKind::Row);
        node.set_column_widths(widths);
        node
    }

    pub fn column(id: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Column)
    }

    pub fn module(id: impl Into<String>, module_type: &str) -> Self {
        Self::new(id, NodeKind::Module(normalize_module_type(module_type)))
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_background(mut self, background: Option<String>) -> Self {
        self.background = background;
        self
    }

    pub fn with_children(mut self, children: Vec<LayoutNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn module_type(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Module(module_type) => Some(module_type),
            _ => None,
        }
    }

    pub fn is_module(&self) -> bool {
        matches!(self.kind, NodeKind::Module(_))
    }

    pub fn is_row(&self) -> bool {
        self.kind == NodeKind::Row
    }

    /// The raw `columns` attribute of a row.
    pub fn columns(&self) -> Option<&str> {
        self.attrs.get("columns").and_then(Value::as_str)
    }

    pub fn column_widths(&self) -> Vec<ColumnWidth> {
        self.columns()
            .map(ColumnWidth::parse_list)
            .unwrap_or_default()
    }

    pub fn set_column_widths(&mut self, widths: &[ColumnWidth]) {
        self.attrs
            .insert("columns".into(), Value::String(ColumnWidth::join(widths)));
    }

    /// Pre-order traversal.
    pub fn walk<F: FnMut(&LayoutNode)>(&self, f: &mut F) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// Pre-order traversal with mutable access.
    pub fn walk_mut<F: FnMut(&mut LayoutNode)>(&mut self, f: &mut F) {
        f(self);
        for child in &mut self.children {
            child.walk_mut(f);
        }
    }

    /// All module descendants (or `self`), in document order.
    pub fn modules(&self) -> Vec<&LayoutNode> {
        let mut out = Vec::new();
        collect_modules(self, &mut out);
        out
    }

    pub fn modules_mut(&mut self) -> Vec<&mut LayoutNode> {
        let mut out = Vec::new();
        collect_modules_mut(self, &mut out);
        out
    }

    pub fn find(&self, id: &str) -> Option<&LayoutNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::node_count).sum::<usize>()
    }

    /// Build a node from untrusted JSON.
    ///
    /// Returns `None` when the value is not an object with a string `type`.
    /// Typeless children are dropped, a non-object `attrs` becomes empty,
    /// and a row-level `columns` key is moved into `attrs`.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut obj) = value else {
            return None;
        };

        let node_type = match obj.remove("type") {
            Some(Value::String(t)) if !t.trim().is_empty() => t,
            _ => return None,
        };

        let id = match obj.remove("id") {
            Some(Value::String(id)) => id,
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        let mut attrs = match obj.remove("attrs") {
            Some(Value::Object(map)) => map,
            _ => Attrs::new(),
        };
        if let Some(columns) = obj.remove("columns") {
            attrs.entry("columns").or_insert(columns);
        }

        let section_kind = obj
            .remove("section_type")
            .and_then(|v| v.as_str().map(SectionKind::normalize));
        let role = obj
            .remove("role")
            .and_then(|v| v.as_str().map(str::to_string));
        let background = obj
            .remove("background")
            .and_then(|v| v.as_str().map(str::to_string));

        let children = match obj.remove("children") {
            Some(Value::Array(items)) => items.into_iter().filter_map(Self::from_value).collect(),
            _ => Vec::new(),
        };

        Some(Self {
            id,
            kind: NodeKind::from_type(&node_type),
            section_kind,
            role,
            background,
            attrs,
            children,
        })
    }
}

fn collect_modules<'a>(node: &'a LayoutNode, out: &mut Vec<&'a LayoutNode>) {
    if node.is_module() {
        out.push(node);
    } else {
        for child in &node.children {
            collect_modules(child, out);
        }
    }
}

fn collect_modules_mut<'a>(node: &'a mut LayoutNode, out: &mut Vec<&'a mut LayoutNode>) {
    if node.is_module() {
        out.push(node);
    } else {
        for child in node.children.iter_mut() {
            collect_modules_mut(child, out);
        }
    }
}

// ── Wire format ──────────────────────────────────────────────────────────

#[derive(Serialize)]
struct WireNode<'a> {
    #[serde(rename = "type")]
    node_type: &'a str,
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    section_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    attrs: &'a Attrs,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<&'a [LayoutNode]>,
}

impl Serialize for LayoutNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let children = if self.kind.is_container() || !self.children.is_empty() {
            Some(self.children.as_slice())
        } else {
            None
        };

        WireNode {
            node_type: self.kind.type_name(),
            id: &self.id,
            section_type: self.section_kind.as_ref().map(SectionKind::as_str),
            role: self.role.as_deref(),
            attrs: &self.attrs,
            children,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LayoutNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value)
            .ok_or_else(|| de::Error::custom("layout node must be an object with a string `type`"))
    }
}
