//! Module style registry.
//!
//! Maps a module type to a pure style function. The built-in table covers
//! every module the synthesizer and the producer are known to emit; unknown
//! types have no entry and are left unstyled.

use pagewright_core::{Attrs, SectionKind};
use pagewright_tokens::DesignTokens;
use serde_json::Value;
use std::collections::HashMap;

/// Everything a style function may depend on.
#[derive(Debug, Clone, Copy)]
pub struct ModuleContext<'a> {
    pub module_type: &'a str,
    /// Kind of the enclosing section.
    pub section: &'a SectionKind,
    pub role: Option<&'a str>,
    /// Whether the enclosing section resolved to a dark background.
    pub dark: bool,
    pub tokens: &'a DesignTokens,
}

impl<'a> ModuleContext<'a> {
    pub fn new(module_type: &'a str, section: &'a SectionKind, tokens: &'a DesignTokens) -> Self {
        Self {
            module_type,
            section,
            role: None,
            dark: section.is_dark(),
            tokens,
        }
    }

    pub fn with_dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    pub fn with_role(mut self, role: Option<&'a str>) -> Self {
        self.role = role;
        self
    }

    /// Text and backgrounds flip in dark sections.
    pub fn in_dark_section(&self) -> bool {
        self.dark
    }

    pub fn in_hero(&self) -> bool {
        matches!(self.section, SectionKind::Hero)
    }

    /// Headings outside the hero act as section titles.
    pub fn is_section_title(&self) -> bool {
        !self.in_hero() && self.module_type == "heading"
    }
}

/// A pure style function: same context, same attributes.
pub type StyleFn = fn(&ModuleContext<'_>) -> Attrs;

/// Registry of module style functions keyed by module type.
pub struct StyleRegistry {
    entries: HashMap<String, StyleFn>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registry with every built-in module entry.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        super::modules::register_builtin(&mut registry);
        registry
    }

    /// Register a style function. Replaces any existing entry for the type.
    pub fn register(&mut self, module_type: &str, style: StyleFn) {
        self.entries.insert(module_type.to_string(), style);
    }

    /// Make `alias` resolve to the entry registered for `target`.
    /// Returns false when `target` is unknown.
    pub fn alias(&mut self, alias: &str, target: &str) -> bool {
        match self.entries.get(target).copied() {
            Some(style) => {
                self.entries.insert(alias.to_string(), style);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, module_type: &str) -> Option<StyleFn> {
        self.entries.get(module_type).copied()
    }

    pub fn contains(&self, module_type: &str) -> bool {
        self.entries.contains_key(module_type)
    }

    /// Attributes for a module. Unknown module types yield an empty set.
    pub fn style(&self, cx: &ModuleContext<'_>) -> Attrs {
        self.get(cx.module_type).map(|f| f(cx)).unwrap_or_default()
    }

    /// Registered module types, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Unwrap a `json!` object literal into an attribute map.
pub(crate) fn object(value: Value) -> Attrs {
    match value {
        Value::Object(map) => map,
        _ => Attrs::new(),
    }
}
