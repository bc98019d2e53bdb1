//! Content merge: normalizes generator-produced module content and merges
//! it into the styled tree.
//!
//! The generator is untrusted. It nests values under the module type name,
//! hands back objects where strings belong, and forgets markup. Everything
//! it sends passes through [`normalize_fields`] before touching a node.

use pagewright_core::{Attrs, LayoutNode};
use pagewright_parser::ParseFailure;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Fields that must hold a plain string.
pub const STRING_FIELDS: &[&str] = &[
    "text",
    "title",
    "content",
    "src",
    "link_url",
    "alt",
    "author",
    "name",
    "position",
    "job_title",
    "company",
    "button_text",
];

/// Content fields that are not plain strings.
const STRUCTURED_FIELDS: &[&str] = &[
    "number",
    "prefix",
    "suffix",
    "icon",
    "price",
    "currency",
    "period",
    "features",
    "featured",
    "items",
    "fields",
    "portrait_url",
    "image_url",
    "button_url",
    "url",
];

/// Whether a field carries content (and may overwrite an existing attr).
pub fn is_content_field(field: &str) -> bool {
    STRING_FIELDS.contains(&field) || STRUCTURED_FIELDS.contains(&field)
}

/// Field a value nested under the module type name belongs in.
fn primary_field(module_type: &str) -> Option<&'static str> {
    Some(match module_type {
        "heading" => "text",
        "text" => "content",
        "button" | "header_button" => "text",
        "image" => "src",
        "blurb" | "cta" | "pricing_table" => "title",
        "number_counter" | "circle_counter" => "number",
        "testimonial" => "content",
        "team_member" => "name",
        _ => return None,
    })
}

/// Modules whose `content` field is rendered as rich text.
fn is_rich_text(module_type: &str) -> bool {
    matches!(module_type, "text" | "blurb")
}

/// Pull a string out of a value the generator over-structured.
///
/// Objects yield `.text` then `.content`; arrays yield their first element.
/// Numbers are stringified. Anything else is unrecoverable.
pub fn recover_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => ["text", "content"]
            .iter()
            .find_map(|key| map.get(*key).and_then(recover_string)),
        Value::Array(items) => items.first().and_then(recover_string),
        Value::Bool(_) | Value::Null => None,
    }
}

/// Wrap markup-free text in a paragraph.
pub fn wrap_paragraph(text: &str) -> String {
    if text.contains('<') {
        text.to_string()
    } else {
        format!("<p>{text}</p>")
    }
}

/// Normalize one module's content in place of the raw generator fields.
pub fn normalize_fields(mut content: Attrs, module_type: &str) -> Attrs {
    if let Some(nested) = content.remove(module_type) {
        match primary_field(module_type) {
            Some(field) => {
                let value = match nested {
                    // A nested object carries its own fields; they fill
                    // whatever the outer level left open.
                    Value::Object(map) => {
                        let fallback = recover_string(&Value::Object(map.clone()));
                        for (key, value) in map {
                            let key = if key == module_type { field.to_string() } else { key };
                            content.entry(key).or_insert(value);
                        }
                        fallback.map(Value::String)
                    }
                    array @ Value::Array(_) => recover_string(&array).map(Value::String),
                    other => Some(other),
                };
                if let Some(value) = value {
                    content.entry(field).or_insert(value);
                }
            }
            // No known home for it; put it back untouched.
            None => {
                content.insert(module_type.to_string(), nested);
            }
        }
    }

    for field in STRING_FIELDS {
        let Some(value) = content.get(*field) else {
            continue;
        };
        if value.is_string() {
            continue;
        }
        match recover_string(value) {
            Some(recovered) => {
                content.insert((*field).to_string(), Value::String(recovered));
            }
            None => {
                debug!(module_type, field, "Dropping unrecoverable content field");
                content.remove(*field);
            }
        }
    }

    if is_rich_text(module_type) {
        if let Some(Value::String(text)) = content.get("content") {
            let wrapped = wrap_paragraph(text);
            content.insert("content".into(), Value::String(wrapped));
        }
    }

    content
}

/// Merge normalized content into a node's attrs.
///
/// Content fields overwrite; anything else is only added when absent, so
/// styling survives.
pub fn merge_into(attrs: &mut Attrs, content: Attrs) {
    for (key, value) in content {
        if is_content_field(&key) {
            attrs.insert(key, value);
        } else {
            attrs.entry(key).or_insert(value);
        }
    }
}

/// Per-module content keyed by node id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentPayload {
    entries: HashMap<String, Attrs>,
}

impl ContentPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `{"modules": {id: {...}}}`, a bare `{id: {...}}` map, or an
    /// array of objects carrying `id` / `module_id`. Non-object entries are
    /// ignored.
    pub fn from_value(value: Value) -> Self {
        let value = match value {
            Value::Object(mut map) if matches!(map.get("modules"), Some(Value::Object(_) | Value::Array(_))) => {
                map.remove("modules").unwrap_or_default()
            }
            other => other,
        };

        let mut payload = Self::new();
        match value {
            Value::Object(map) => {
                for (id, entry) in map {
                    if let Value::Object(fields) = entry {
                        payload.insert(id, fields);
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    let Value::Object(mut fields) = item else {
                        continue;
                    };
                    let id = ["id", "module_id"]
                        .iter()
                        .find_map(|key| match fields.remove(*key) {
                            Some(Value::String(id)) if !id.is_empty() => Some(id),
                            _ => None,
                        });
                    if let Some(id) = id {
                        fields.remove("module_id");
                        payload.insert(id, fields);
                    }
                }
            }
            _ => {}
        }
        payload
    }

    /// Parse raw generator output.
    pub fn parse(text: &str) -> Result<Self, ParseFailure> {
        pagewright_parser::parse(text).map(Self::from_value)
    }

    pub fn insert(&mut self, id: impl Into<String>, content: Attrs) {
        self.entries.insert(id.into(), content);
    }

    pub fn get(&self, id: &str) -> Option<&Attrs> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Summary of a merge pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Modules that received payload content.
    pub merged: usize,
    /// Modules with no payload entry.
    pub missing: usize,
}

/// Merge `payload` into every module it names.
pub fn merge_content(sections: &mut [LayoutNode], payload: &ContentPayload) -> MergeReport {
    let mut report = MergeReport::default();
    for section in sections.iter_mut() {
        for module in section.modules_mut() {
            let Some(module_type) = module.module_type().map(str::to_string) else {
                continue;
            };
            match payload.get(&module.id) {
                Some(content) => {
                    let normalized = normalize_fields(content.clone(), &module_type);
                    merge_into(&mut module.attrs, normalized);
                    report.merged += 1;
                }
                None => report.missing += 1,
            }
        }
    }
    debug!(merged = report.merged, missing = report.missing, "Merged content");
    report
}

/// One module the content prompt asks the generator to fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSlot {
    pub id: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub section_type: String,
}

/// Every module in document order, with its section kind.
pub fn collect_modules(sections: &[LayoutNode]) -> Vec<ModuleSlot> {
    sections
        .iter()
        .flat_map(|section| {
            let section_type = section
                .section_kind
                .as_ref()
                .map(|k| k.as_str().to_string())
                .unwrap_or_default();
            section.modules().into_iter().filter_map(move |module| {
                Some(ModuleSlot {
                    id: module.id.clone(),
                    module_type: module.module_type()?.to_string(),
                    section_type: section_type.clone(),
                })
            })
        })
        .collect()
}
