//! Section plans — the outline's per-section instructions to the
//! structure synthesizer.

use crate::section::SectionKind;
use crate::width::ColumnWidth;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One planned section as produced by the outline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPlan {
    #[serde(rename = "type", default = "default_section_type")]
    pub section_type: String,

    /// Layout preset name (`centered`, `split-left`, `grid-3`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Requested background: `dark`, `primary`, `light` or `white`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Explicit column specification. Overrides the kind's template.
    #[serde(
        default,
        deserialize_with = "lenient_columns",
        skip_serializing_if = "Option::is_none"
    )]
    pub columns: Option<Vec<ColumnPlan>>,
}

fn default_section_type() -> String {
    "content".into()
}

impl SectionPlan {
    pub fn new(section_type: impl Into<String>) -> Self {
        Self {
            section_type: section_type.into(),
            layout: None,
            headline: None,
            purpose: None,
            background: None,
            columns: None,
        }
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn with_columns(mut self, columns: Vec<ColumnPlan>) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Normalized section kind.
    pub fn kind(&self) -> SectionKind {
        SectionKind::normalize(&self.section_type)
    }
}

/// One explicitly requested column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnPlan {
    pub width: ColumnWidth,
    pub modules: Vec<String>,
}

impl ColumnPlan {
    pub fn new(width: ColumnWidth, modules: &[&str]) -> Self {
        Self {
            width,
            modules: modules.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Lenient construction from producer JSON.
    ///
    /// Widths may be tokens (`"1_3"`) or fractions (`0.5`); anything else is
    /// full width. Module lists accept `modules` or `module_types`, strings or
    /// `{type}` objects, and default to a single `text` module.
    pub fn from_value(value: &Value) -> Self {
        let width = match value.get("width") {
            Some(Value::String(token)) => ColumnWidth::normalize(token),
            Some(Value::Number(n)) => n
                .as_f64()
                .and_then(ColumnWidth::from_fraction)
                .unwrap_or(ColumnWidth::Full),
            _ => ColumnWidth::Full,
        };

        let modules: Vec<String> = value
            .get("modules")
            .or_else(|| value.get("module_types"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Object(obj) => obj.get("type").and_then(Value::as_str).map(String::from),
                        _ => None,
                    })
                    .filter(|s| !s.trim().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            width,
            modules: if modules.is_empty() {
                vec!["text".into()]
            } else {
                modules
            },
        }
    }
}

impl<'de> Deserialize<'de> for ColumnPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Accept a column array, or treat anything else (including a bare width
/// string like `"1_2,1_2"`) leniently.
fn lenient_columns<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<ColumnPlan>>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) if !items.is_empty() => {
            Some(items.iter().map(ColumnPlan::from_value).collect())
        }
        Value::String(columns) if !columns.trim().is_empty() => Some(
            ColumnWidth::parse_list(&columns)
                .into_iter()
                .map(|width| ColumnPlan::new(width, &["text"]))
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plan_defaults() {
        let plan: SectionPlan = serde_json::from_value(json!({})).unwrap();
        assert_eq!(plan.section_type, "content");
        assert!(plan.columns.is_none());
        assert_eq!(plan.kind(), SectionKind::Other("content".into()));
    }

    #[test]
    fn synonym_kind_resolves() {
        let plan: SectionPlan =
            serde_json::from_value(json!({"type": "social proof", "layout": "grid-4"})).unwrap();
        assert_eq!(plan.kind(), SectionKind::Stats);
        assert_eq!(plan.layout.as_deref(), Some("grid-4"));
    }

    #[test]
    fn columns_parse_leniently() {
        let plan: SectionPlan = serde_json::from_value(json!({
            "type": "features",
            "columns": [
                {"width": "1_3", "modules": ["heading", {"type": "text"}]},
                {"width": 0.5},
                {"width": "9_10", "module_types": ["image"]}
            ]
        }))
        .unwrap();

        let columns = plan.columns.unwrap();
        assert_eq!(columns[0].width, ColumnWidth::Third);
        assert_eq!(columns[0].modules, vec!["heading", "text"]);
        assert_eq!(columns[1].width, ColumnWidth::Half);
        assert_eq!(columns[1].modules, vec!["text"]);
        assert_eq!(columns[2].width, ColumnWidth::Full);
        assert_eq!(columns[2].modules, vec!["image"]);
    }

    #[test]
    fn string_columns_become_text_columns() {
        let plan: SectionPlan =
            serde_json::from_value(json!({"type": "about", "columns": "1_2,1_2"})).unwrap();
        assert_eq!(plan.columns.unwrap().len(), 2);

        let plan: SectionPlan =
            serde_json::from_value(json!({"type": "about", "columns": null})).unwrap();
        assert!(plan.columns.is_none());
    }
}
