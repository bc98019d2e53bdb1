//! Partial token input as produced by an outline (or a style preset).
//!
//! Every family is a loose key → value map. Numbers may arrive as strings
//! (`"56"`, `"56px"`), and a family that is not an object at all is treated
//! as empty.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Upper bound for any integer token (px, ms). Derived values are
/// computed from these, so the bound keeps the arithmetic in range.
pub const MAX_TOKEN_INT: i64 = 10_000;

/// One token family (`typography`, `spacing`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TokenFamily(BTreeMap<String, Value>);

impl TokenFamily {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Fill `key` only when absent.
    pub fn set_default(&mut self, key: &str, value: impl Into<Value>) {
        self.0.entry(key.to_string()).or_insert_with(|| value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Integer reading: numbers are truncated, strings use their leading
    /// digits. Results are clamped to `0..=MAX_TOKEN_INT`.
    pub fn int(&self, key: &str) -> Option<i64> {
        let n = match self.0.get(key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => leading_int(s),
            _ => None,
        }?;
        Some(n.clamp(0, MAX_TOKEN_INT))
    }

    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.int(key).unwrap_or(default)
    }

    /// String reading: non-empty strings as-is, numbers rendered.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or_else(|| default.to_string())
    }

    /// Overlay `other` onto `self`; keys in `other` win.
    pub fn merge(&mut self, other: &TokenFamily) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }
}

fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    // Overlong digit runs saturate rather than fail.
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse::<i64>().unwrap_or(i64::MAX).saturating_mul(sign))
}

impl<'de> Deserialize<'de> for TokenFamily {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Object(map) => Self(map.into_iter().collect()),
            _ => Self::default(),
        })
    }
}

/// The sparse token specification fed to [`crate::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenInput {
    #[serde(default, skip_serializing_if = "TokenFamily::is_empty")]
    pub color_scheme: TokenFamily,
    #[serde(default, skip_serializing_if = "TokenFamily::is_empty")]
    pub typography: TokenFamily,
    #[serde(default, skip_serializing_if = "TokenFamily::is_empty")]
    pub spacing: TokenFamily,
    #[serde(default, skip_serializing_if = "TokenFamily::is_empty")]
    pub borders: TokenFamily,
    #[serde(default, skip_serializing_if = "TokenFamily::is_empty")]
    pub shadows: TokenFamily,
}

impl TokenInput {
    /// Overlay `other` family by family; keys in `other` win.
    pub fn merged_with(mut self, other: &TokenInput) -> Self {
        self.color_scheme.merge(&other.color_scheme);
        self.typography.merge(&other.typography);
        self.spacing.merge(&other.spacing);
        self.borders.merge(&other.borders);
        self.shadows.merge(&other.shadows);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_read_leniently() {
        let family: TokenFamily = serde_json::from_value(json!({
            "a": 56, "b": "42", "c": "24px", "d": 17.9, "e": "-3", "f": "wide", "g": true
        }))
        .unwrap();
        assert_eq!(family.int("a"), Some(56));
        assert_eq!(family.int("b"), Some(42));
        assert_eq!(family.int("c"), Some(24));
        assert_eq!(family.int("d"), Some(17));
        assert_eq!(family.int("e"), Some(0));
        assert_eq!(family.int("f"), None);
        assert_eq!(family.int("g"), None);
        assert_eq!(family.int_or("missing", 8), 8);
    }

    #[test]
    fn oversized_integers_are_clamped() {
        let family: TokenFamily = serde_json::from_value(json!({
            "huge": i64::MAX,
            "float": 1e300,
            "digits": "99999999999999999999999px",
            "negative": i64::MIN
        }))
        .unwrap();
        assert_eq!(family.int("huge"), Some(MAX_TOKEN_INT));
        assert_eq!(family.int("float"), Some(MAX_TOKEN_INT));
        assert_eq!(family.int("digits"), Some(MAX_TOKEN_INT));
        assert_eq!(family.int("negative"), Some(0));
    }

    #[test]
    fn text_reads_numbers_and_skips_blanks() {
        let family = TokenFamily::new().with("w", 700).with("blank", "  ");
        assert_eq!(family.text("w").as_deref(), Some("700"));
        assert_eq!(family.text_or("blank", "400"), "400");
    }

    #[test]
    fn non_object_family_is_empty() {
        let input: TokenInput =
            serde_json::from_value(json!({"typography": "modern", "spacing": [1, 2]})).unwrap();
        assert!(input.typography.is_empty());
        assert!(input.spacing.is_empty());
    }

    #[test]
    fn merge_prefers_overlay() {
        let base = TokenInput {
            spacing: TokenFamily::new().with("element_gap", 24).with("card_padding", 32),
            ..Default::default()
        };
        let overlay = TokenInput {
            spacing: TokenFamily::new().with("element_gap", 30),
            ..Default::default()
        };
        let merged = base.merged_with(&overlay);
        assert_eq!(merged.spacing.int("element_gap"), Some(30));
        assert_eq!(merged.spacing.int("card_padding"), Some(32));
    }
}
