//! # Pagewright Parser
//!
//! Extracts a JSON value from free-form generator output: text that may be
//! wrapped in prose or code fences, or cut off mid-document by a token limit.
//!
//! Parsing never panics on malformed input. Failure is a [`ParseFailure`]
//! value.
//!
//! ```
//! let value = pagewright_parser::parse("Sure! ```json\n{\"a\": [1, 2\n").unwrap();
//! assert_eq!(value, serde_json::json!({"a": [1]}));
//! ```

mod repair;

use regex_lite::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// First fenced block, with an optional language tag.
static FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)```").ok());

/// Why no JSON value could be recovered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    #[error("no JSON object or array found in text")]
    NoJson,

    /// A closer that does not match the innermost open container. The offset
    /// is relative to the start of the JSON candidate.
    #[error("unbalanced closing bracket at offset {offset}")]
    Unbalanced { offset: usize },

    #[error("repaired text still does not parse: {reason}")]
    Unrepairable { reason: String },
}

/// A recovered value and whether truncation repair was needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub value: Value,
    pub repaired: bool,
}

/// Parse possibly noisy, possibly truncated generator output.
pub fn parse(text: &str) -> Result<Value, ParseFailure> {
    parse_detailed(text).map(|parsed| parsed.value)
}

/// Like [`parse`], but also reports whether the text had to be repaired.
pub fn parse_detailed(text: &str) -> Result<Parsed, ParseFailure> {
    let body = strip_code_fences(text);
    let start = body.find(['{', '[']).ok_or(ParseFailure::NoJson)?;
    let candidate = &body[start..];

    // The streaming deserializer stops after the first value, so trailing
    // prose is ignored.
    if let Some(Ok(value)) = serde_json::Deserializer::from_str(candidate)
        .into_iter::<Value>()
        .next()
    {
        return Ok(Parsed {
            value,
            repaired: false,
        });
    }

    let repaired = repair::close_truncated(candidate)?;
    match serde_json::from_str::<Value>(&repaired) {
        Ok(value) => {
            tracing::debug!(
                original_len = candidate.len(),
                repaired_len = repaired.len(),
                "Repaired truncated JSON"
            );
            Ok(Parsed {
                value,
                repaired: true,
            })
        }
        Err(e) => Err(ParseFailure::Unrepairable {
            reason: e.to_string(),
        }),
    }
}

/// Parse and require a JSON object at the top level.
pub fn parse_object(text: &str) -> Result<serde_json::Map<String, Value>, ParseFailure> {
    match parse(text)? {
        Value::Object(map) => Ok(map),
        other => Err(ParseFailure::Unrepairable {
            reason: format!("expected a JSON object, found {}", type_name(&other)),
        }),
    }
}

/// Return the body of the first fenced block, or the text after an
/// unclosed opening fence, or the trimmed text.
pub fn strip_code_fences(text: &str) -> &str {
    let fenced = FENCE
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|caps| caps.get(1));
    if let Some(inner) = fenced {
        return inner.as_str().trim();
    }

    match text.find("```") {
        Some(pos) => text[pos + 3..]
            .trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            .trim(),
        None => text.trim(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "page_title": "Northwind Dental",
            "colors": {"primary": "#0D9488", "accent": null},
            "sections": [
                {"type": "hero", "layout": "split-left", "headline": "Smile \"brighter\""},
                {"type": "stats", "count": 4, "dark": false},
                {"type": "faq", "items": ["Cost?", "Hours?"]}
            ],
            "score": -12.5
        })
    }

    /// Every key in `partial` exists in `full` with a consistent value.
    fn is_prefix_consistent(partial: &Value, full: &Value) -> bool {
        match (partial, full) {
            (Value::Object(p), Value::Object(f)) => p
                .iter()
                .all(|(k, v)| f.get(k).is_some_and(|fv| is_prefix_consistent(v, fv))),
            (Value::Array(p), Value::Array(f)) => {
                p.len() <= f.len()
                    && p.iter().zip(f).all(|(pv, fv)| is_prefix_consistent(pv, fv))
            }
            (p, f) => p == f,
        }
    }

    #[test]
    fn valid_json_round_trips() {
        let value = sample();
        let text = serde_json::to_string_pretty(&value).unwrap();
        let parsed = parse_detailed(&text).unwrap();
        assert_eq!(parsed.value, value);
        assert!(!parsed.repaired);
    }

    #[test]
    fn ignores_surrounding_prose() {
        let text = "Here is your outline:\n{\"sections\": []}\nLet me know if you need changes!";
        assert_eq!(parse(text).unwrap(), json!({"sections": []}));
    }

    #[test]
    fn strips_code_fences() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(parse(text).unwrap(), json!({"a": 1}));
        assert_eq!(strip_code_fences("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("```json\n{\"a\""), "{\"a\"");
    }

    #[test]
    fn fence_pattern_compiles_once_and_is_reused() {
        assert!(FENCE.is_some());
        for tag in ["json", "JSON", "", "js-on"] {
            let text = format!("Sure:\n```{tag}\n{{\"n\": 1}}\n```\nDone.");
            assert_eq!(strip_code_fences(&text), "{\"n\": 1}");
        }
    }

    #[test]
    fn repairs_truncated_trailing_key() {
        let text = r#"{"page_title": "Acme", "sections": [{"type": "hero", "headline": "Welcome", "titl"#;
        let parsed = parse_detailed(text).unwrap();
        assert!(parsed.repaired);
        assert_eq!(
            parsed.value,
            json!({"page_title": "Acme", "sections": [{"type": "hero", "headline": "Welcome"}]})
        );
    }

    #[test]
    fn every_truncation_is_a_consistent_prefix_or_failure() {
        let full = sample();
        let text = serde_json::to_string(&full).unwrap();
        for (offset, _) in text.char_indices().skip(1) {
            match parse(&text[..offset]) {
                Ok(partial) => assert!(
                    is_prefix_consistent(&partial, &full),
                    "offset {offset} produced {partial}"
                ),
                Err(ParseFailure::NoJson) => panic!("offset {offset} lost the opener"),
                Err(_) => {}
            }
        }
    }

    #[test]
    fn extra_closers_are_unbalanced() {
        let err = parse(r#"{"a": [1, 2}}"#).unwrap_err();
        assert!(matches!(err, ParseFailure::Unbalanced { .. }));
    }

    #[test]
    fn text_without_json_fails() {
        assert_eq!(parse("I cannot help with that."), Err(ParseFailure::NoJson));
        assert_eq!(parse(""), Err(ParseFailure::NoJson));
    }

    #[test]
    fn garbage_inside_braces_is_unrepairable() {
        let err = parse("{this is not json}").unwrap_err();
        assert!(matches!(err, ParseFailure::Unrepairable { .. }));
    }

    #[test]
    fn parse_object_rejects_arrays() {
        assert!(parse_object("[1, 2]").is_err());
        assert_eq!(parse_object("{\"k\": 1}").unwrap()["k"], 1);
    }
}
