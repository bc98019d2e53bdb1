//! Truncation repair.
//!
//! Scans a JSON candidate with a string/escape-aware state machine, records
//! the last offset at which the document can be cut and closed without
//! inventing data, and rebuilds the text up to that cut with the exact
//! closers still open there.

use crate::ParseFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Key,
    Colon,
    Value,
    /// A comma or the container's closer.
    Next,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    closer: u8,
    expect: Expect,
}

impl Frame {
    fn is_object(&self) -> bool {
        self.closer == b'}'
    }
}

#[derive(Debug, Clone)]
struct Cut {
    end: usize,
    closers: Vec<u8>,
}

#[derive(Debug, Default)]
struct Scanner {
    stack: Vec<Frame>,
    cut: Option<Cut>,
    pending_comma: Option<usize>,
    dangling_commas: Vec<usize>,
}

impl Scanner {
    fn mark_cut(&mut self, end: usize) {
        self.cut = Some(Cut {
            end,
            closers: self.stack.iter().map(|f| f.closer).collect(),
        });
    }

    /// A value (string, scalar, or closed container) ended at `end`.
    fn value_done(&mut self, end: usize) {
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        let was_expected = top.expect == Expect::Value;
        top.expect = Expect::Next;
        if was_expected {
            self.mark_cut(end);
        }
    }
}

fn is_delimiter(b: u8) -> bool {
    matches!(b, b',' | b'}' | b']' | b':' | b'"') || b.is_ascii_whitespace()
}

/// Close a candidate that starts with `{` or `[`.
///
/// Returns the rebuilt text. A closer that does not match the innermost open
/// container is reported as [`ParseFailure::Unbalanced`]; closers are never
/// removed to make the text fit.
pub(crate) fn close_truncated(candidate: &str) -> Result<String, ParseFailure> {
    let bytes = candidate.as_bytes();
    let mut scanner = Scanner::default();

    let mut in_string = false;
    let mut escaped = false;
    let mut string_is_key = false;
    let mut scalar_start: Option<usize> = None;
    let mut complete_end: Option<usize> = None;

    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
                if string_is_key {
                    if let Some(top) = scanner.stack.last_mut() {
                        top.expect = Expect::Colon;
                    }
                } else {
                    scanner.value_done(i + 1);
                }
            }
            continue;
        }

        if scalar_start.is_some() && is_delimiter(b) {
            scalar_start = None;
            scanner.value_done(i);
        }

        match b {
            b'{' | b'[' => {
                scanner.pending_comma = None;
                let frame = if b == b'{' {
                    Frame {
                        closer: b'}',
                        expect: Expect::Key,
                    }
                } else {
                    Frame {
                        closer: b']',
                        expect: Expect::Value,
                    }
                };
                scanner.stack.push(frame);
                scanner.mark_cut(i + 1);
            }
            b'}' | b']' => {
                match scanner.stack.last() {
                    Some(top) if top.closer == b => {}
                    _ => return Err(ParseFailure::Unbalanced { offset: i }),
                }
                if let Some(comma) = scanner.pending_comma.take() {
                    scanner.dangling_commas.push(comma);
                }
                scanner.stack.pop();
                if scanner.stack.is_empty() {
                    complete_end = Some(i + 1);
                    break;
                }
                scanner.value_done(i + 1);
            }
            b'"' => {
                scanner.pending_comma = None;
                in_string = true;
                string_is_key = matches!(
                    scanner.stack.last(),
                    Some(top) if top.is_object() && top.expect == Expect::Key
                );
            }
            b':' => {
                if let Some(top) = scanner.stack.last_mut() {
                    top.expect = Expect::Value;
                }
            }
            b',' => {
                scanner.pending_comma = Some(i);
                if let Some(top) = scanner.stack.last_mut() {
                    top.expect = if top.is_object() {
                        Expect::Key
                    } else {
                        Expect::Value
                    };
                }
            }
            b if b.is_ascii_whitespace() => {}
            _ => {
                scanner.pending_comma = None;
                if scalar_start.is_none() {
                    scalar_start = Some(i);
                }
            }
        }
    }

    let (end, closers) = match complete_end {
        Some(end) => (end, Vec::new()),
        None => {
            // A literal running into the end of input is complete only if it
            // is spelled out in full; numbers may have lost digits.
            if let (Some(start), false) = (scalar_start, in_string) {
                if matches!(&candidate[start..], "true" | "false" | "null") {
                    scanner.value_done(bytes.len());
                }
            }
            let cut = scanner.cut.ok_or(ParseFailure::NoJson)?;
            (cut.end, cut.closers)
        }
    };

    let mut out = String::with_capacity(end + closers.len());
    let mut from = 0;
    for &comma in scanner.dangling_commas.iter().filter(|&&c| c < end) {
        out.push_str(&candidate[from..comma]);
        from = comma + 1;
    }
    out.push_str(&candidate[from..end]);
    out.extend(closers.iter().rev().map(|&c| c as char));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closes_open_containers_in_reverse_order() {
        let out = close_truncated(r#"{"a": [1, {"b": 2}"#).unwrap();
        assert_eq!(out, r#"{"a": [1, {"b": 2}]}"#);
    }

    #[test]
    fn drops_unterminated_key() {
        let out = close_truncated(r#"{"title": "Hi", "titl"#).unwrap();
        assert_eq!(out, r#"{"title": "Hi"}"#);
    }

    #[test]
    fn drops_key_awaiting_value() {
        let out = close_truncated(r#"{"a": 1, "b": "#).unwrap();
        assert_eq!(out, r#"{"a": 1}"#);
    }

    #[test]
    fn drops_unterminated_string_value() {
        let out = close_truncated(r#"["one", "tw"#).unwrap();
        assert_eq!(out, r#"["one"]"#);
    }

    #[test]
    fn drops_number_cut_at_end() {
        let out = close_truncated(r#"[10, 25"#).unwrap();
        assert_eq!(out, "[10]");
    }

    #[test]
    fn keeps_complete_literal_at_end() {
        let out = close_truncated(r#"{"ok": true"#).unwrap();
        assert_eq!(out, r#"{"ok": true}"#);
    }

    #[test]
    fn escaped_quotes_do_not_end_strings() {
        let out = close_truncated(r#"{"q": "say \"hi\" {", "r"#).unwrap();
        assert_eq!(out, r#"{"q": "say \"hi\" {"}"#);
    }

    #[test]
    fn removes_dangling_commas_before_closers() {
        let out = close_truncated(r#"{"a": [1, 2,], "b": 3,}"#).unwrap();
        assert_eq!(out, r#"{"a": [1, 2], "b": 3}"#);
    }

    #[test]
    fn mismatched_closer_is_unbalanced() {
        let err = close_truncated(r#"{"a": [1}"#).unwrap_err();
        assert_eq!(err, ParseFailure::Unbalanced { offset: 8 });
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let out = close_truncated(r#"{"t": "café ☕", "u": "naï"#).unwrap();
        assert_eq!(out, r#"{"t": "café ☕"}"#);
    }
}
