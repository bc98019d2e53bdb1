//! `pagewright repair` — recover JSON from generator-style output.

use anyhow::Context;
use std::io::Read;
use std::path::Path;

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Recovered JSON, pretty-printed, and whether truncation repair ran.
pub fn recover(text: &str) -> anyhow::Result<(String, bool)> {
    let parsed = pagewright_parser::parse_detailed(text).context("No JSON value could be recovered")?;
    Ok((serde_json::to_string_pretty(&parsed.value)?, parsed.repaired))
}

pub fn run(file: Option<&Path>) -> anyhow::Result<()> {
    let text = read_input(file)?;
    let (json, repaired) = recover(&text)?;
    if repaired {
        eprintln!("🔧 Input was truncated; closed open strings and containers");
    }
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_fenced_and_truncated_json() {
        let (json, repaired) = recover("Sure!\n```json\n{\"title\": \"Hi\", \"items\": [1, 2]").unwrap();
        assert!(repaired);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Hi");
        assert_eq!(value["items"], serde_json::json!([1, 2]));
    }

    #[test]
    fn reports_unrecoverable_input() {
        let err = recover("no json here").unwrap_err();
        assert!(err.to_string().contains("No JSON value"));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "{\"ok\": true}").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "{\"ok\": true}");
    }
}
