pub mod config_cmd;
pub mod generate;
pub mod repair;
pub mod section;
pub mod tokens;

use anyhow::Context;
use pagewright_config::AppConfig;
use std::path::{Path, PathBuf};

/// Load the config from `path` (with env overrides) or from the default
/// location.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => {
            let mut config = AppConfig::load_from(path)?;
            config.apply_env_overrides(|name| std::env::var(name).ok());
            config.validate()?;
            Ok(config)
        }
        None => Ok(AppConfig::load()?),
    }
}

pub fn config_file(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(AppConfig::config_path)
}

/// Pretty JSON to `output`, or to stdout.
pub fn emit_json<T: serde::Serialize + ?Sized>(value: &T, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("✅ Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
