//! `pagewright config` — Configuration management commands.

use super::{config_file, load_config};
use anyhow::Context;
use pagewright_config::AppConfig;
use std::path::Path;

const REDACTED: &str = "***";

/// Config with secrets replaced, for display.
pub fn redacted(config: &AppConfig) -> AppConfig {
    let mut shown = config.clone();
    if shown.generator.api_key.is_some() {
        shown.generator.api_key = Some(REDACTED.into());
    }
    if shown.photos.api_key.is_some() {
        shown.photos.api_key = Some(REDACTED.into());
    }
    shown
}

/// Problems that do not fail validation but will degrade a run.
pub fn warnings(config: &AppConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if !config.has_generator_key() {
        let var = config
            .generator
            .provider_key_var()
            .unwrap_or("PAGEWRIGHT_API_KEY");
        warnings.push(format!(
            "No API key for provider '{}' (set {var})",
            config.generator.provider
        ));
    }
    if config.pipeline.enrich_media && !config.has_photo_key() {
        warnings.push("No photo API key; images will stay empty (set PEXELS_API_KEY)".into());
    }
    warnings
}

pub fn validate(path: Option<&Path>) -> anyhow::Result<()> {
    println!("🔍 Validating configuration...");

    let config = match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e);
        }
    };
    println!("   ✅ Config parsed successfully");

    let warnings = warnings(&config);
    if warnings.is_empty() {
        println!("   ✅ All checks passed");
    } else {
        println!();
        for w in &warnings {
            println!("   ⚠️  {w}");
        }
    }

    println!();
    println!("   Provider:  {}", config.generator.provider);
    println!("   Model:     {}", config.generator.model);
    println!("   Photos:    {}", config.photos.provider);
    println!("   Style:     {}", config.pipeline.default_style);
    println!("   Media:     {}", config.pipeline.enrich_media);
    Ok(())
}

pub fn show(path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(path).context("Failed to load config")?;
    let toml_str = toml::to_string_pretty(&redacted(&config))?;
    println!("{toml_str}");
    Ok(())
}

pub fn path(path: Option<&Path>) {
    println!("{}", config_file(path).display());
}

pub fn init(path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let target = config_file(path);
    if target.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            target.display()
        );
    }
    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    std::fs::write(&target, AppConfig::default_toml())
        .with_context(|| format!("Failed to write {}", target.display()))?;
    println!("✅ Wrote {}", target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_is_valid() {
        let path = config_file(None);
        assert!(path.to_str().unwrap().contains("config.toml"));
    }

    #[test]
    fn secrets_are_redacted() {
        let mut config = AppConfig::default();
        config.generator.api_key = Some("sk-secret".into());
        config.photos.api_key = Some("px-secret".into());

        let shown = toml::to_string_pretty(&redacted(&config)).unwrap();
        assert!(!shown.contains("sk-secret"));
        assert!(!shown.contains("px-secret"));
        assert!(shown.contains(REDACTED));
    }

    #[test]
    fn missing_keys_are_warned() {
        let config = AppConfig::default();
        let warnings = warnings(&config);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("OPENAI_API_KEY"));

        let mut local = AppConfig::default();
        local.generator.provider = "ollama".into();
        local.pipeline.enrich_media = false;
        assert!(super::warnings(&local).is_empty());
    }

    #[test]
    fn init_writes_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("config.toml");

        init(Some(&target), false).unwrap();
        let written = AppConfig::load_from(&target).unwrap();
        assert_eq!(written.pipeline.default_style, "modern");

        assert!(init(Some(&target), false).is_err());
        init(Some(&target), true).unwrap();
    }
}
