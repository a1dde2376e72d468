// src/config.rs
//! Application defaults for search requests.
//!
//! Values here fill in whatever an API request leaves out (language,
//! region, result cap, display toggles). Loaded from a TOML or JSON file;
//! missing file means built-in defaults.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::intent::{Language, Region, SearchPrefs, DEFAULT_MAX_RESULTS};

const ENV_PATH: &str = "GNEWS_CONFIG_PATH";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub language: Language,
    pub region: Region,
    pub max_results: usize,
    pub sort_chronological: bool,
    pub show_images: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            region: Region::Us,
            max_results: DEFAULT_MAX_RESULTS,
            sort_chronological: true,
            show_images: true,
        }
    }
}

impl AppConfig {
    /// The presentation preferences these defaults describe.
    pub fn prefs(&self) -> SearchPrefs {
        SearchPrefs {
            max_results: self.max_results,
            sort_chronological: self.sort_chronological,
            show_images: self.show_images,
        }
    }
}

/// Load config from an explicit path. Supports TOML or JSON formats.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_config(&content, ext.as_str())
}

/// Load config using env var + fallbacks:
/// 1) $GNEWS_CONFIG_PATH
/// 2) config/gnews.toml
/// 3) config/gnews.json
/// 4) built-in defaults
pub fn load_config_default() -> Result<AppConfig> {
    if let Ok(p) = std::env::var(ENV_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_config_from(&pb);
        } else {
            return Err(anyhow!("GNEWS_CONFIG_PATH points to non-existent path"));
        }
    }
    let toml_p = PathBuf::from("config/gnews.toml");
    if toml_p.exists() {
        return load_config_from(&toml_p);
    }
    let json_p = PathBuf::from("config/gnews.json");
    if json_p.exists() {
        return load_config_from(&json_p);
    }
    Ok(AppConfig::default())
}

fn parse_config(s: &str, hint_ext: &str) -> Result<AppConfig> {
    if hint_ext == "json" || s.trim_start().starts_with('{') {
        if let Ok(v) = serde_json::from_str::<AppConfig>(s) {
            return Ok(v);
        }
    }
    if let Ok(v) = toml::from_str::<AppConfig>(s) {
        return Ok(v);
    }
    Err(anyhow!("unsupported config format"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let c = AppConfig::default();
        assert_eq!(c.language, Language::En);
        assert_eq!(c.region, Region::Us);
        assert_eq!(c.max_results, 30);
        assert!(c.show_images);
    }

    #[test]
    fn toml_and_json_both_parse() {
        let toml_src = r#"
            language = "fr"
            region = "CA"
            max_results = 50
        "#;
        let c = parse_config(toml_src, "toml").unwrap();
        assert_eq!(c.language, Language::Fr);
        assert_eq!(c.region, Region::Ca);
        assert_eq!(c.max_results, 50);
        // Omitted fields fall back to defaults.
        assert!(c.sort_chronological);

        let json_src = r#"{ "language": "ja", "show_images": false }"#;
        let c = parse_config(json_src, "json").unwrap();
        assert_eq!(c.language, Language::Ja);
        assert!(!c.show_images);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_config("][ not a config", "toml").is_err());
    }
}
