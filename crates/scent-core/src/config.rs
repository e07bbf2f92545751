//! Configuration types for scentfind.
//!
//! [`Config::load`] reads `~/.config/scentfind/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[catalog]
path = "fragrances.json"

[search]
max_banner_labels = 4
matched_notes_cap = 8

[ui]
results_pane_width_pct = 45
theme                  = "default"

[private]
code = "DE-2026"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub private: PrivateConfig,
}

/// `[catalog]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

fn default_catalog_path() -> PathBuf { PathBuf::from("fragrances.json") }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { path: default_catalog_path() }
    }
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_max_banner_labels")]
    pub max_banner_labels: usize,
    #[serde(default = "default_matched_notes_cap")]
    pub matched_notes_cap: usize,
}

fn default_max_banner_labels() -> usize { crate::view::MAX_BANNER_LABELS }
fn default_matched_notes_cap() -> usize { crate::notes::MATCHED_NOTES_CAP }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_banner_labels: default_max_banner_labels(),
            matched_notes_cap: default_matched_notes_cap(),
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_results_pane_width_pct")]
    pub results_pane_width_pct: u16,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_results_pane_width_pct() -> u16 { 45 }
fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            results_pane_width_pct: default_results_pane_width_pct(),
            theme: default_theme(),
        }
    }
}

/// `[private]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PrivateConfig {
    #[serde(default = "default_private_code")]
    pub code: String,
}

fn default_private_code() -> String { crate::session::DEFAULT_PRIVATE_CODE.to_string() }

impl Default for PrivateConfig {
    fn default() -> Self {
        Self { code: default_private_code() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/scentfind/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// [`Config::load`] against an explicit file.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("scentfind")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.catalog.path, PathBuf::from("fragrances.json"));
        assert_eq!(cfg.search.max_banner_labels, 4);
        assert_eq!(cfg.search.matched_notes_cap, 8);
        assert_eq!(cfg.ui.results_pane_width_pct, 45);
        assert_eq!(cfg.ui.theme, "default");
        assert_eq!(cfg.private.code, "DE-2026");
    }

    #[test]
    fn struct_defaults_match_embedded_toml() {
        let embedded = Config::defaults();
        assert_eq!(SearchConfig::default().matched_notes_cap, embedded.search.matched_notes_cap);
        assert_eq!(PrivateConfig::default().code, embedded.private.code);
    }

    #[test]
    fn load_from_creates_then_layers_user_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("scentfind").join("config.toml");

        let cfg = Config::load_from(&path).expect("first load");
        assert!(path.exists());
        assert_eq!(cfg.search.max_banner_labels, 4);

        std::fs::write(&path, "[search]\nmax_banner_labels = 2\n").expect("write");
        let cfg = Config::load_from(&path).expect("second load");
        assert_eq!(cfg.search.max_banner_labels, 2);
        assert_eq!(cfg.search.matched_notes_cap, 8);
    }
}
