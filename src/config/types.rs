//! Configuration data model.
//!
//! `FileConfig` mirrors the TOML file as written; `Config` is the resolved
//! runtime view after env overrides and directory resolution.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for `*.theme` files.
    pub theme_dir: PathBuf,
    pub display: DisplayConfig,
    /// Custom themes and built-in overrides keyed by theme name.
    pub themes: BTreeMap<String, ThemeOverride>,
}

/// Terminal output settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// One `[themes.<name>]` table.
///
/// Unset fields keep the built-in's values when the name matches a built-in.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ThemeOverride {
    pub accent: Option<Vec<String>>,
    pub shift: Option<usize>,
    #[serde(default)]
    pub ui: BTreeMap<String, String>,
}

/// Raw TOML file shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub theme_dir: Option<String>,
    pub display: DisplayConfig,
    pub themes: BTreeMap<String, ThemeOverride>,
}
