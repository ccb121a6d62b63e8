//! Theme table, UI color sets, and theme resolution.
//!
//! Every `.theme` file is matched to a [`ThemeSpec`] by its lowercased file
//! stem. Unknown stems fall back to the empty theme, which still yields a full
//! palette from the base rotation and the default UI colors.

mod builtin;

use std::collections::BTreeMap;
use std::path::Path;

use crate::color::{hex_to_rgb, is_dark};
use crate::config::ThemeOverride;
use crate::error::{ColorError, ConfigError};
use crate::palette::{build_palette, normalize_palette};

use builtin::{BUILTIN_THEMES, DEFAULT_UI};

/// Most accent colors a theme may declare.
pub const MAX_ACCENT_COLORS: usize = 8;

/// Recognized non-palette UI color keys, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UiKey {
    BgColor,
    FgColor,
    SelectedBg,
    SelectedFg,
    InputBg,
    InputFg,
    NicklistBg,
    NicklistFg,
    ChanlistBg,
    ChanlistFg,
    TreeBg,
    TreeFg,
    AwayUser,
    Separator,
}

impl UiKey {
    /// Key as it appears on the left of `key=value` in a `.theme` file.
    pub fn key(self) -> &'static str {
        match self {
            Self::BgColor => "bg_color",
            Self::FgColor => "fg_color",
            Self::SelectedBg => "selected_bg",
            Self::SelectedFg => "selected_fg",
            Self::InputBg => "input_bg",
            Self::InputFg => "input_fg",
            Self::NicklistBg => "nicklist_bg",
            Self::NicklistFg => "nicklist_fg",
            Self::ChanlistBg => "chanlist_bg",
            Self::ChanlistFg => "chanlist_fg",
            Self::TreeBg => "tree_bg",
            Self::TreeFg => "tree_fg",
            Self::AwayUser => "away_user",
            Self::Separator => "separator",
        }
    }

    pub fn all() -> &'static [UiKey] {
        &[
            Self::BgColor,
            Self::FgColor,
            Self::SelectedBg,
            Self::SelectedFg,
            Self::InputBg,
            Self::InputFg,
            Self::NicklistBg,
            Self::NicklistFg,
            Self::ChanlistBg,
            Self::ChanlistFg,
            Self::TreeBg,
            Self::TreeFg,
            Self::AwayUser,
            Self::Separator,
        ]
    }

    /// Look up a key by its file/config spelling.
    pub fn from_key(key: &str) -> Option<UiKey> {
        let normalized = key.trim().to_ascii_lowercase();
        Self::all().iter().copied().find(|k| k.key() == normalized)
    }
}

/// Fully merged UI colors: defaults with a theme's overrides on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiColorSet {
    colors: BTreeMap<UiKey, String>,
}

impl UiColorSet {
    /// The default UI colors alone.
    pub fn defaults() -> Self {
        let colors = DEFAULT_UI
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect();
        Self { colors }
    }

    /// Defaults merged with `overrides`; overrides win.
    pub fn with_overrides(overrides: &BTreeMap<UiKey, String>) -> Self {
        let mut set = Self::defaults();
        for (key, value) in overrides {
            set.colors.insert(*key, value.clone());
        }
        set
    }

    pub fn get(&self, key: UiKey) -> &str {
        self.colors.get(&key).map(String::as_str).unwrap_or_default()
    }

    /// Every key with its color, in write order.
    pub fn iter(&self) -> impl Iterator<Item = (UiKey, &str)> {
        self.colors.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

/// Accent colors, rotation shift, and UI overrides for one named theme.
///
/// `Default` is the empty theme used for files with no matching theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSpec {
    pub name: String,
    pub accent: Vec<String>,
    pub shift: usize,
    pub ui: BTreeMap<UiKey, String>,
}

impl ThemeSpec {
    pub fn ui_colors(&self) -> UiColorSet {
        UiColorSet::with_overrides(&self.ui)
    }

    /// Build and normalize the 32-slot generated palette for this theme.
    pub fn palette(&self) -> Result<Vec<String>, ColorError> {
        let ui = self.ui_colors();
        let bg_is_dark = is_dark(ui.get(UiKey::BgColor))?;
        let palette = build_palette(&self.accent, self.shift);
        normalize_palette(&palette, ui.get(UiKey::FgColor), bg_is_dark)
    }

    fn from_builtin(row: &builtin::BuiltinTheme) -> Self {
        Self {
            name: row.name.to_string(),
            accent: row.accent.iter().map(|c| c.to_string()).collect(),
            shift: row.shift,
            ui: row
                .ui
                .iter()
                .map(|(key, value)| (*key, value.to_string()))
                .collect(),
        }
    }
}

/// Theme table with built-ins and optional config-supplied themes.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, ThemeSpec>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeRegistry {
    /// Registry holding only the built-in theme table.
    pub fn builtin() -> Self {
        let themes = BUILTIN_THEMES
            .iter()
            .map(|row| (row.name.to_string(), ThemeSpec::from_builtin(row)))
            .collect();
        Self { themes }
    }

    /// Built-ins plus `[themes.<name>]` entries from config.
    ///
    /// An entry named like a built-in replaces the fields it sets and merges
    /// its UI colors on top of the built-in's; other names add new themes.
    pub fn with_overrides(overrides: &BTreeMap<String, ThemeOverride>) -> Result<Self, ConfigError> {
        let mut registry = Self::builtin();
        for (name, entry) in overrides {
            let normalized = normalize_theme_name(name);
            if normalized.is_empty() {
                return Err(ConfigError::Invalid("theme name cannot be empty".to_string()));
            }
            let base = registry
                .themes
                .remove(&normalized)
                .unwrap_or_else(|| ThemeSpec {
                    name: normalized.clone(),
                    ..ThemeSpec::default()
                });
            let merged = apply_theme_override(base, entry)?;
            registry.themes.insert(normalized, merged);
        }
        Ok(registry)
    }

    /// Stable ordered names.
    pub fn names(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&ThemeSpec> {
        self.themes.get(&normalize_theme_name(name))
    }

    /// Resolve the spec for a theme file, falling back to the empty theme.
    pub fn resolve_for_file(&self, path: &Path) -> ThemeSpec {
        theme_key_for_path(path)
            .and_then(|key| self.themes.get(&key))
            .cloned()
            .unwrap_or_default()
    }
}

/// Theme lookup key for `path`: the file name without `.theme`, lowercased.
pub fn theme_key_for_path(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(".theme")?;
    Some(stem.to_lowercase())
}

fn normalize_theme_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn apply_theme_override(base: ThemeSpec, entry: &ThemeOverride) -> Result<ThemeSpec, ConfigError> {
    let mut spec = base;
    if let Some(accent) = &entry.accent {
        if accent.len() > MAX_ACCENT_COLORS {
            return Err(ConfigError::Invalid(format!(
                "theme `{}` declares {} accent colors (max {MAX_ACCENT_COLORS})",
                spec.name,
                accent.len()
            )));
        }
        for color in accent {
            validate_color(&spec.name, "accent", color)?;
        }
        spec.accent = accent.iter().map(|c| c.trim().to_string()).collect();
    }
    if let Some(shift) = entry.shift {
        spec.shift = shift;
    }
    for (key, value) in &entry.ui {
        let Some(ui_key) = UiKey::from_key(key) else {
            return Err(ConfigError::Invalid(format!(
                "theme `{}` sets unknown UI color `{key}`",
                spec.name
            )));
        };
        validate_color(&spec.name, ui_key.key(), value)?;
        spec.ui.insert(ui_key, value.trim().to_string());
    }
    Ok(spec)
}

fn validate_color(theme: &str, field: &str, value: &str) -> Result<(), ConfigError> {
    hex_to_rgb(value)
        .map(|_| ())
        .map_err(|e| ConfigError::Invalid(format!("theme `{theme}` {field}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn override_entry(
        accent: Option<&[&str]>,
        shift: Option<usize>,
        ui: &[(&str, &str)],
    ) -> ThemeOverride {
        ThemeOverride {
            accent: accent.map(|colors| colors.iter().map(|c| c.to_string()).collect()),
            shift,
            ui: ui
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn builtin_registry_contains_table() {
        let registry = ThemeRegistry::builtin();
        let names = registry.names();
        assert_eq!(names.len(), 16);
        assert!(names.contains(&"dracula".to_string()));
        assert!(names.contains(&"solarized-light".to_string()));
        let dracula = registry.get("Dracula").expect("case-insensitive lookup");
        assert_eq!(dracula.accent.len(), 8);
        assert_eq!(dracula.shift, 0);
        assert_eq!(dracula.ui.get(&UiKey::BgColor).map(String::as_str), Some("#181926"));
    }

    #[test]
    fn builtin_colors_are_all_valid_hex() {
        let registry = ThemeRegistry::builtin();
        for name in registry.names() {
            let spec = registry.get(&name).expect("listed theme");
            assert!(spec.accent.len() <= MAX_ACCENT_COLORS, "{name}");
            for color in spec.accent.iter().chain(spec.ui.values()) {
                assert!(hex_to_rgb(color).is_ok(), "{name}: {color}");
            }
            assert_eq!(spec.palette().expect("palette").len(), 32);
        }
    }

    #[test]
    fn ui_key_round_trip_and_order() {
        for key in UiKey::all() {
            assert_eq!(UiKey::from_key(key.key()), Some(*key));
        }
        assert_eq!(UiKey::from_key(" BG_COLOR "), Some(UiKey::BgColor));
        assert_eq!(UiKey::from_key("text_color_3"), None);
        let keys: Vec<_> = UiColorSet::defaults().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, UiKey::all().to_vec());
    }

    #[test]
    fn ui_overrides_win_over_defaults() {
        let registry = ThemeRegistry::builtin();
        let ui = registry.get("solarized-light").expect("theme").ui_colors();
        assert_eq!(ui.get(UiKey::BgColor), "#fdf6e3");
        assert_eq!(ui.get(UiKey::Separator), "#b58900");
        // Not overridden by the theme, so the default stays.
        assert_eq!(ui.get(UiKey::AwayUser), "#b8b8ff");
        assert_eq!(ui.iter().count(), 14);
    }

    #[test]
    fn empty_spec_uses_defaults_and_rotation() {
        let spec = ThemeSpec::default();
        assert_eq!(spec.ui_colors(), UiColorSet::defaults());
        let raw = build_palette(&[], 0);
        let palette = spec.palette().expect("palette");
        assert_eq!(palette[0], raw[0]);
        // #560bad is too dim for the default dark background.
        assert_eq!(raw[11], "#560bad");
        assert_eq!(
            palette[11],
            crate::color::mix_colors("#560bad", "#f8f8f2", 0.65).expect("mix")
        );
    }

    #[test]
    fn dark_theme_palette_lifts_near_black_accent() {
        let registry = ThemeRegistry::builtin();
        let forest = registry.get("forest-green").expect("theme");
        let palette = forest.palette().expect("palette");
        // #0b3d0b mixed 65% toward fg #d4f8d4.
        assert_eq!(palette[0], "#8db68d");
        assert_eq!(palette[1], "#16a34a");
    }

    #[test]
    fn resolve_for_file_uses_lowercased_stem() {
        let registry = ThemeRegistry::builtin();
        let spec = registry.resolve_for_file(&PathBuf::from("/themes/Monokai.theme"));
        assert_eq!(spec.name, "monokai");
        let unknown = registry.resolve_for_file(&PathBuf::from("/themes/mine.theme"));
        assert_eq!(unknown, ThemeSpec::default());
    }

    #[test]
    fn theme_key_requires_theme_suffix() {
        assert_eq!(
            theme_key_for_path(Path::new("a/Ocean-Blue.theme")),
            Some("ocean-blue".to_string())
        );
        assert_eq!(theme_key_for_path(Path::new("a/notes.txt")), None);
    }

    #[test]
    fn config_override_merges_into_builtin() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "Dracula".to_string(),
            override_entry(None, Some(4), &[("bg_color", "#000000"), ("separator", "#abc")]),
        );
        let registry = ThemeRegistry::with_overrides(&overrides).expect("registry");
        let dracula = registry.get("dracula").expect("theme");
        assert_eq!(dracula.shift, 4);
        assert_eq!(dracula.accent[0], "#f8f8f2");
        let ui = dracula.ui_colors();
        assert_eq!(ui.get(UiKey::BgColor), "#000000");
        assert_eq!(ui.get(UiKey::Separator), "#abc");
        assert_eq!(ui.get(UiKey::InputBg), "#1f1f2a");
    }

    #[test]
    fn config_override_adds_new_theme() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "mine".to_string(),
            override_entry(Some(&["#123456"][..]), None, &[]),
        );
        let registry = ThemeRegistry::with_overrides(&overrides).expect("registry");
        assert_eq!(registry.names().len(), 17);
        let mine = registry.get("mine").expect("theme");
        assert_eq!(mine.name, "mine");
        assert_eq!(mine.accent, vec!["#123456".to_string()]);
        assert_eq!(mine.shift, 0);
    }

    #[test]
    fn config_accent_colors_are_trimmed() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "mine".to_string(),
            override_entry(Some(&[" #000000 ", "#abcdef "][..]), None, &[]),
        );
        let registry = ThemeRegistry::with_overrides(&overrides).expect("registry");
        let mine = registry.get("mine").expect("theme");
        assert_eq!(mine.accent, vec!["#000000".to_string(), "#abcdef".to_string()]);
        let palette = mine.palette().expect("palette");
        // Black accents take the foreground color instead of a legibility mix.
        assert_eq!(palette[0], "#f8f8f2");
        assert_eq!(palette[1], "#abcdef");
    }

    #[test]
    fn config_override_rejects_bad_values() {
        let cases = [
            override_entry(Some(&["#12"][..]), None, &[]),
            override_entry(None, None, &[("bogus_key", "#ffffff")]),
            override_entry(None, None, &[("bg_color", "blue")]),
            override_entry(Some(&["#fff"; 9][..]), None, &[]),
        ];
        for entry in cases {
            let mut overrides = BTreeMap::new();
            overrides.insert("mine".to_string(), entry);
            let err = ThemeRegistry::with_overrides(&overrides).expect_err("must reject");
            assert!(err.to_string().starts_with("invalid config:"), "got: {err}");
        }
    }
}
