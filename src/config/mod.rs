//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`HEXCHAT_THEMER_DIR`, `NO_COLOR`)
//! 2. TOML file specified via `--config`
//! 3. `./hexchat-themer.toml` in the current directory
//! 4. `$XDG_CONFIG_HOME/hexchat-themer/hexchat-themer.toml`
//!    (or `~/.config/hexchat-themer/hexchat-themer.toml`)
//! 5. Built-in defaults
//!
//! The `--dir` CLI flag is applied by the caller on top of all of these.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use tracing::debug;

mod defaults;
mod env;
mod sources;
mod types;

use defaults::DEFAULT_THEME_DIR;
use env::{apply_env_overrides, expand_home};
use sources::read_config_text_with_sources;
pub use types::{Config, DisplayConfig, ThemeOverride};
use types::FileConfig;

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&Path>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
        dirs::home_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot, FHome>(
    path_override: Option<&Path>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
    home_dir: FHome,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
    FHome: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text_with_sources(path_override, &read_file, &config_root)?;
    debug!(?source, "loaded config source");
    let mut file: FileConfig = toml::from_str(&text)?;
    apply_env_overrides(&mut file, &env_lookup);

    let home = home_dir();
    let theme_dir = match file.theme_dir.as_deref() {
        Some(raw) => expand_home(raw, home.as_ref()),
        None => home.map(|h| h.join(DEFAULT_THEME_DIR)).ok_or_else(|| {
            ConfigError::Invalid(
                "unable to resolve home directory for the default theme directory".to_string(),
            )
        })?,
    };

    Ok(Config {
        theme_dir,
        display: file.display,
        themes: file.themes,
    })
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn load_with(
        path_override: Option<&Path>,
        files: &[(&str, &str)],
        env: &[(&str, &str)],
    ) -> Result<Config, ConfigError> {
        let files: BTreeMap<PathBuf, String> = files
            .iter()
            .map(|(p, t)| (PathBuf::from(p), t.to_string()))
            .collect();
        let env: BTreeMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_config_from_sources(
            path_override,
            |path| {
                files.get(path).cloned().ok_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::NotFound, "no such file")
                })
            },
            |name| env.get(name).cloned(),
            || Some(PathBuf::from("/cfg")),
            || Some(PathBuf::from("/home/me")),
        )
    }

    #[test]
    fn defaults_when_no_file_exists() {
        let config = load_with(None, &[], &[]).expect("load");
        assert_eq!(config.theme_dir, PathBuf::from("/home/me/.config/hexchat/themes"));
        assert!(config.display.color);
        assert!(config.themes.is_empty());
    }

    #[test]
    fn local_file_wins_over_global() {
        let config = load_with(
            None,
            &[
                ("hexchat-themer.toml", "theme_dir = \"/local\""),
                ("/cfg/hexchat-themer/hexchat-themer.toml", "theme_dir = \"/global\""),
            ],
            &[],
        )
        .expect("load");
        assert_eq!(config.theme_dir, PathBuf::from("/local"));
    }

    #[test]
    fn global_file_is_used_without_local() {
        let config = load_with(
            None,
            &[("/cfg/hexchat-themer/hexchat-themer.toml", "theme_dir = \"~/t\"")],
            &[],
        )
        .expect("load");
        assert_eq!(config.theme_dir, PathBuf::from("/home/me/t"));
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_with(Some(Path::new("/missing.toml")), &[], &[]).expect_err("must fail");
        assert!(err.to_string().starts_with("io:"), "got: {err}");
    }

    #[test]
    fn env_overrides_file_values() {
        let config = load_with(
            Some(Path::new("/x.toml")),
            &[("/x.toml", "theme_dir = \"/file\"\n[display]\ncolor = true\n")],
            &[("HEXCHAT_THEMER_DIR", "/env"), ("NO_COLOR", "1")],
        )
        .expect("load");
        assert_eq!(config.theme_dir, PathBuf::from("/env"));
        assert!(!config.display.color);
    }

    #[test]
    fn parses_theme_tables() {
        let text = r##"
[themes.dracula]
shift = 3

[themes.dracula.ui]
bg_color = "#000000"

[themes.mine]
accent = ["#111111", "#222"]
"##;
        let config = load_with(Some(Path::new("/x.toml")), &[("/x.toml", text)], &[]).expect("load");
        let dracula = config.themes.get("dracula").expect("dracula");
        assert_eq!(dracula.shift, Some(3));
        assert_eq!(dracula.accent, None);
        assert_eq!(dracula.ui.get("bg_color").map(String::as_str), Some("#000000"));
        let mine = config.themes.get("mine").expect("mine");
        assert_eq!(
            mine.accent,
            Some(vec!["#111111".to_string(), "#222".to_string()])
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = load_with(
            Some(Path::new("/x.toml")),
            &[("/x.toml", "theme_directory = \"/oops\"")],
            &[],
        )
        .expect_err("must reject");
        assert!(err.to_string().starts_with("toml:"), "got: {err}");
    }

    #[test]
    fn missing_home_without_theme_dir_is_an_error() {
        let err = load_config_from_sources(
            None,
            |_| Err(std::io::Error::new(std::io::ErrorKind::NotFound, "none")),
            |_| None,
            || None,
            || None,
        )
        .expect_err("must fail");
        assert!(err.to_string().contains("home directory"), "got: {err}");
    }
}
