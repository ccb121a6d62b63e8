//! Environment overrides applied after the config file is parsed.

use std::path::PathBuf;

use super::defaults::{NO_COLOR_ENV, THEME_DIR_ENV};
use super::types::FileConfig;

/// Overlay env-provided values onto the parsed file config.
pub(super) fn apply_env_overrides<FEnv>(file: &mut FileConfig, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(dir) = env_lookup(THEME_DIR_ENV).and_then(|v| normalized_string(&v)) {
        file.theme_dir = Some(dir);
    }
    // NO_COLOR disables color whenever it is present, regardless of value.
    if env_lookup(NO_COLOR_ENV).is_some() {
        file.display.color = false;
    }
}

/// Expand a leading `~/` against the home directory.
pub(super) fn expand_home(raw: &str, home: Option<&PathBuf>) -> PathBuf {
    match (raw.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if raw == "~" => home.cloned().unwrap_or_else(|| PathBuf::from(raw)),
        _ => PathBuf::from(raw),
    }
}

fn normalized_string(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
