//! Default configuration constants.

/// Directory under the config root holding this tool's own config file.
pub(super) const APP_DIR_NAME: &str = "hexchat-themer";
/// Config file name, both local (`./`) and global.
pub(super) const CONFIG_FILE_NAME: &str = "hexchat-themer.toml";
/// HexChat theme directory, relative to the home directory.
pub(super) const DEFAULT_THEME_DIR: &str = ".config/hexchat/themes";
/// Environment variable overriding the theme directory.
pub(super) const THEME_DIR_ENV: &str = "HEXCHAT_THEMER_DIR";
/// Conventional opt-out for colored terminal output.
pub(super) const NO_COLOR_ENV: &str = "NO_COLOR";
