//! Unified error types for the theme refresher.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ColorError
// ---------------------------------------------------------------------------

/// Errors when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Not 3 or 6 hex digits after the optional `#`.
    InvalidLength(String),
    /// Correct length, but a non-hex character is present.
    InvalidDigit(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(input) => {
                write!(f, "invalid hex color `{input}` (expected #rgb or #rrggbb)")
            }
            Self::InvalidDigit(input) => write!(f, "invalid hex digit in color `{input}`"),
        }
    }
}

impl std::error::Error for ColorError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ThemeFileError
// ---------------------------------------------------------------------------

/// Errors while rewriting a single `.theme` file.
#[derive(Debug)]
pub enum ThemeFileError {
    Read { path: PathBuf, source: std::io::Error },
    Write { path: PathBuf, source: std::io::Error },
    Color(ColorError),
}

impl fmt::Display for ThemeFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
            Self::Color(e) => write!(f, "color: {e}"),
        }
    }
}

impl std::error::Error for ThemeFileError {}

impl From<ColorError> for ThemeFileError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}

// ---------------------------------------------------------------------------
// RefreshError (top level)
// ---------------------------------------------------------------------------

/// Top-level error type for one refresh run.
#[derive(Debug)]
pub enum RefreshError {
    ThemeFile(ThemeFileError),
    /// The theme directory exists but could not be listed.
    ListDir { path: PathBuf, source: std::io::Error },
    /// A forced `--theme` name is not in the theme table.
    UnknownTheme(String),
}

impl fmt::Display for RefreshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThemeFile(e) => write!(f, "{e}"),
            Self::ListDir { path, source } => {
                write!(f, "failed to list {}: {source}", path.display())
            }
            Self::UnknownTheme(name) => write!(f, "unknown theme `{name}`"),
        }
    }
}

impl std::error::Error for RefreshError {}

impl From<ThemeFileError> for RefreshError {
    fn from(e: ThemeFileError) -> Self {
        Self::ThemeFile(e)
    }
}
