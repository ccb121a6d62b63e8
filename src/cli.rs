//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::build_info;

/// Refresh HexChat theme files with generated text palettes and UI colors.
#[derive(Debug, Parser)]
#[command(name = "hexchat-themer", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Path to config file (default: ./hexchat-themer.toml or
    /// ~/.config/hexchat-themer/hexchat-themer.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Theme directory to refresh (default: ~/.config/hexchat/themes).
    #[arg(short = 'd', long = "dir")]
    pub dir: Option<PathBuf>,

    /// Apply this theme to every file instead of matching by file name.
    #[arg(short = 't', long = "theme", conflicts_with = "list")]
    pub theme: Option<String>,

    /// Report what would change without writing any file.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// List known theme names and exit.
    #[arg(long = "list")]
    pub list: bool,

    /// Print the run report (or theme list) as JSON on stdout.
    #[arg(long = "json")]
    pub json: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
