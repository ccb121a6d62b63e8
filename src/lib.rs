//! hexchat-themer: refresh HexChat `.theme` files with generated palettes.
//!
//! Each theme file in the HexChat theme directory is matched to a named theme
//! by its file stem. The file keeps its own lines, gets a fixed block of role
//! colors for `text_color_0..15`, a generated 32-color palette for
//! `text_color_16..47`, and has its UI color keys upserted.
//!
//! # Quick start
//!
//! ```no_run
//! use hexchat_themer::config::load_config;
//! use hexchat_themer::refresh::{refresh_themes, RefreshOptions};
//! use hexchat_themer::render::Renderer;
//! use hexchat_themer::themes::ThemeRegistry;
//!
//! let config = load_config(None).unwrap();
//! let registry = ThemeRegistry::with_overrides(&config.themes).unwrap();
//! let options = RefreshOptions {
//!     theme_dir: config.theme_dir.clone(),
//!     ..RefreshOptions::default()
//! };
//! let report = refresh_themes(&options, &registry, &Renderer::new(false)).unwrap();
//! println!("{} files", report.files.len());
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod palette;
pub mod refresh;
pub mod render;
#[cfg(test)]
pub mod testsupport;
pub mod theme_file;
pub mod themes;
