//! Line-oriented rewrite of HexChat `.theme` files.
//!
//! A rewrite keeps every non-palette line in place, drops all existing
//! `text_color_*` lines, appends the reserved role colors and the generated
//! palette, then upserts the UI color keys. The file is replaced whole.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ThemeFileError;
use crate::palette::PALETTE_SIZE;
use crate::themes::{ThemeSpec, UiColorSet};

/// Prefix shared by all palette keys (`text_color_0` .. `text_color_47`).
pub const PALETTE_KEY_PREFIX: &str = "text_color_";

/// First index used by generated palette entries.
pub const GENERATED_OFFSET: usize = 16;

/// Fixed role colors for `text_color_0..15`, independent of theme.
///
/// Slots 0-5 color regular, voiced, halfop, op, admin and owner users.
pub const RESERVED_ROLE_COLORS: [&str; GENERATED_OFFSET] = [
    "#FFFFFF", "#CCCCCC", "#000080", "#008000", "#FF0000", "#800000", "#800080", "#FFA500",
    "#FFFF00", "#00FF00", "#008080", "#00FFFF", "#0000FF", "#FF00FF", "#808080", "#C0C0C0",
];

/// Comment written above the reserved block.
pub const RESERVED_HEADER: &str = "# IRC user mode colors (preserved for visibility)";
/// Comment written above the generated block.
pub const GENERATED_HEADER: &str = "# Theme-specific vibrant text palette (auto-generated)";

/// Result of rewriting one file's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub lines: Vec<String>,
    /// Existing `text_color_*` lines that were dropped.
    pub palette_lines_dropped: usize,
    /// UI keys whose first existing line was replaced in place.
    pub ui_replaced: usize,
    /// UI keys that had no line and were appended.
    pub ui_appended: usize,
}

impl RewriteOutcome {
    /// File contents: lines joined with `\n`, newline-terminated.
    pub fn contents(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Rewrite `lines` with the reserved block, `palette`, and `ui` colors.
///
/// Only the first line starting with `key=` is updated for each UI key;
/// later duplicates are left as they are. Lines equal to
/// [`RESERVED_HEADER`] or [`GENERATED_HEADER`] are dropped even when the
/// user wrote them, since both headers are regenerated with their blocks.
pub fn rewrite_lines<S: AsRef<str>>(
    lines: &[S],
    palette: &[String],
    ui: &UiColorSet,
) -> RewriteOutcome {
    let mut out: Vec<String> = Vec::with_capacity(lines.len() + GENERATED_OFFSET + PALETTE_SIZE + 2);
    let mut palette_lines_dropped = 0;
    for line in lines {
        let line = line.as_ref();
        let trimmed = line.trim();
        if trimmed.starts_with(PALETTE_KEY_PREFIX) {
            palette_lines_dropped += 1;
            continue;
        }
        // Our own block headers are regenerated below.
        if trimmed == RESERVED_HEADER || trimmed == GENERATED_HEADER {
            continue;
        }
        out.push(line.to_string());
    }

    out.push(RESERVED_HEADER.to_string());
    for (index, color) in RESERVED_ROLE_COLORS.iter().enumerate() {
        out.push(format!("{PALETTE_KEY_PREFIX}{index}={color}"));
    }
    out.push(GENERATED_HEADER.to_string());
    for (index, color) in palette.iter().enumerate() {
        out.push(format!("{PALETTE_KEY_PREFIX}{}={color}", index + GENERATED_OFFSET));
    }

    let mut ui_replaced = 0;
    let mut ui_appended = 0;
    for (key, value) in ui.iter() {
        let prefix = format!("{}=", key.key());
        let entry = format!("{}={value}", key.key());
        match out.iter().position(|line| line.trim().starts_with(&prefix)) {
            Some(index) => {
                out[index] = entry;
                ui_replaced += 1;
            }
            None => {
                out.push(entry);
                ui_appended += 1;
            }
        }
    }

    RewriteOutcome {
        lines: out,
        palette_lines_dropped,
        ui_replaced,
        ui_appended,
    }
}

/// Rewrite the text of a theme file for `spec`.
pub fn rewrite_theme_text(text: &str, spec: &ThemeSpec) -> Result<RewriteOutcome, ThemeFileError> {
    let palette = spec.palette()?;
    let lines: Vec<&str> = text.lines().collect();
    Ok(rewrite_lines(&lines, &palette, &spec.ui_colors()))
}

/// Read, rewrite, and (unless `dry_run`) replace the file at `path`.
pub fn rewrite_theme_file(
    path: &Path,
    spec: &ThemeSpec,
    dry_run: bool,
) -> Result<RewriteOutcome, ThemeFileError> {
    let text = fs::read_to_string(path).map_err(|source| ThemeFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let outcome = rewrite_theme_text(&text, spec)?;
    debug!(
        path = %path.display(),
        theme = %spec.name,
        dropped = outcome.palette_lines_dropped,
        replaced = outcome.ui_replaced,
        appended = outcome.ui_appended,
        "rewrote theme lines"
    );
    if !dry_run {
        write_atomically(path, &outcome.contents())?;
    }
    Ok(outcome)
}

/// Replace `path` with `contents` via a sibling temp file and rename.
///
/// Symlinks are resolved first so the link target is replaced and the link
/// survives. The existing file's permissions carry over to the new file.
pub fn write_atomically(path: &Path, contents: &str) -> Result<(), ThemeFileError> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let tmp_path = temp_path_for(&target);
    let write_err = |source| ThemeFileError::Write {
        path: tmp_path.clone(),
        source,
    };
    fs::write(&tmp_path, contents).map_err(write_err)?;
    if let Ok(meta) = fs::metadata(&target) {
        if let Err(source) = fs::set_permissions(&tmp_path, meta.permissions()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_err(source));
        }
    }
    fs::rename(&tmp_path, &target).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        ThemeFileError::Write {
            path: target.clone(),
            source,
        }
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
