//! One refresh run over a theme directory.
//!
//! Files are handled one at a time in sorted name order. The first error
//! aborts the run; files already rewritten stay rewritten.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::RefreshError;
use crate::render::RenderSink;
use crate::theme_file::rewrite_theme_file;
use crate::themes::{theme_key_for_path, ThemeRegistry, ThemeSpec};

/// Inputs for [`refresh_themes`].
#[derive(Debug, Clone, Default)]
pub struct RefreshOptions {
    pub theme_dir: PathBuf,
    /// Apply this theme to every file instead of resolving by file name.
    pub forced_theme: Option<String>,
    /// Compute and report, but write nothing.
    pub dry_run: bool,
}

/// Per-file outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    /// Resolved theme name; `None` when the empty theme was used.
    pub theme: Option<String>,
    pub written: bool,
    pub palette_lines_dropped: usize,
    pub ui_replaced: usize,
    pub ui_appended: usize,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    pub theme_dir: PathBuf,
    /// False when the theme directory does not exist; nothing else was done.
    pub dir_found: bool,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
}

/// Rewrite every `*.theme` file in `options.theme_dir`.
///
/// A missing directory is reported through `sink` and is not an error.
pub fn refresh_themes(
    options: &RefreshOptions,
    registry: &ThemeRegistry,
    sink: &dyn RenderSink,
) -> Result<RefreshReport, RefreshError> {
    let forced = match options.forced_theme.as_deref() {
        Some(name) => Some(
            registry
                .get(name)
                .cloned()
                .ok_or_else(|| RefreshError::UnknownTheme(name.to_string()))?,
        ),
        None => None,
    };

    let mut report = RefreshReport {
        theme_dir: options.theme_dir.clone(),
        dir_found: options.theme_dir.is_dir(),
        dry_run: options.dry_run,
        files: Vec::new(),
    };
    if !report.dir_found {
        sink.warn(&format!(
            "theme directory does not exist: {}",
            options.theme_dir.display()
        ));
        return Ok(report);
    }

    for path in list_theme_files(&options.theme_dir)? {
        let spec = match &forced {
            Some(spec) => spec.clone(),
            None => registry.resolve_for_file(&path),
        };
        debug!(
            path = %path.display(),
            key = ?theme_key_for_path(&path),
            theme = %spec.name,
            "resolved theme"
        );
        let outcome = rewrite_theme_file(&path, &spec, options.dry_run)?;
        let file = FileReport {
            path: path.clone(),
            theme: theme_label(&spec),
            written: !options.dry_run,
            palette_lines_dropped: outcome.palette_lines_dropped,
            ui_replaced: outcome.ui_replaced,
            ui_appended: outcome.ui_appended,
        };
        sink.activity(&status_line(&file));
        report.files.push(file);
    }

    info!(count = report.files.len(), dry_run = options.dry_run, "refresh complete");
    sink.section(&summary_line(&report));
    Ok(report)
}

/// Regular files directly under `dir` whose names end in `.theme`, sorted.
pub fn list_theme_files(dir: &Path) -> Result<Vec<PathBuf>, RefreshError> {
    let list_err = |source| RefreshError::ListDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        let is_theme = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(".theme"));
        if is_theme && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn theme_label(spec: &ThemeSpec) -> Option<String> {
    (!spec.name.is_empty()).then(|| spec.name.clone())
}

fn status_line(file: &FileReport) -> String {
    let name = file
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.path.display().to_string());
    let verb = if file.written { "updated" } else { "would update" };
    let theme = file.theme.as_deref().unwrap_or("default");
    format!("{verb} {name} (theme: {theme})")
}

fn summary_line(report: &RefreshReport) -> String {
    let count = report.files.len();
    if report.dry_run {
        format!("{count} theme file(s) would be refreshed (dry run)")
    } else {
        format!("refreshed {count} theme file(s)")
    }
}
