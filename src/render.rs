//! Terminal status output.
//!
//! `RenderSink` is the contract the refresh run reports through; `Renderer`
//! is the stderr implementation, styled with crossterm when color is on.

use crossterm::style::{Color, Stylize};

const GLYPH_SECTION_BULLET: &str = "•";
const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";

/// Injectable rendering interface used by the refresh run.
pub trait RenderSink {
    /// Render a titled section line.
    fn section(&self, title: &str);
    /// Render one per-item status line.
    fn activity(&self, text: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
}

/// Default stderr renderer.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn section_line(&self, title: &str) -> String {
        if self.color {
            format!(
                "{} {}",
                GLYPH_SECTION_BULLET.with(Color::DarkGrey),
                title.with(Color::Cyan).bold()
            )
        } else {
            title.to_string()
        }
    }
}

impl RenderSink for Renderer {
    fn section(&self, title: &str) {
        eprintln!("{}", self.section_line(title));
    }

    fn activity(&self, text: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                GLYPH_SECTION_BULLET.with(Color::DarkGrey),
                text.with(Color::Grey)
            );
        } else {
            eprintln!("{text}");
        }
    }

    fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }
}
