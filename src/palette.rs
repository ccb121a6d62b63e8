//! Generated text palette (`text_color_16..47`).
//!
//! A palette is built from a theme's accent colors, padded out from a shared
//! base rotation, then normalized against the theme's foreground so that
//! near-black entries stay readable on dark backgrounds.

use crate::color::{brightness, mix_colors};
use crate::error::ColorError;

/// Number of generated palette slots.
pub const PALETTE_SIZE: usize = 32;

/// Fallback colors used for palette slots past the accent list.
pub const BASE_ROTATION: [&str; 19] = [
    "#ffffff", "#ff5f52", "#f9c74f", "#90be6d", "#43aa8b", "#4d908e", "#577590", "#277da1",
    "#9d4edd", "#8338ec", "#7209b7", "#560bad", "#ff006e", "#ff9f1c", "#fb5607", "#ffb703",
    "#06d6a0", "#118ab2", "#073b4c",
];

/// Entries exactly this color are placeholders and take the foreground color.
const PLACEHOLDER_BLACK: &str = "#000000";
/// On dark backgrounds, entries dimmer than this get blended toward the foreground.
const LEGIBILITY_FLOOR: f64 = 60.0;
/// How far toward the foreground an illegible entry is blended.
const LEGIBILITY_MIX: f64 = 0.65;

/// Expand `accent` into exactly [`PALETTE_SIZE`] colors.
///
/// Slot `i` takes `accent[i]` verbatim when present, otherwise
/// `BASE_ROTATION[(i + shift) % 19]`.
pub fn build_palette(accent: &[String], shift: usize) -> Vec<String> {
    (0..PALETTE_SIZE)
        .map(|i| match accent.get(i) {
            Some(color) => color.clone(),
            None => {
                let slot = (i % BASE_ROTATION.len() + shift % BASE_ROTATION.len())
                    % BASE_ROTATION.len();
                BASE_ROTATION[slot].to_string()
            }
        })
        .collect()
}

/// Replace placeholder black with `fg`, and lift near-black entries on dark
/// backgrounds by mixing them toward `fg`.
///
/// Each entry is decided independently of the others.
pub fn normalize_palette(
    palette: &[String],
    fg: &str,
    bg_is_dark: bool,
) -> Result<Vec<String>, ColorError> {
    palette
        .iter()
        .map(|color| {
            if color.eq_ignore_ascii_case(PLACEHOLDER_BLACK) {
                return Ok(fg.to_string());
            }
            if bg_is_dark && brightness(color)? < LEGIBILITY_FLOOR {
                return mix_colors(color, fg, LEGIBILITY_MIX);
            }
            Ok(color.clone())
        })
        .collect()
}
