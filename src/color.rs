//! Hex color helpers used by palette generation.
//!
//! Colors travel through the crate as the same `#rrggbb` strings that appear
//! in `.theme` files. These helpers parse them only when math is needed, so
//! accent colors pass through untouched unless they have to be adjusted.

use crate::error::ColorError;

/// Colors whose [`brightness`] is below this are treated as dark.
pub const DARK_THRESHOLD: f64 = 140.0;

/// Parse `#rgb`, `#rrggbb`, `rgb`, or `rrggbb` into channel values.
///
/// Three-digit shorthand expands by doubling each digit (`#f80` is `#ff8800`).
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(hex.to_string()));
    }

    // All characters are ASCII from here on, so byte slicing is safe.
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidDigit(hex.to_string()))
    };
    match digits.len() {
        3 => Ok((
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 => Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength(hex.to_string())),
    }
}

/// Format channel values as lowercase, zero-padded `#rrggbb`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Weighted luminance `0.299 R + 0.587 G + 0.114 B`, in `0.0..=255.0`.
///
/// A cheap lightness proxy, not perceptual luminance.
pub fn brightness(hex: &str) -> Result<f64, ColorError> {
    let (r, g, b) = hex_to_rgb(hex)?;
    let weighted = u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114;
    Ok(f64::from(weighted) / 1000.0)
}

/// True when `hex` is darker than [`DARK_THRESHOLD`].
pub fn is_dark(hex: &str) -> Result<bool, ColorError> {
    Ok(brightness(hex)? < DARK_THRESHOLD)
}

/// Linearly interpolate each channel from `a` toward `b` by `ratio`.
///
/// Channels truncate toward zero and are capped at 255, so mixing black and
/// white at `0.5` yields `#7f7f7f`.
pub fn mix_colors(a: &str, b: &str, ratio: f64) -> Result<String, ColorError> {
    let (r1, g1, b1) = hex_to_rgb(a)?;
    let (r2, g2, b2) = hex_to_rgb(b)?;
    let lerp = |from: u8, to: u8| {
        let from = f64::from(from);
        let value = from + (f64::from(to) - from) * ratio;
        // Float-to-int `as` truncates toward zero and saturates at 0.
        value.min(255.0) as u8
    };
    Ok(rgb_to_hex(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_rgb_accepts_long_and_short_forms() {
        assert_eq!(hex_to_rgb("#181926").expect("long"), (0x18, 0x19, 0x26));
        assert_eq!(hex_to_rgb("181926").expect("no hash"), (0x18, 0x19, 0x26));
        assert_eq!(hex_to_rgb("#f80").expect("short"), (0xff, 0x88, 0x00));
        assert_eq!(hex_to_rgb("FFF").expect("upper short"), (255, 255, 255));
    }

    #[test]
    fn hex_to_rgb_rejects_malformed_input() {
        assert_eq!(
            hex_to_rgb("#12345"),
            Err(ColorError::InvalidLength("#12345".to_string()))
        );
        assert_eq!(
            hex_to_rgb("#gggggg"),
            Err(ColorError::InvalidDigit("#gggggg".to_string()))
        );
        assert!(hex_to_rgb("#+1234").is_err());
        assert!(hex_to_rgb("").is_err());
    }

    #[test]
    fn rgb_to_hex_is_lowercase_and_padded() {
        assert_eq!(rgb_to_hex(0, 10, 255), "#000aff");
        assert_eq!(rgb_to_hex(0xAB, 0xCD, 0xEF), "#abcdef");
    }

    #[test]
    fn rgb_round_trip_over_channel_extremes() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (1, 128, 254), (17, 34, 51)] {
            assert_eq!(hex_to_rgb(&rgb_to_hex(r, g, b)).expect("round trip"), (r, g, b));
        }
    }

    #[test]
    fn brightness_bounds() {
        assert_eq!(brightness("#000000").expect("black"), 0.0);
        assert_eq!(brightness("#ffffff").expect("white"), 255.0);
        assert_eq!(brightness("#ff0000").expect("red"), 76.245);
    }

    #[test]
    fn is_dark_threshold() {
        assert!(is_dark("#000000").expect("black"));
        assert!(!is_dark("#ffffff").expect("white"));
        assert!(is_dark("#181926").expect("dracula bg"));
        assert!(!is_dark("#fdf6e3").expect("solarized light bg"));
    }

    #[test]
    fn mix_colors_truncates_midpoint() {
        assert_eq!(mix_colors("#000000", "#ffffff", 0.5).expect("mix"), "#7f7f7f");
        assert_eq!(mix_colors("#000000", "#ffffff", 0.0).expect("mix"), "#000000");
        assert_eq!(mix_colors("#000000", "#ffffff", 1.0).expect("mix"), "#ffffff");
        assert_eq!(mix_colors("#ffffff", "#000000", 0.5).expect("mix"), "#7f7f7f");
    }

    #[test]
    fn mix_colors_propagates_parse_errors() {
        assert!(mix_colors("#000000", "nope", 0.5).is_err());
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_round_trips_for_all_channels(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                prop_assert_eq!(hex_to_rgb(&rgb_to_hex(r, g, b)).expect("parse"), (r, g, b));
            }

            #[test]
            fn brightness_stays_in_channel_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let value = brightness(&rgb_to_hex(r, g, b)).expect("parse");
                prop_assert!((0.0..=255.0).contains(&value));
            }

            #[test]
            fn mix_stays_between_endpoints(
                a in any::<u8>(),
                b in any::<u8>(),
                ratio in 0.0f64..=1.0
            ) {
                let mixed = mix_colors(&rgb_to_hex(a, a, a), &rgb_to_hex(b, b, b), ratio).expect("mix");
                let (channel, _, _) = hex_to_rgb(&mixed).expect("parse");
                prop_assert!(channel >= a.min(b) && channel <= a.max(b));
            }
        }
    }
}
