//! Built-in theme table and default UI colors.
//!
//! Keys match the lowercased `.theme` file stem HexChat ships or users save.

use super::UiKey;
use super::UiKey::*;

/// Default UI colors applied under every theme's overrides.
pub(super) const DEFAULT_UI: [(UiKey, &str); 14] = [
    (BgColor, "#1e1e1e"),
    (FgColor, "#f8f8f2"),
    (SelectedBg, "#44475a"),
    (SelectedFg, "#ffffff"),
    (InputBg, "#2c2c2c"),
    (InputFg, "#ffffff"),
    (NicklistBg, "#252525"),
    (NicklistFg, "#dddddd"),
    (ChanlistBg, "#1e1e1e"),
    (ChanlistFg, "#f8f8f2"),
    (TreeBg, "#1e1e1e"),
    (TreeFg, "#f8f8f2"),
    (AwayUser, "#b8b8ff"),
    (Separator, "#6b6bff"),
];

/// One row of the static theme table.
pub(super) struct BuiltinTheme {
    pub name: &'static str,
    pub accent: [&'static str; 8],
    pub shift: usize,
    pub ui: &'static [(UiKey, &'static str)],
}

pub(super) const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        name: "dracula",
        accent: [
            "#f8f8f2", "#ff6e6e", "#50fa7b", "#bd93f9", "#ff79c6", "#8be9fd", "#ffb86c", "#ffd670",
        ],
        shift: 0,
        ui: &[
            (BgColor, "#181926"),
            (FgColor, "#f8f8f2"),
            (SelectedBg, "#44475a"),
            (SelectedFg, "#ffffff"),
            (InputBg, "#1f1f2a"),
            (InputFg, "#f8f8f2"),
            (NicklistBg, "#10101a"),
            (NicklistFg, "#f8f8f2"),
        ],
    },
    BuiltinTheme {
        name: "monokai",
        accent: [
            "#f8f8f2", "#ff6188", "#a9dc76", "#ffd866", "#78dce8", "#ab9df2", "#ff966c", "#ffffff",
        ],
        shift: 1,
        ui: &[
            (BgColor, "#272822"),
            (FgColor, "#f8f8f2"),
            (SelectedBg, "#49483e"),
            (SelectedFg, "#ffffff"),
            (InputBg, "#383830"),
            (InputFg, "#ffffff"),
            (NicklistBg, "#232320"),
            (NicklistFg, "#f8f8f2"),
        ],
    },
    BuiltinTheme {
        name: "solarized-dark",
        accent: [
            "#93a1a1", "#dc322f", "#b58900", "#268bd2", "#2aa198", "#859900", "#cb4b16", "#eee8d5",
        ],
        shift: 2,
        ui: &[
            (BgColor, "#002b36"),
            (FgColor, "#93a1a1"),
            (SelectedBg, "#073642"),
            (SelectedFg, "#fdf6e5"),
            (InputBg, "#073642"),
            (InputFg, "#fdf6e5"),
            (NicklistBg, "#001f27"),
            (NicklistFg, "#93a1a1"),
        ],
    },
    BuiltinTheme {
        name: "solarized-light",
        accent: [
            "#586e75", "#cb4b16", "#839496", "#b58900", "#268bd2", "#d33682", "#2aa198", "#073642",
        ],
        shift: 3,
        ui: &[
            (BgColor, "#fdf6e3"),
            (FgColor, "#586e75"),
            (SelectedBg, "#eee8d5"),
            (SelectedFg, "#073642"),
            (InputBg, "#eee8d5"),
            (InputFg, "#073642"),
            (NicklistBg, "#fdf6e3"),
            (NicklistFg, "#586e75"),
            (Separator, "#b58900"),
        ],
    },
    BuiltinTheme {
        name: "github-light",
        accent: [
            "#24292f", "#cf222e", "#116329", "#bf8700", "#0969da", "#8250df", "#1b7c83", "#ffffff",
        ],
        shift: 4,
        ui: &[
            (BgColor, "#ffffff"),
            (FgColor, "#24292f"),
            (SelectedBg, "#f6f8fa"),
            (SelectedFg, "#000000"),
            (InputBg, "#f6f8fa"),
            (InputFg, "#24292f"),
            (NicklistBg, "#f6f8fa"),
            (NicklistFg, "#24292f"),
            (Separator, "#d0d7de"),
        ],
    },
    BuiltinTheme {
        name: "ocean-blue",
        accent: [
            "#0f172a", "#38bdf8", "#28a745", "#f97316", "#1d4ed8", "#a855f7", "#22d3ee", "#fb7185",
        ],
        shift: 5,
        ui: &[
            (BgColor, "#020c1b"),
            (FgColor, "#e0f6ff"),
            (SelectedBg, "#0f172a"),
            (SelectedFg, "#a5f3fc"),
            (InputBg, "#06132a"),
            (InputFg, "#f0f9ff"),
            (NicklistBg, "#000f1f"),
            (NicklistFg, "#2dd4bf"),
        ],
    },
    BuiltinTheme {
        name: "forest-green",
        accent: [
            "#0b3d0b", "#16a34a", "#4ade80", "#a3e635", "#22c55e", "#15803d", "#bbf7d0", "#facc15",
        ],
        shift: 6,
        ui: &[
            (BgColor, "#0f1f0f"),
            (FgColor, "#d4f8d4"),
            (SelectedBg, "#134617"),
            (SelectedFg, "#d4f8d4"),
            (InputBg, "#102513"),
            (InputFg, "#f7ffe5"),
            (NicklistBg, "#0c120c"),
            (NicklistFg, "#b7ffb7"),
        ],
    },
    BuiltinTheme {
        name: "midnight-purple",
        accent: [
            "#1a1a2e", "#e0d7ff", "#9d4edd", "#d946ef", "#9333ea", "#7c3aed", "#60a5fa", "#c084fc",
        ],
        shift: 7,
        ui: &[
            (BgColor, "#0b071a"),
            (FgColor, "#ece2ff"),
            (SelectedBg, "#2e1b46"),
            (SelectedFg, "#ffffff"),
            (InputBg, "#141026"),
            (InputFg, "#f3e8ff"),
            (NicklistBg, "#05050f"),
            (NicklistFg, "#f6e9ff"),
        ],
    },
    BuiltinTheme {
        name: "sunset-warm",
        accent: [
            "#2c1a0b", "#ff4500", "#ff8c00", "#f4a261", "#e76f51", "#ffb703", "#fb8500", "#ffffff",
        ],
        shift: 8,
        ui: &[
            (BgColor, "#2e0f00"),
            (FgColor, "#ffe6c7"),
            (SelectedBg, "#ff8a00"),
            (SelectedFg, "#ffffff"),
            (InputBg, "#321600"),
            (InputFg, "#fff6e6"),
            (NicklistBg, "#1b0800"),
            (NicklistFg, "#ffe6c7"),
        ],
    },
    BuiltinTheme {
        name: "minimal-light",
        accent: [
            "#ffffff", "#cbd5f5", "#94a3b8", "#475569", "#6366f1", "#ec4899", "#22d3ee", "#a3e635",
        ],
        shift: 9,
        ui: &[
            (BgColor, "#fdfdfd"),
            (FgColor, "#0f172a"),
            (SelectedBg, "#e2e8f0"),
            (SelectedFg, "#0f172a"),
            (InputBg, "#e5e7eb"),
            (InputFg, "#0f172a"),
            (NicklistBg, "#f8fafc"),
            (NicklistFg, "#0f172a"),
        ],
    },
    BuiltinTheme {
        name: "high-contrast",
        accent: [
            "#ffffff", "#ff0080", "#7c3aed", "#16a34a", "#eab308", "#0ea5e9", "#ef4444", "#f97316",
        ],
        shift: 10,
        ui: &[
            (BgColor, "#050505"),
            (FgColor, "#ffffff"),
            (SelectedBg, "#111111"),
            (SelectedFg, "#00ffea"),
            (InputBg, "#111111"),
            (InputFg, "#ffffff"),
            (NicklistBg, "#050505"),
            (NicklistFg, "#ffffff"),
        ],
    },
    BuiltinTheme {
        name: "retro-terminal",
        accent: [
            "#001308", "#00ff23", "#00ffff", "#ffff00", "#ff00ff", "#ff6b6b", "#00a8ff", "#c084fc",
        ],
        shift: 11,
        ui: &[
            (BgColor, "#000c03"),
            (FgColor, "#c0f5c0"),
            (SelectedBg, "#003300"),
            (SelectedFg, "#f5ffef"),
            (InputBg, "#002200"),
            (InputFg, "#c5ffb5"),
            (NicklistBg, "#010a01"),
            (NicklistFg, "#c5ffb5"),
        ],
    },
    BuiltinTheme {
        name: "pastel-dreams",
        accent: [
            "#fff1f3", "#ffb3c1", "#a7f3d0", "#bae6fd", "#c084fc", "#f472b6", "#fb923c", "#fef08a",
        ],
        shift: 12,
        ui: &[
            (BgColor, "#fffaf0"),
            (FgColor, "#4c1d95"),
            (SelectedBg, "#dbeafe"),
            (SelectedFg, "#4c1d95"),
            (InputBg, "#fef3c7"),
            (InputFg, "#4c1d95"),
            (NicklistBg, "#fffaf0"),
            (NicklistFg, "#4c1d95"),
        ],
    },
    BuiltinTheme {
        name: "rainbow-pride",
        accent: [
            "#e40303", "#ff8c00", "#ffed00", "#008026", "#004dff", "#750787", "#f72585", "#00b4d8",
        ],
        shift: 13,
        ui: &[
            (BgColor, "#020217"),
            (FgColor, "#ffffff"),
            (SelectedBg, "#0f0f2f"),
            (SelectedFg, "#00b4d8"),
            (InputBg, "#040424"),
            (InputFg, "#ffffff"),
            (NicklistBg, "#01010f"),
            (NicklistFg, "#ffed00"),
        ],
    },
    BuiltinTheme {
        name: "cyberpunk-neon",
        accent: [
            "#0efbff", "#ff0180", "#b5179e", "#ffb703", "#2ec4b6", "#fdffb6", "#ff9f1c", "#8338ec",
        ],
        shift: 14,
        ui: &[
            (BgColor, "#010005"),
            (FgColor, "#faedf5"),
            (SelectedBg, "#1b0037"),
            (SelectedFg, "#ff8ee5"),
            (InputBg, "#0e001c"),
            (InputFg, "#faedf5"),
            (NicklistBg, "#040014"),
            (NicklistFg, "#00ffff"),
        ],
    },
    BuiltinTheme {
        name: "test",
        accent: [
            "#ffffff", "#f72585", "#7209b7", "#3a0ca3", "#4361ee", "#4cc9f0", "#ffb703", "#ff006e",
        ],
        shift: 16,
        ui: &[
            (BgColor, "#07070f"),
            (FgColor, "#ffffff"),
            (SelectedBg, "#151530"),
            (SelectedFg, "#00ffff"),
            (InputBg, "#0b0b1f"),
            (InputFg, "#fefefe"),
            (NicklistBg, "#05050c"),
            (NicklistFg, "#ffffff"),
        ],
    },
];
