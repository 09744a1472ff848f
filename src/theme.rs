//! Theme data model: built-in palettes and resolution from config.
//!
//! Two built-in palettes (a VS Code "Dark+"-style default and a light
//! variant) plus per-color overrides from the config file.

use ratatui::style::Color;

use crate::config::{ThemeColorsConfig, ThemeConfig};

// ── Runtime theme colors ─────────────────────────────────────────────────────

/// All runtime colors used in the UI.
///
/// Constructed from a config-level `ThemeConfig` via [`resolve_theme`].
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Sidebar (explorer / search / problems)
    pub sidebar_bg: Color,
    pub sidebar_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub folder_fg: Color,
    pub file_fg: Color,

    // Editor
    pub editor_bg: Color,
    pub editor_fg: Color,
    pub line_nr_fg: Color,
    pub highlight_bg: Color,
    pub keyword_fg: Color,
    pub string_fg: Color,
    pub comment_fg: Color,

    // Tabs
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_inactive_fg: Color,

    // Status bar
    pub status_bg: Color,
    pub status_fg: Color,

    // Borders & chrome
    pub border_fg: Color,
    pub border_focused_fg: Color,

    // Semantic colors (not configurable, consistent across themes)
    pub error_fg: Color,
    pub warning_fg: Color,
    pub success_fg: Color,
    pub info_fg: Color,
    pub dim_fg: Color,
    pub prompt_fg: Color,
}

// ── Built-in palettes ────────────────────────────────────────────────────────

/// Dark theme modeled on the VS Code Dark+ palette.
pub fn dark_theme() -> ThemeColors {
    ThemeColors {
        sidebar_bg: Color::Rgb(37, 37, 38),    // #252526
        sidebar_fg: Color::Rgb(204, 204, 204), // #cccccc
        selected_bg: Color::Rgb(55, 55, 61),   // #37373d
        selected_fg: Color::Rgb(255, 255, 255),
        folder_fg: Color::Rgb(86, 156, 214), // #569cd6 (blue)
        file_fg: Color::Rgb(204, 204, 204),

        editor_bg: Color::Rgb(30, 30, 30), // #1e1e1e
        editor_fg: Color::Rgb(212, 212, 212), // #d4d4d4
        line_nr_fg: Color::Rgb(133, 133, 133), // #858585
        highlight_bg: Color::Rgb(38, 79, 120), // #264f78 (selection blue)
        keyword_fg: Color::Rgb(86, 156, 214), // #569cd6
        string_fg: Color::Rgb(206, 145, 120), // #ce9178
        comment_fg: Color::Rgb(106, 153, 85), // #6a9955

        tab_active_bg: Color::Rgb(30, 30, 30),
        tab_active_fg: Color::Rgb(255, 255, 255),
        tab_inactive_fg: Color::Rgb(150, 150, 150),

        status_bg: Color::Rgb(0, 122, 204), // #007acc
        status_fg: Color::Rgb(255, 255, 255),

        border_fg: Color::Rgb(60, 60, 60),
        border_focused_fg: Color::Rgb(0, 122, 204),

        error_fg: Color::Rgb(244, 71, 71),    // #f44747
        warning_fg: Color::Rgb(204, 167, 0),  // #cca700
        success_fg: Color::Rgb(137, 209, 133), // #89d185
        info_fg: Color::Rgb(86, 156, 214),
        dim_fg: Color::Rgb(133, 133, 133),
        prompt_fg: Color::Rgb(106, 153, 85), // #6a9955
    }
}

/// Light theme — complementary light palette.
pub fn light_theme() -> ThemeColors {
    ThemeColors {
        sidebar_bg: Color::Rgb(243, 243, 243),
        sidebar_fg: Color::Rgb(59, 59, 59),
        selected_bg: Color::Rgb(214, 226, 251),
        selected_fg: Color::Rgb(0, 0, 0),
        folder_fg: Color::Rgb(0, 90, 175),
        file_fg: Color::Rgb(59, 59, 59),

        editor_bg: Color::Rgb(255, 255, 255),
        editor_fg: Color::Rgb(36, 36, 36),
        line_nr_fg: Color::Rgb(160, 160, 160),
        highlight_bg: Color::Rgb(205, 230, 255),
        keyword_fg: Color::Rgb(0, 0, 255),
        string_fg: Color::Rgb(163, 21, 21),
        comment_fg: Color::Rgb(0, 128, 0),

        tab_active_bg: Color::Rgb(255, 255, 255),
        tab_active_fg: Color::Rgb(0, 0, 0),
        tab_inactive_fg: Color::Rgb(120, 120, 120),

        status_bg: Color::Rgb(0, 122, 204),
        status_fg: Color::Rgb(255, 255, 255),

        border_fg: Color::Rgb(200, 200, 200),
        border_focused_fg: Color::Rgb(0, 122, 204),

        error_fg: Color::Rgb(205, 49, 49),
        warning_fg: Color::Rgb(191, 139, 0),
        success_fg: Color::Rgb(0, 128, 0),
        info_fg: Color::Rgb(0, 90, 175),
        dim_fg: Color::Rgb(140, 140, 140),
        prompt_fg: Color::Rgb(0, 128, 0),
    }
}

// ── Resolution ───────────────────────────────────────────────────────────────

/// Parse a `#rrggbb` hex string into a color.
fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn apply(target: &mut Color, value: &Option<String>) {
    if let Some(color) = value.as_deref().and_then(parse_hex) {
        *target = color;
    }
}

/// Resolve the runtime theme from config: pick the base scheme, then apply
/// any custom color overrides.
pub fn resolve_theme(config: &ThemeConfig) -> ThemeColors {
    let mut colors = match config.scheme.as_deref() {
        Some("light") => light_theme(),
        _ => dark_theme(),
    };
    if let Some(custom) = &config.custom {
        apply_overrides(&mut colors, custom);
    }
    colors
}

fn apply_overrides(colors: &mut ThemeColors, custom: &ThemeColorsConfig) {
    apply(&mut colors.sidebar_bg, &custom.sidebar_bg);
    apply(&mut colors.sidebar_fg, &custom.sidebar_fg);
    apply(&mut colors.selected_bg, &custom.selected_bg);
    apply(&mut colors.selected_fg, &custom.selected_fg);
    apply(&mut colors.folder_fg, &custom.folder_fg);
    apply(&mut colors.file_fg, &custom.file_fg);
    apply(&mut colors.editor_bg, &custom.editor_bg);
    apply(&mut colors.editor_fg, &custom.editor_fg);
    apply(&mut colors.line_nr_fg, &custom.line_nr_fg);
    apply(&mut colors.status_bg, &custom.status_bg);
    apply(&mut colors.status_fg, &custom.status_fg);
    apply(&mut colors.border_fg, &custom.border_fg);
    apply(&mut colors.tab_active_bg, &custom.tab_active_bg);
    apply(&mut colors.tab_inactive_fg, &custom.tab_inactive_fg);
}
