// ABOUTME: Widget color palette, parameterized by an accent color
// Installed process-wide exactly once; repeat installs are no-ops

use std::sync::OnceLock;

use ratatui::style::Color;

/// Fallback accent when none is given or the value does not parse
pub const DEFAULT_ACCENT: Color = Color::Rgb(61, 153, 112);

/// The full palette consumed by render code. No render function hardcodes a
/// color; everything goes through the installed theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn with_accent(accent: Color) -> Self {
        Self {
            accent,
            background: Color::Rgb(22, 26, 24),
            panel: Color::Rgb(28, 33, 30),
            text: Color::Rgb(222, 226, 222),
            muted: Color::Rgb(125, 135, 128),
            border: Color::Rgb(58, 68, 60),
            error: Color::Rgb(220, 80, 80),
            success: Color::Rgb(100, 200, 100),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::with_accent(DEFAULT_ACCENT)
    }
}

static INSTALLED: OnceLock<Theme> = OnceLock::new();

/// Install the process-wide theme from an optional `#rrggbb` accent. The
/// first call wins; any later call, with any accent, returns the already
/// installed theme unchanged.
pub fn install(accent: Option<&str>) -> &'static Theme {
    INSTALLED.get_or_init(|| Theme::with_accent(accent.and_then(parse_hex).unwrap_or(DEFAULT_ACCENT)))
}

/// Parse a `#rrggbb` (or bare `rrggbb`) hex color
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_hex_accent() {
        assert_eq!(parse_hex("#3d9970"), Some(Color::Rgb(61, 153, 112)));
        assert_eq!(parse_hex("ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex(" #00FF00 "), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex("#abc"), None);
        assert_eq!(parse_hex("#gggggg"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn test_with_accent_sets_only_accent() {
        let theme = Theme::with_accent(Color::Rgb(1, 2, 3));
        assert_eq!(theme.accent, Color::Rgb(1, 2, 3));
        assert_eq!(theme.text, Theme::default().text);
    }

    #[test]
    fn test_install_is_idempotent() {
        // Single test exercising the process-wide slot: however many times
        // install runs, exactly one theme exists and later accents are
        // ignored.
        let first = install(Some("#112233"));
        let second = install(Some("#445566"));
        let third = install(None);

        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(second, third));
        assert_eq!(first.accent, Color::Rgb(0x11, 0x22, 0x33));
    }
}
