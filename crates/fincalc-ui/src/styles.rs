//! Ayu colour theme and styling helpers for fincalc output.
//!
//! Uses the Ayu Dark palette. Colour source:
//! <https://github.com/ayu-theme/ayu-colors>
//!
//! Solved values are green, warnings yellow, errors red. Category headers
//! use the accent colour; ids and hints are muted.

use owo_colors::OwoColorize;

use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Ayu Dark colour palette (RGB values)
// ---------------------------------------------------------------------------

const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c - bright green
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - bright yellow
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue

// ---------------------------------------------------------------------------
// Icons
// ---------------------------------------------------------------------------

pub const ICON_PASS: &str = "\u{2713}"; // check mark
pub const ICON_FAIL: &str = "\u{2716}"; // heavy x

// ---------------------------------------------------------------------------
// Helper: apply truecolor only when colour is supported
// ---------------------------------------------------------------------------

fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

fn color_bold_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

// ---------------------------------------------------------------------------
// Semantic render helpers
// ---------------------------------------------------------------------------

/// Renders text with warning (yellow) styling.
pub fn render_warn(s: &str) -> String {
    color_str(s, WARN)
}

/// Renders text with fail (red) styling.
pub fn render_fail(s: &str) -> String {
    color_str(s, FAIL)
}

/// Renders text with muted (gray) styling.
pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

/// Renders text with accent (blue) styling.
pub fn render_accent(s: &str) -> String {
    color_str(s, ACCENT)
}

pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

/// Renders a category header in uppercase with accent colour and bold.
pub fn render_category(s: &str) -> String {
    color_bold_str(&s.to_uppercase(), ACCENT)
}

/// Renders a solved value: bold green.
pub fn render_solved(s: &str) -> String {
    color_bold_str(s, PASS)
}

pub fn render_pass_icon() -> String {
    color_str(ICON_PASS, PASS)
}

pub fn render_fail_icon() -> String {
    color_str(ICON_FAIL, FAIL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::set_color_mode;
    use fincalc_config::ColorMode;

    #[test]
    fn plain_when_color_disabled() {
        set_color_mode(ColorMode::Never);
        assert_eq!(render_muted("hint"), "hint");
        assert_eq!(render_category("Internal pricing"), "INTERNAL PRICING");
        assert_eq!(render_solved("50.00"), "50.00");
        assert_eq!(render_fail_icon(), ICON_FAIL);
    }

    #[test]
    fn helpers_keep_text() {
        set_color_mode(ColorMode::Never);
        assert_eq!(render_warn("careful"), "careful");
        assert_eq!(render_accent("id"), "id");
        assert_eq!(render_bold("title"), "title");
        assert_eq!(render_pass_icon(), ICON_PASS);
    }
}
