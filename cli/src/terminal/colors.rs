//! Terminal colors derived from the resolved display preferences.
//!
//! Accents come from the color scheme's palette, muted text and separators from the theme.
//! The set is fixed once at startup; before that the blue/light defaults apply.

use std::sync::OnceLock;

use colored::Color;
use netmap_common::config::DisplayPreferences;
use netmap_common::palette::Rgb;

pub const TEXT_DEFAULT: Color = Color::White;

#[derive(Debug, Clone, Copy)]
pub struct TerminalColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    pub separator: Color,
}

static COLORS: OnceLock<TerminalColors> = OnceLock::new();

pub fn init(display: &DisplayPreferences) {
    let _ = COLORS.set(TerminalColors::from_preferences(display));
}

pub fn get() -> &'static TerminalColors {
    COLORS.get_or_init(|| TerminalColors::from_preferences(&DisplayPreferences::default()))
}

pub fn rgb(color: Rgb) -> Color {
    Color::TrueColor {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl TerminalColors {
    pub fn from_preferences(display: &DisplayPreferences) -> Self {
        let palette = display.color_scheme.palette();
        let theme = display.theme.colors();

        Self {
            primary: rgb(palette.primary),
            secondary: rgb(palette.secondary),
            accent: rgb(palette.accent),
            success: rgb(palette.success),
            warning: rgb(palette.warning),
            error: rgb(palette.error),
            muted: rgb(theme.text_secondary),
            separator: Color::BrightBlack,
        }
    }
}
