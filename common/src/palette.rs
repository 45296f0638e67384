//! Fixed color tables.
//!
//! Every [`ColorScheme`] owns one [`ColorPalette`] and every [`Theme`] one [`ThemeColors`].
//! Lookups by raw key fall back to the blue palette.

use std::fmt;

use crate::config::{ColorScheme, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
}

/// A drop shadow: a color plus its opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Rgb,
    pub alpha: f32,
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.color.r, self.color.g, self.color.b, self.alpha
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub text_secondary: Rgb,
    pub border: Rgb,
    pub shadow: Shadow,
}

const SUCCESS: Rgb = Rgb::hex(0x34C759);
const WARNING: Rgb = Rgb::hex(0xFF9500);
const ERROR: Rgb = Rgb::hex(0xFF3B30);

const fn palette(primary: u32, secondary: u32) -> ColorPalette {
    ColorPalette {
        primary: Rgb::hex(primary),
        secondary: Rgb::hex(secondary),
        accent: Rgb::hex(primary),
        success: SUCCESS,
        warning: WARNING,
        error: ERROR,
    }
}

/// Indexed by the [`ColorScheme`] discriminant.
static PALETTES: [ColorPalette; 5] = [
    palette(0x007AFF, 0x5AC8FA),
    palette(0x30D158, 0x32D74B),
    palette(0xAF52DE, 0xBF5AF2),
    palette(0xFF9F0A, 0xFFB340),
    palette(0xFF453A, 0xFF6961),
];

static LIGHT: ThemeColors = ThemeColors {
    background: Rgb::hex(0xF5F5F7),
    surface: Rgb::hex(0xFFFFFF),
    text: Rgb::hex(0x000000),
    text_secondary: Rgb::hex(0x6D6D70),
    border: Rgb::hex(0xD1D1D6),
    shadow: Shadow {
        color: Rgb::hex(0x000000),
        alpha: 0.1,
    },
};

static DARK: ThemeColors = ThemeColors {
    background: Rgb::hex(0x1C1C1E),
    surface: Rgb::hex(0x2C2C2E),
    text: Rgb::hex(0xFFFFFF),
    text_secondary: Rgb::hex(0x8E8E93),
    border: Rgb::hex(0x38383A),
    shadow: Shadow {
        color: Rgb::hex(0x000000),
        alpha: 0.3,
    },
};

impl ColorScheme {
    pub fn palette(self) -> &'static ColorPalette {
        &PALETTES[self as usize]
    }
}

impl Theme {
    pub fn colors(self) -> &'static ThemeColors {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Looks up a palette by its stored name. Unrecognized names get the blue palette.
pub fn palette_for_key(key: &str) -> &'static ColorPalette {
    key.parse::<ColorScheme>().unwrap_or_default().palette()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_follows_scheme_order() {
        assert_eq!(ColorScheme::Blue.palette().primary.to_string(), "#007AFF");
        assert_eq!(ColorScheme::Green.palette().secondary.to_string(), "#32D74B");
        assert_eq!(ColorScheme::Purple.palette().accent.to_string(), "#AF52DE");
        assert_eq!(ColorScheme::Orange.palette().primary.to_string(), "#FF9F0A");
        assert_eq!(ColorScheme::Red.palette().secondary.to_string(), "#FF6961");
    }

    #[test]
    fn status_colors_are_shared() {
        for scheme in ColorScheme::ALL {
            let palette = scheme.palette();
            assert_eq!(palette.success, SUCCESS);
            assert_eq!(palette.warning, WARNING);
            assert_eq!(palette.error, ERROR);
            assert_eq!(palette.accent, palette.primary);
        }
    }

    #[test]
    fn unknown_key_gets_blue() {
        assert_eq!(palette_for_key("chartreuse"), ColorScheme::Blue.palette());
        assert_eq!(palette_for_key("RED"), ColorScheme::Red.palette());
    }

    #[test]
    fn theme_colors() {
        assert_eq!(Theme::Dark.colors().background.to_string(), "#1C1C1E");
        assert_eq!(Theme::Light.colors().text.to_string(), "#000000");
        assert_eq!(Theme::Dark.colors().shadow.to_string(), "rgba(0, 0, 0, 0.3)");
        assert_eq!(Theme::Light.colors().shadow.to_string(), "rgba(0, 0, 0, 0.1)");
    }
}
