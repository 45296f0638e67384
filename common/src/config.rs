//! # Configuration
//!
//! Runtime switches of the application and the user's display preferences.
//!
//! Preferences arrive untyped from whatever store holds them ([`RawPreferences`]) and are
//! resolved once at startup into [`ThemePreferences`]. Nothing reads them globally afterwards:
//! the resolved value is passed to whoever needs it.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::PreferenceError;

pub struct Config {
    /// Reduces terminal output.
    ///
    /// `1` hides headers and device details, `2` prints only the final summary.
    pub quiet: u8,
    /// Disables ANSI colors in the terminal output.
    pub no_color: bool,
}

/// The theme the user asked for. `Auto` is resolved by [`ThemePreferences::current_theme`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

/// The theme actually used for rendering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Accent color family. The discriminant indexes the palette table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    #[default]
    Blue = 0,
    Green = 1,
    Purple = 2,
    Orange = 3,
    Red = 4,
}

/// Layout hint for the network map. Does not affect classification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapLayout {
    #[default]
    Hierarchical,
    Radial,
    Grid,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [Self::Auto, Self::Light, Self::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 5] = [
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Orange,
        Self::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

impl MapLayout {
    pub const ALL: [MapLayout; 3] = [Self::Hierarchical, Self::Radial, Self::Grid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hierarchical => "hierarchical",
            Self::Radial => "radial",
            Self::Grid => "grid",
        }
    }
}

impl FromStr for ThemePreference {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(PreferenceError::new("theme", s, "auto, light, dark")),
        }
    }
}

impl FromStr for ColorScheme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blue" => Ok(Self::Blue),
            "green" => Ok(Self::Green),
            "purple" => Ok(Self::Purple),
            "orange" => Ok(Self::Orange),
            "red" => Ok(Self::Red),
            _ => Err(PreferenceError::new(
                "color scheme",
                s,
                "blue, green, purple, orange, red",
            )),
        }
    }
}

impl FromStr for MapLayout {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hierarchical" => Ok(Self::Hierarchical),
            "radial" => Ok(Self::Radial),
            "grid" => Ok(Self::Grid),
            _ => Err(PreferenceError::new(
                "map layout",
                s,
                "hierarchical, radial, grid",
            )),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MapLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preference values as a store hands them out: every field may be missing, enums are plain
/// strings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawPreferences {
    pub theme_preference: Option<String>,
    pub color_scheme: Option<String>,
    pub show_network_map: Option<bool>,
    pub map_layout: Option<String>,
}

/// Fully resolved display preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreferences {
    pub theme_preference: ThemePreference,
    pub color_scheme: ColorScheme,
    pub show_network_map: bool,
    pub map_layout: MapLayout,
}

impl Default for ThemePreferences {
    fn default() -> Self {
        Self {
            theme_preference: ThemePreference::Auto,
            color_scheme: ColorScheme::Blue,
            show_network_map: true,
            map_layout: MapLayout::Hierarchical,
        }
    }
}

impl ThemePreferences {
    /// Resolves raw store values, substituting defaults for anything missing or unrecognized.
    ///
    /// The network map is shown unless it was explicitly switched off.
    pub fn resolve(raw: &RawPreferences) -> Self {
        Self {
            theme_preference: parse_or_default(raw.theme_preference.as_deref()),
            color_scheme: parse_or_default(raw.color_scheme.as_deref()),
            show_network_map: raw.show_network_map != Some(false),
            map_layout: parse_or_default(raw.map_layout.as_deref()),
        }
    }

    /// The theme to render with. There is no system theme detection, so `auto` means light.
    pub fn current_theme(&self) -> Theme {
        match self.theme_preference {
            ThemePreference::Auto | ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
        }
    }

    /// The subset of preferences that travels with a classified snapshot to the renderer.
    pub fn display(&self) -> DisplayPreferences {
        DisplayPreferences {
            layout: self.map_layout,
            color_scheme: self.color_scheme,
            theme: self.current_theme(),
        }
    }
}

/// Cosmetic settings passed through classification untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPreferences {
    pub layout: MapLayout,
    pub color_scheme: ColorScheme,
    pub theme: Theme,
}

fn parse_or_default<T>(value: Option<&str>) -> T
where
    T: FromStr<Err = PreferenceError> + Default + fmt::Display,
{
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return T::default();
    };

    value.parse().unwrap_or_else(|err: PreferenceError| {
        let fallback = T::default();
        warn!("{err}, falling back to '{fallback}'");
        fallback
    })
}
