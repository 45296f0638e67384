use colored::*;
use netmap_common::config::{Config, ThemePreferences};
use netmap_common::palette::Rgb;

use crate::mprint;
use crate::terminal::{colors, print};

pub fn theme(prefs: &ThemePreferences, cfg: &Config) {
    let theme = prefs.current_theme();

    print::header("Preferences", cfg.quiet);
    let rows: [(&str, String); 5] = [
        ("Theme preference", prefs.theme_preference.to_string()),
        ("Theme", theme.to_string()),
        ("Color scheme", prefs.color_scheme.to_string()),
        ("Map layout", prefs.map_layout.to_string()),
        ("Network map", on_off(prefs.show_network_map).to_string()),
    ];
    let keys: Vec<&str> = rows.iter().map(|(key, _)| *key).collect();
    print::set_key_width(&keys);
    for (key, value) in rows {
        print::aligned_line(key, value);
    }

    mprint!();
    print::header("Palette", cfg.quiet);
    let palette = prefs.color_scheme.palette();
    print_swatches(&[
        ("Primary", palette.primary),
        ("Secondary", palette.secondary),
        ("Accent", palette.accent),
        ("Success", palette.success),
        ("Warning", palette.warning),
        ("Error", palette.error),
    ]);

    mprint!();
    print::header("Theme colors", cfg.quiet);
    let theme_colors = theme.colors();
    print_swatches(&[
        ("Background", theme_colors.background),
        ("Surface", theme_colors.surface),
        ("Text", theme_colors.text),
        ("Text (secondary)", theme_colors.text_secondary),
        ("Border", theme_colors.border),
    ]);
    print::aligned_line("Shadow", theme_colors.shadow.to_string());

    if cfg.quiet == 0 {
        print::end_of_program();
    }
}

fn print_swatches(swatches: &[(&str, Rgb)]) {
    let keys: Vec<&str> = swatches.iter().map(|(key, _)| *key).collect();
    print::set_key_width(&keys);
    for (key, rgb) in swatches {
        let swatch: ColoredString = "████".color(colors::rgb(*rgb));
        print::aligned_line(key, format!("{swatch} {rgb}"));
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "shown" } else { "hidden" }
}
