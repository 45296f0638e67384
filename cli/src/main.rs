mod commands;
mod terminal;

use commands::{CommandLine, Commands, map, stats, theme};
use netmap_common::config::{Config, ThemePreferences};
use terminal::{colors, logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        no_color: commands.no_color,
    };

    if cfg.no_color {
        colored::control::set_override(false);
    }
    logging::init(&cfg);

    let prefs = ThemePreferences::resolve(&commands.raw_preferences());
    colors::init(&prefs.display());
    print::title(cfg.quiet);

    match commands.command {
        Commands::Map(args) => map::map(&args, &prefs, &cfg),
        Commands::Stats(args) => stats::stats(&args, &prefs, &cfg),
        Commands::Theme => {
            theme::theme(&prefs, &cfg);
            Ok(())
        }
    }
}
