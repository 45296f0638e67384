pub mod map;
pub mod stats;
pub mod theme;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use netmap_common::config::RawPreferences;
use netmap_common::network::snapshot::Snapshot;
use netmap_common::source::SnapshotSource;
use netmap_core::snapshot::JsonSnapshotFile;
use tracing::warn;

#[derive(Parser)]
#[command(name = "netmap")]
#[command(about = "Classify and map the devices of a network scan.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Theme preference: auto, light or dark
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Accent colors: blue, green, purple, orange or red
    #[arg(long, global = true)]
    pub color_scheme: Option<String>,

    /// Map layout hint: hierarchical, radial or grid
    #[arg(long, global = true)]
    pub layout: Option<String>,

    /// Skip the device list and show statistics only
    #[arg(long, global = true)]
    pub hide_map: bool,

    /// Reduce output, repeat for less
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the network map of a scan snapshot
    #[command(alias = "m")]
    Map(SnapshotArgs),
    /// Print the statistics of a scan snapshot
    #[command(alias = "s")]
    Stats(SnapshotArgs),
    /// Show the resolved theme and color palette
    #[command(alias = "t")]
    Theme,
}

#[derive(Args)]
pub struct SnapshotArgs {
    /// JSON file produced by a scanner
    pub snapshot: PathBuf,

    /// Address of the scanning host, overrides the one stored in the snapshot
    #[arg(long)]
    pub local_ip: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Preference values as given on the command line. Unset flags stay `None`.
    pub fn raw_preferences(&self) -> RawPreferences {
        RawPreferences {
            theme_preference: self.theme.clone(),
            color_scheme: self.color_scheme.clone(),
            show_network_map: self.hide_map.then_some(false),
            map_layout: self.layout.clone(),
        }
    }
}

/// Loads the snapshot and settles which local address to classify against.
pub fn load_snapshot(args: &SnapshotArgs) -> anyhow::Result<(Snapshot, String)> {
    let source = JsonSnapshotFile::new(&args.snapshot);
    let snapshot = source
        .load()
        .with_context(|| format!("could not load snapshot {}", args.snapshot.display()))?;

    let local_ip = match args.local_ip.clone().or_else(|| snapshot.local_ip.clone()) {
        Some(local_ip) => local_ip,
        None => {
            warn!("No local address given, local device and router detection are disabled");
            String::new()
        }
    };

    Ok((snapshot, local_ip))
}
