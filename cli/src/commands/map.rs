use colored::*;
use netmap_common::config::{Config, ThemePreferences};
use netmap_core::map::{ClassifiedDevice, NetworkMap, classify_snapshot};
use netmap_core::topology::NetworkSummary;

use crate::commands::{SnapshotArgs, load_snapshot};
use crate::mprint;
use crate::terminal::{colors, format, print};

const EMPTY_HINT: &str = "Run a network scan to see the topology.";

pub fn map(args: &SnapshotArgs, prefs: &ThemePreferences, cfg: &Config) -> anyhow::Result<()> {
    let (snapshot, local_ip) = load_snapshot(args)?;
    let network: NetworkMap<'_> = classify_snapshot(&snapshot.devices, &local_ip, prefs.display());

    render(&network, prefs.show_network_map, cfg);
    Ok(())
}

/// One block of the map output, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    NoDevices { hint: &'static str },
    Found(NetworkSummary),
    Devices,
    Statistics(NetworkSummary),
}

/// Decides what gets printed. With `show_devices` off only the statistics remain.
fn sections(network: &NetworkMap<'_>, show_devices: bool, cfg: &Config) -> Vec<Section> {
    let Some(summary) = network.summary else {
        return vec![Section::NoDevices { hint: EMPTY_HINT }];
    };

    let mut sections = vec![Section::Found(summary)];
    if show_devices && cfg.quiet < 2 {
        sections.push(Section::Devices);
    }
    sections.push(Section::Statistics(summary));
    sections
}

pub fn render(network: &NetworkMap<'_>, show_devices: bool, cfg: &Config) {
    for section in sections(network, show_devices, cfg) {
        match section {
            Section::NoDevices { hint } => no_devices_found(hint, cfg),
            Section::Found(summary) => {
                print::header("Network Topology Map", cfg.quiet);
                print_found(&summary, cfg);
            }
            Section::Devices => {
                mprint!();
                print::header("Devices", cfg.quiet);
                print_devices(&network.devices, cfg);
            }
            Section::Statistics(summary) => {
                mprint!();
                print_statistics(network, &summary, cfg);
            }
        }
    }
}

fn no_devices_found(hint: &str, cfg: &Config) {
    print::header("No devices found", cfg.quiet);
    print::no_results(hint);
}

fn print_found(summary: &NetworkSummary, cfg: &Config) {
    let palette = colors::get();
    let total: ColoredString = format!("{} devices", summary.total_devices)
        .color(palette.primary)
        .bold();
    let online: ColoredString = format!("{} online", summary.online_devices)
        .color(palette.success)
        .bold();
    let output: String = format!("Found {total} ({online})");

    match cfg.quiet {
        0 => print::centerln(&output),
        _ => print::print_status(output),
    }
}

fn print_devices(devices: &[ClassifiedDevice<'_>], cfg: &Config) {
    for (idx, entry) in devices.iter().enumerate() {
        print::tree_head(idx, &format::device_head(entry));
        if cfg.quiet == 0 {
            print::as_tree_one_level(format::device_details(entry));
        }
        if idx + 1 != devices.len() {
            mprint!();
        }
    }
}

fn print_statistics(network: &NetworkMap<'_>, summary: &NetworkSummary, cfg: &Config) {
    print::header("Network Statistics", cfg.quiet);

    let display = &network.display;
    let rows: [(&str, String); 6] = [
        ("Total devices", summary.total_devices.to_string()),
        ("Online devices", summary.online_devices.to_string()),
        ("Router devices", summary.router_device_count.to_string()),
        ("Layout", display.layout.to_string()),
        ("Color scheme", display.color_scheme.to_string()),
        ("Theme", display.theme.to_string()),
    ];

    let keys: Vec<&str> = rows.iter().map(|(key, _)| *key).collect();
    print::set_key_width(&keys);
    for (key, value) in rows {
        print::aligned_line(key, value);
    }

    if cfg.quiet == 0 {
        print::fat_separator();
    }
}
