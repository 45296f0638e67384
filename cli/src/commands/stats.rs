use netmap_common::config::{Config, ThemePreferences};
use netmap_core::map::classify_snapshot;

use crate::commands::{SnapshotArgs, load_snapshot, map};

pub fn stats(args: &SnapshotArgs, prefs: &ThemePreferences, cfg: &Config) -> anyhow::Result<()> {
    let (snapshot, local_ip) = load_snapshot(args)?;
    let network = classify_snapshot(&snapshot.devices, &local_ip, prefs.display());

    map::render(&network, false, cfg);
    Ok(())
}
