use std::fs;
use std::path::PathBuf;

use netmap_common::error::SnapshotError;
use netmap_common::network::device::DeviceRecord;
use netmap_common::network::snapshot::Snapshot;
use netmap_common::source::SnapshotSource;
use serde_json::Value;
use tracing::info;

/// Reads a snapshot written by a scanner as JSON.
///
/// Accepts either a full document (`{"localIp": ..., "devices": [...]}`) or a bare array of
/// device records.
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for JsonSnapshotFile {
    fn load(&self) -> Result<Snapshot, SnapshotError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| SnapshotError::Io {
            path: self.path.clone(),
            source,
        })?;

        let snapshot = parse_snapshot(&raw).map_err(|source| SnapshotError::Decode {
            path: self.path.clone(),
            source,
        })?;
        snapshot.validate()?;

        info!(
            "Loaded {} devices from {}",
            snapshot.devices.len(),
            self.path.display()
        );
        Ok(snapshot)
    }
}

pub fn parse_snapshot(raw: &str) -> Result<Snapshot, serde_json::Error> {
    let value: Value = serde_json::from_str(raw)?;
    if value.is_array() {
        let devices: Vec<DeviceRecord> = serde_json::from_value(value)?;
        return Ok(Snapshot::new(None, devices));
    }
    serde_json::from_value(value)
}
