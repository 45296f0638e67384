use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::network::device::DeviceRecord;

/// One point-in-time result set of discovered devices.
///
/// Device order is the scanner's order and is kept through classification and rendering.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Address of the scanning host, if the scanner recorded it.
    #[serde(default, alias = "localIP", skip_serializing_if = "Option::is_none")]
    pub local_ip: Option<String>,
    #[serde(default)]
    pub devices: Vec<DeviceRecord>,
}

impl Snapshot {
    pub fn new(local_ip: Option<String>, devices: Vec<DeviceRecord>) -> Self {
        Self { local_ip, devices }
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Checks that no address appears twice.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.devices.len());
        for device in &self.devices {
            if !seen.insert(device.ip_address.as_str()) {
                return Err(SnapshotError::DuplicateAddress(device.ip_address.clone()));
            }
        }
        Ok(())
    }
}
