//! # Topology Summary
//!
//! Locates the scanning host and its likely gateway inside a snapshot and aggregates counts.
//!
//! Router detection is a heuristic: the `.1` address of the local /24 is assumed to be the
//! gateway. The prefix is taken textually from the local address, so a local address that
//! does not split into four dot-separated segments matches no device at all.

use netmap_common::network::device::DeviceRecord;
use tracing::debug;

/// The scanning host's address and the router candidate derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAddress {
    ip: String,
    router: Option<String>,
}

impl LocalAddress {
    /// Surrounding whitespace in `local_ip` is ignored.
    pub fn new(local_ip: &str) -> Self {
        let ip = local_ip.trim();
        let router = router_address(ip);
        if router.is_none() {
            debug!("Local address '{ip}' is not dotted-quad, router detection disabled");
        }

        Self {
            ip: ip.to_string(),
            router,
        }
    }

    pub fn is_local(&self, device: &DeviceRecord) -> bool {
        device.ip_address == self.ip
    }

    pub fn is_likely_router(&self, device: &DeviceRecord) -> bool {
        self.router.as_deref() == Some(device.ip_address.as_str())
    }

    /// Aggregates `devices` in a single pass. `None` marks a snapshot without devices.
    pub fn summarize(&self, devices: &[DeviceRecord]) -> Option<NetworkSummary> {
        if devices.is_empty() {
            return None;
        }

        let summary = devices
            .iter()
            .fold(NetworkSummary::default(), |mut summary, device| {
                summary.total_devices += 1;
                summary.online_devices += usize::from(device.is_online);
                summary.router_device_count += usize::from(self.is_likely_router(device));
                summary
            });

        Some(summary)
    }
}

/// Replaces the last segment of a dotted-quad address with `1`.
///
/// Returns `None` unless the address has exactly four non-empty segments.
pub fn router_address(local_ip: &str) -> Option<String> {
    let segments: Vec<&str> = local_ip.trim().split('.').collect();
    if segments.len() != 4 || segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }

    Some(format!("{}.{}.{}.1", segments[0], segments[1], segments[2]))
}

pub fn is_local_device(device: &DeviceRecord, local_ip: &str) -> bool {
    LocalAddress::new(local_ip).is_local(device)
}

pub fn is_likely_router(device: &DeviceRecord, local_ip: &str) -> bool {
    LocalAddress::new(local_ip).is_likely_router(device)
}

/// Counts over one snapshot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NetworkSummary {
    pub total_devices: usize,
    pub online_devices: usize,
    pub router_device_count: usize,
}

/// Aggregates a snapshot relative to `local_ip`.
///
/// An empty device list yields `None` rather than a zeroed summary, so callers can show a
/// dedicated "no devices" state.
pub fn summarize(devices: &[DeviceRecord], local_ip: &str) -> Option<NetworkSummary> {
    LocalAddress::new(local_ip).summarize(devices)
}
