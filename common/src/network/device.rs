//! # Device Record
//!
//! One device as reported by a scan. Records are immutable once a snapshot is built; the
//! `with_*` methods exist for assembling them.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    /// Dotted-quad address. Unique within a snapshot.
    #[serde(alias = "ip")]
    pub ip_address: String,
    #[serde(default, alias = "mac", skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    /// Free-text vendor name, usually from an OUI lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Equal to `ip_address` when the scanner could not resolve a name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeSet::is_empty"
    )]
    pub open_ports: BTreeSet<u16>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_online: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
}

/// Scanners written in other languages emit `null` for unset fields; treat it like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl DeviceRecord {
    pub fn new(ip_address: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            mac_address: None,
            manufacturer: None,
            hostname: None,
            open_ports: BTreeSet::new(),
            is_online: false,
            last_seen: None,
        }
    }

    pub fn with_mac(mut self, mac: impl Into<String>) -> Self {
        self.mac_address = Some(mac.into());
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_ports(mut self, ports: impl IntoIterator<Item = u16>) -> Self {
        self.open_ports.extend(ports);
        self
    }

    pub fn online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    pub fn with_last_seen(mut self, last_seen: DateTime<Utc>) -> Self {
        self.last_seen = Some(last_seen);
        self
    }

    /// `true` when the hostname is the address itself, i.e. nothing was resolved.
    pub fn has_sentinel_hostname(&self) -> bool {
        self.hostname.as_deref() == Some(self.ip_address.as_str())
    }

    /// The hostname, unless it is missing or the sentinel.
    pub fn resolved_hostname(&self) -> Option<&str> {
        self.hostname
            .as_deref()
            .filter(|name| *name != self.ip_address)
    }

    pub fn has_open_port(&self, port: u16) -> bool {
        self.open_ports.contains(&port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_hostname_is_not_resolved() {
        let device = DeviceRecord::new("10.0.0.1").with_hostname("10.0.0.1");
        assert!(device.has_sentinel_hostname());
        assert_eq!(device.resolved_hostname(), None);
    }

    #[test]
    fn missing_hostname_is_not_sentinel() {
        let device = DeviceRecord::new("10.0.0.1");
        assert!(!device.has_sentinel_hostname());
        assert_eq!(device.resolved_hostname(), None);
    }

    #[test]
    fn decodes_minimal_record() {
        let device: DeviceRecord =
            serde_json::from_str(r#"{"ip": "192.168.1.7", "isOnline": true}"#).unwrap();

        assert_eq!(device.ip_address, "192.168.1.7");
        assert!(device.is_online);
        assert!(device.open_ports.is_empty());
        assert_eq!(device.manufacturer, None);
        assert_eq!(device.last_seen, None);
    }

    #[test]
    fn null_fields_decode_as_absent() {
        let json = r#"{
            "ip": "10.0.0.1",
            "openPorts": null,
            "manufacturer": null,
            "hostname": null,
            "isOnline": null,
            "lastSeen": null
        }"#;
        let device: DeviceRecord = serde_json::from_str(json).unwrap();

        assert_eq!(device, DeviceRecord::new("10.0.0.1"));
    }

    #[test]
    fn decodes_full_record() {
        let json = r#"{
            "ipAddress": "192.168.1.20",
            "macAddress": "a8:a1:59:13:41:46",
            "manufacturer": "Canon Inc.",
            "hostname": "office-printer",
            "openPorts": [631, 80, 80],
            "isOnline": false,
            "lastSeen": "2025-03-01T10:15:00Z"
        }"#;
        let device: DeviceRecord = serde_json::from_str(json).unwrap();

        assert_eq!(device.mac_address.as_deref(), Some("a8:a1:59:13:41:46"));
        assert_eq!(device.resolved_hostname(), Some("office-printer"));
        assert_eq!(device.open_ports, BTreeSet::from([80, 631]));
        assert!(device.has_open_port(631));
        assert!(device.last_seen.is_some());
    }
}
