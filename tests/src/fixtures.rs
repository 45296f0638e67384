use chrono::{DateTime, TimeZone, Utc};
use netmap_common::network::device::DeviceRecord;

pub const LOCAL_IP: &str = "192.168.1.50";

pub fn seen() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 10, 15, 0).unwrap()
}

/// Device whose scanner could not resolve a hostname.
pub fn unresolved(ip: &str) -> DeviceRecord {
    DeviceRecord::new(ip).with_hostname(ip).online(true).with_last_seen(seen())
}

pub fn named(ip: &str, hostname: &str) -> DeviceRecord {
    DeviceRecord::new(ip).with_hostname(hostname).online(true).with_last_seen(seen())
}

pub fn home_network() -> Vec<DeviceRecord> {
    vec![
        unresolved("192.168.1.1"),
        named("192.168.1.10", "iPhone").with_manufacturer("Apple Inc."),
        named("192.168.1.11", "galaxy-s24").with_manufacturer("SAMSUNG ELECTRO-MECHANICS"),
        named("192.168.1.20", "officejet").with_manufacturer("Hewlett Packard").with_ports([631, 9100]),
        named("192.168.1.21", "pixma").with_manufacturer("Canon Inc.").online(false),
        named("192.168.1.30", "nas").with_ports([22, 443]),
        named("192.168.1.31", "pi").with_ports([22]),
        named(LOCAL_IP, "workstation").with_mac("a8:a1:59:13:41:46"),
    ]
}
