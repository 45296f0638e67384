use netmap_common::network::device::DeviceRecord;
use netmap_core::classify::{DeviceKind, device_kind};
use netmap_core::topology::{NetworkSummary, is_likely_router, summarize};

use crate::fixtures::{LOCAL_IP, home_network, named, unresolved};

#[test]
fn no_devices_is_not_a_zero_summary() {
    let summary = summarize(&[], LOCAL_IP);
    assert!(summary.is_none(), "Expected empty state, received: {summary:?}");
}

#[test]
fn router_detection_uses_local_prefix() {
    let local_ip = "192.168.1.42";
    assert!(is_likely_router(&DeviceRecord::new("192.168.1.1"), local_ip));
    assert!(!is_likely_router(&DeviceRecord::new("192.168.2.1"), local_ip));
}

#[test]
fn malformed_local_address_counts_no_routers() {
    let devices = home_network();
    for local_ip in ["", "192.168.1", "not-an-ip", "192.168.1.50.1"] {
        let summary = summarize(&devices, local_ip).unwrap();
        assert_eq!(summary.router_device_count, 0, "{local_ip}");
        assert_eq!(summary.total_devices, devices.len());
    }
}

#[test]
fn counts_are_permutation_invariant() {
    let mut devices = home_network();
    let expected = summarize(&devices, LOCAL_IP);

    for shift in 0..devices.len() {
        devices.rotate_left(1);
        assert_eq!(summarize(&devices, LOCAL_IP), expected, "rotation {shift}");
    }
    devices.reverse();
    assert_eq!(summarize(&devices, LOCAL_IP), expected);
}

#[test]
fn home_network_summary() {
    assert_eq!(
        summarize(&home_network(), LOCAL_IP),
        Some(NetworkSummary {
            total_devices: 8,
            online_devices: 7,
            router_device_count: 1,
        })
    );
}

/// The two-record example: first record is an unresolved gateway, second an iPhone.
#[test]
fn gateway_and_iphone() {
    let local_ip = "192.168.1.50";
    let gateway = unresolved("192.168.1.1");
    let iphone = named("192.168.1.1", "iPhone").with_manufacturer("Apple Inc.");

    assert_eq!(device_kind(&gateway), DeviceKind::Router);
    assert_eq!(device_kind(&iphone), DeviceKind::AppleDevice);

    // A valid snapshot cannot repeat an address, so the phone gets its own.
    let iphone = named("192.168.1.23", "iPhone").with_manufacturer("Apple Inc.");
    assert_eq!(
        summarize(&[gateway, iphone], local_ip),
        Some(NetworkSummary {
            total_devices: 2,
            online_devices: 2,
            router_device_count: 1,
        })
    );
}
