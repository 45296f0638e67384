use netmap_common::config::DisplayPreferences;
use netmap_common::network::device::DeviceRecord;
use netmap_core::classify::{DeviceIcon, DeviceKind, classify, device_kind};
use netmap_core::map::classify_snapshot;

use crate::fixtures::{LOCAL_IP, home_network, named, unresolved};

/*************************************************************
                     Rule priority
**************************************************************/

#[test]
fn unresolved_hostname_is_router_whatever_else_is_known() {
    let vendors = [None, Some("Apple Inc."), Some("Samsung"), Some("HP"), Some("Canon")];
    let port_sets: [&[u16]; 4] = [&[], &[22], &[80], &[22, 80, 443]];

    for vendor in vendors {
        for ports in port_sets {
            let mut device = unresolved("10.0.0.1").with_ports(ports.iter().copied());
            if let Some(vendor) = vendor {
                device = device.with_manufacturer(vendor);
            }
            assert_eq!(
                device_kind(&device),
                DeviceKind::Router,
                "vendor {vendor:?} ports {ports:?}"
            );
        }
    }
}

#[test]
fn apple_in_any_case_is_apple_device() {
    for vendor in ["Apple", "apple, inc.", "APPLE INC", "Apple Computer"] {
        let device = named("10.0.0.7", "macbook").with_manufacturer(vendor);
        assert_eq!(device_kind(&device), DeviceKind::AppleDevice, "{vendor}");
    }
}

#[test]
fn apple_with_http_is_still_apple() {
    let device = named("10.0.0.7", "macbook")
        .with_manufacturer("Apple")
        .with_ports([80]);
    let result = classify(&device, LOCAL_IP);

    assert_eq!(result.type_label(), "Apple Device");
    assert_eq!(result.icon(), DeviceIcon::Apple);
}

#[test]
fn missing_fields_fall_through_to_computer() {
    let device = DeviceRecord::new("10.0.0.8");
    assert_eq!(device_kind(&device), DeviceKind::Computer);
}

/*************************************************************
                    Whole snapshot
**************************************************************/

#[test]
fn home_network_labels() {
    let devices = home_network();
    let map = classify_snapshot(&devices, LOCAL_IP, DisplayPreferences::default());

    let labels: Vec<&str> = map
        .devices
        .iter()
        .map(|entry| entry.classification.type_label())
        .collect();

    assert_eq!(
        labels,
        vec![
            "Router",
            "Apple Device",
            "Samsung Device",
            "Printer",
            "Camera/Printer",
            "Web Server",
            "SSH Server",
            "Computer",
        ]
    );
}

#[test]
fn home_network_flags() {
    let devices = home_network();
    let map = classify_snapshot(&devices, LOCAL_IP, DisplayPreferences::default());

    let local: Vec<&str> = map
        .devices
        .iter()
        .filter(|entry| entry.classification.is_local_device)
        .map(|entry| entry.device.ip_address.as_str())
        .collect();
    let routers: Vec<&str> = map
        .devices
        .iter()
        .filter(|entry| entry.classification.is_likely_router)
        .map(|entry| entry.device.ip_address.as_str())
        .collect();

    assert_eq!(local, vec![LOCAL_IP]);
    assert_eq!(routers, vec!["192.168.1.1"]);
}
