use std::io::Write;

use netmap_common::config::{ColorScheme, RawPreferences, Theme, ThemePreferences};
use netmap_common::error::SnapshotError;
use netmap_common::network::snapshot::Snapshot;
use netmap_common::source::SnapshotSource;
use netmap_core::map::classify_snapshot;
use netmap_core::snapshot::JsonSnapshotFile;
use tempfile::NamedTempFile;

use crate::fixtures::{LOCAL_IP, home_network};

fn write_snapshot(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn scanner_document_round_trips_through_the_adapter() {
    let snapshot = Snapshot::new(Some(LOCAL_IP.to_string()), home_network());
    let file = write_snapshot(&serde_json::to_string_pretty(&snapshot).unwrap());

    let loaded = JsonSnapshotFile::new(file.path()).load().unwrap();
    assert_eq!(loaded, snapshot);
}

#[test]
fn loaded_snapshot_renders_with_preferences() {
    let file = write_snapshot(
        r#"{
            "localIp": "10.0.0.5",
            "devices": [
                {"ip": "10.0.0.1", "hostname": "10.0.0.1", "isOnline": true},
                {"ip": "10.0.0.5", "manufacturer": "Samsung", "isOnline": true},
                {"ip": "10.0.0.9", "openPorts": [443], "isOnline": false}
            ]
        }"#,
    );
    let snapshot = JsonSnapshotFile::new(file.path()).load().unwrap();

    let prefs = ThemePreferences::resolve(&RawPreferences {
        theme_preference: Some("dark".into()),
        color_scheme: Some("does-not-exist".into()),
        show_network_map: None,
        map_layout: None,
    });
    let local_ip = snapshot.local_ip.clone().unwrap();
    let map = classify_snapshot(&snapshot.devices, &local_ip, prefs.display());

    assert_eq!(map.display.theme, Theme::Dark);
    assert_eq!(map.display.color_scheme, ColorScheme::Blue);
    assert!(map.devices[1].classification.is_local_device);

    let summary = map.summary.unwrap();
    assert_eq!(summary.total_devices, 3);
    assert_eq!(summary.online_devices, 2);
    assert_eq!(summary.router_device_count, 1);
}

#[test]
fn repeated_address_is_rejected_at_load() {
    let file = write_snapshot(
        r#"[
            {"ip": "192.168.1.1", "hostname": "192.168.1.1", "isOnline": true},
            {"ip": "192.168.1.1", "manufacturer": "Apple Inc.", "hostname": "iPhone", "isOnline": true}
        ]"#,
    );

    match JsonSnapshotFile::new(file.path()).load() {
        Err(SnapshotError::DuplicateAddress(ip)) => assert_eq!(ip, "192.168.1.1"),
        other => panic!("expected duplicate address error, got {other:?}"),
    }
}

#[test]
fn garbage_is_a_decode_error() {
    let file = write_snapshot("{ not json");
    let err = JsonSnapshotFile::new(file.path()).load().unwrap_err();
    assert!(matches!(err, SnapshotError::Decode { .. }), "{err}");
}
