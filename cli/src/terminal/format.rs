use colored::*;
use netmap_core::classify::Classification;
use netmap_core::map::ClassifiedDevice;
use netmap_common::network::device::DeviceRecord;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// `<glyph> <address> - <type> <status>`
pub fn device_head(entry: &ClassifiedDevice<'_>) -> String {
    let palette = colors::get();
    let classification: &Classification = &entry.classification;
    let address: ColoredString = entry.device.ip_address.color(palette.primary).bold();
    let label: ColoredString = classification.type_label().color(colors::TEXT_DEFAULT);

    format!(
        "{} {} {} {} {}",
        classification.icon().glyph(),
        address,
        "-".color(palette.separator),
        label,
        status(entry.device)
    )
}

pub fn status(device: &DeviceRecord) -> ColoredString {
    let palette = colors::get();
    if device.is_online {
        "● Online".color(palette.success)
    } else {
        "● Offline".color(palette.error)
    }
}

pub fn device_details(entry: &ClassifiedDevice<'_>) -> Vec<Detail> {
    let palette = colors::get();
    let device: &DeviceRecord = entry.device;
    let mut details: Vec<Detail> = Vec::new();

    if let Some(hostname) = device.resolved_hostname() {
        details.push(("Hostname".to_string(), hostname.color(palette.secondary)));
    }

    if let Some(mac) = &device.mac_address {
        details.push(("MAC".to_string(), mac.color(palette.secondary)));
    }

    if let Some(vendor) = &device.manufacturer {
        details.push(("Vendor".to_string(), vendor.normal()));
    }

    if let Some(ports) = ports_to_detail(device) {
        details.push(ports);
    }

    if let Some(last_seen) = device.last_seen {
        details.push(("Seen".to_string(), last_seen.to_string().color(palette.muted)));
    }

    if let Some(role) = role_to_detail(&entry.classification) {
        details.push(role);
    }

    details
}

fn ports_to_detail(device: &DeviceRecord) -> Option<Detail> {
    if device.open_ports.is_empty() {
        return None;
    }

    let joined: String = device
        .open_ports
        .iter()
        .map(|port| port.to_string())
        .collect::<Vec<String>>()
        .join(", ");

    Some(("Ports".to_string(), joined.color(colors::get().accent)))
}

fn role_to_detail(classification: &Classification) -> Option<Detail> {
    let mut roles: Vec<&str> = Vec::new();
    if classification.is_local_device {
        roles.push("📍 Local device");
    }
    if classification.is_likely_router {
        roles.push("Likely router");
    }

    if roles.is_empty() {
        return None;
    }

    Some((
        "Role".to_string(),
        roles.join(", ").color(colors::get().warning),
    ))
}
