//! # Device Classification
//!
//! Infers a device category from sparse scan metadata.
//!
//! The inference is an ordered list of [`Rule`]s tried first-match-wins. Order encodes
//! priority between overlapping signals: the sentinel hostname beats everything, vendor
//! names beat open ports, and a device matching nothing is a [`DeviceKind::Computer`].
//!
//! Vendor matching is an unanchored, case-insensitive substring test. It is approximate:
//! `"hp"` also matches inside unrelated vendor names.

use std::fmt;

use netmap_common::network::device::DeviceRecord;
use tracing::trace;

use crate::topology::LocalAddress;

/// Symbolic icon attached to a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceIcon {
    Router,
    Apple,
    Mobile,
    Printer,
    Camera,
    Globe,
    Ssh,
    Computer,
}

impl DeviceIcon {
    /// Stable name of the icon, used in structured log fields.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Router => "router",
            Self::Apple => "apple",
            Self::Mobile => "mobile",
            Self::Printer => "printer",
            Self::Camera => "camera",
            Self::Globe => "globe",
            Self::Ssh => "ssh",
            Self::Computer => "computer",
        }
    }

    /// Terminal glyph for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Router => "🖥️",
            Self::Apple => "🍎",
            Self::Mobile => "📱",
            Self::Printer => "🖨️",
            Self::Camera => "📷",
            Self::Globe => "🌐",
            Self::Ssh => "🔧",
            Self::Computer => "💻",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Router,
    AppleDevice,
    SamsungDevice,
    Printer,
    CameraPrinter,
    WebServer,
    SshServer,
    Computer,
}

impl DeviceKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Router => "Router",
            Self::AppleDevice => "Apple Device",
            Self::SamsungDevice => "Samsung Device",
            Self::Printer => "Printer",
            Self::CameraPrinter => "Camera/Printer",
            Self::WebServer => "Web Server",
            Self::SshServer => "SSH Server",
            Self::Computer => "Computer",
        }
    }

    pub fn icon(&self) -> DeviceIcon {
        match self {
            Self::Router => DeviceIcon::Router,
            Self::AppleDevice => DeviceIcon::Apple,
            Self::SamsungDevice => DeviceIcon::Mobile,
            Self::Printer => DeviceIcon::Printer,
            Self::CameraPrinter => DeviceIcon::Camera,
            Self::WebServer => DeviceIcon::Globe,
            Self::SshServer => DeviceIcon::Ssh,
            Self::Computer => DeviceIcon::Computer,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A predicate over a device and the kind it yields when it holds.
pub struct Rule {
    pub kind: DeviceKind,
    pub matches: fn(&DeviceRecord) -> bool,
}

/// Classification rules in priority order.
pub static RULES: &[Rule] = &[
    Rule {
        kind: DeviceKind::Router,
        matches: DeviceRecord::has_sentinel_hostname,
    },
    Rule {
        kind: DeviceKind::AppleDevice,
        matches: is_apple,
    },
    Rule {
        kind: DeviceKind::SamsungDevice,
        matches: is_samsung,
    },
    Rule {
        kind: DeviceKind::Printer,
        matches: is_hp,
    },
    Rule {
        kind: DeviceKind::CameraPrinter,
        matches: is_canon,
    },
    Rule {
        kind: DeviceKind::WebServer,
        matches: serves_web,
    },
    Rule {
        kind: DeviceKind::SshServer,
        matches: serves_ssh,
    },
];

fn manufacturer_contains(device: &DeviceRecord, needles: &[&str]) -> bool {
    device.manufacturer.as_deref().is_some_and(|vendor| {
        let vendor = vendor.to_lowercase();
        needles.iter().any(|needle| vendor.contains(needle))
    })
}

fn is_apple(device: &DeviceRecord) -> bool {
    manufacturer_contains(device, &["apple"])
}

fn is_samsung(device: &DeviceRecord) -> bool {
    manufacturer_contains(device, &["samsung"])
}

fn is_hp(device: &DeviceRecord) -> bool {
    manufacturer_contains(device, &["hp", "hewlett"])
}

fn is_canon(device: &DeviceRecord) -> bool {
    manufacturer_contains(device, &["canon"])
}

fn serves_web(device: &DeviceRecord) -> bool {
    device.has_open_port(80) || device.has_open_port(443)
}

fn serves_ssh(device: &DeviceRecord) -> bool {
    device.has_open_port(22)
}

/// Runs the rule list against `device`. Never fails: absent fields simply match nothing.
pub fn device_kind(device: &DeviceRecord) -> DeviceKind {
    let kind = RULES
        .iter()
        .find(|rule| (rule.matches)(device))
        .map_or(DeviceKind::Computer, |rule| rule.kind);

    trace!(icon = kind.icon().tag(), "{} classified as {}", device.ip_address, kind);
    kind
}

/// Everything the renderer needs to know about one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: DeviceKind,
    pub is_local_device: bool,
    pub is_likely_router: bool,
}

impl Classification {
    pub fn icon(&self) -> DeviceIcon {
        self.kind.icon()
    }

    pub fn type_label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Classifies devices relative to one local address.
#[derive(Debug, Clone)]
pub struct Classifier {
    local: LocalAddress,
}

impl Classifier {
    pub fn new(local_ip: &str) -> Self {
        Self {
            local: LocalAddress::new(local_ip),
        }
    }

    pub fn local(&self) -> &LocalAddress {
        &self.local
    }

    pub fn classify(&self, device: &DeviceRecord) -> Classification {
        Classification {
            kind: device_kind(device),
            is_local_device: self.local.is_local(device),
            is_likely_router: self.local.is_likely_router(device),
        }
    }
}

/// One-off classification. Prefer [`Classifier`] when classifying many devices.
pub fn classify(device: &DeviceRecord, local_ip: &str) -> Classification {
    Classifier::new(local_ip).classify(device)
}
