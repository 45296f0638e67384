//! Classification of a full snapshot.
//!
//! The per-device step is independent for every record and runs on the rayon pool; the
//! collected order is the input order.

use netmap_common::config::DisplayPreferences;
use netmap_common::network::device::DeviceRecord;
use rayon::prelude::*;
use tracing::debug;

use crate::classify::{Classification, Classifier};
use crate::topology::NetworkSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedDevice<'a> {
    pub device: &'a DeviceRecord,
    pub classification: Classification,
}

/// A classified snapshot, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkMap<'a> {
    pub local_ip: String,
    pub devices: Vec<ClassifiedDevice<'a>>,
    /// `None` when the snapshot holds no devices.
    pub summary: Option<NetworkSummary>,
    pub display: DisplayPreferences,
}

impl NetworkMap<'_> {
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

pub fn classify_snapshot<'a>(
    devices: &'a [DeviceRecord],
    local_ip: &str,
    display: DisplayPreferences,
) -> NetworkMap<'a> {
    let classifier = Classifier::new(local_ip);

    let classified: Vec<ClassifiedDevice<'a>> = devices
        .par_iter()
        .map(|device| ClassifiedDevice {
            device,
            classification: classifier.classify(device),
        })
        .collect();

    let summary = classifier.local().summarize(devices);
    debug!(
        "Classified {} devices against local address {}",
        classified.len(),
        local_ip
    );

    NetworkMap {
        local_ip: local_ip.to_string(),
        devices: classified,
        summary,
        display,
    }
}
