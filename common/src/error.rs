use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a device snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to read snapshot '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate device address {0} in snapshot")]
    DuplicateAddress(String),
}

/// A preference value that does not name any known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct PreferenceError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl PreferenceError {
    pub fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}
