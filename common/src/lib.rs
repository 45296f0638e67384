//! # Netmap Common
//!
//! Types shared by every crate of the workspace.
//!
//! * **[`network`]**: Device records and snapshots handed over by a scanner.
//! * **[`config`]**: Runtime configuration and the display preferences.
//! * **[`palette`]**: Fixed color tables for each color scheme and theme.
//! * **[`source`]**: The port through which snapshots enter the application.
//! * **[`error`]**: Error types of the boundaries.

pub mod config;
pub mod error;
pub mod network;
pub mod palette;
pub mod source;
