//! # Netmap Core
//!
//! Pure inference over scan snapshots, plus the adapter that reads them.
//!
//! * **[`classify`]**: Rule-based device categorisation.
//! * **[`topology`]**: Local device and router detection, aggregate counts.
//! * **[`map`]**: Classifies a whole snapshot into a [`map::NetworkMap`] for rendering.
//! * **[`snapshot`]**: JSON file implementation of the snapshot source port.

pub mod classify;
pub mod map;
pub mod snapshot;
pub mod topology;
