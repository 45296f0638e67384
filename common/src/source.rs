use crate::error::SnapshotError;
use crate::network::snapshot::Snapshot;

/// Defines the contract for obtaining the devices a scanner discovered.
pub trait SnapshotSource {
    /// Loads one point-in-time snapshot.
    ///
    /// # Returns
    /// * `Ok(Snapshot)` - The devices in scanner order, plus the local address if recorded.
    /// * `Err(SnapshotError)` - If the snapshot could not be read or breaks the unique-address rule.
    fn load(&self) -> Result<Snapshot, SnapshotError>;
}
