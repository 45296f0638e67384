pub mod device;
pub mod snapshot;
