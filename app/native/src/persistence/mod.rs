//! Snapshot and config-script persistence.
//!
//! Every domain owns two files under the settings home, resolved by the
//! [`RoutingTable`]: a JSON snapshot of its state and the script consumed by
//! the external tool. The [`SnapshotCodec`] reads and writes the former, the
//! [`ConfigExporter`] writes the latter. Both report failures as
//! [`OperationError`](crate::store::OperationError) values rather than
//! panicking or aborting.

pub mod export;
pub mod routes;
pub mod snapshot;

pub use export::ConfigExporter;
pub use routes::{Route, RoutingTable};
pub use snapshot::SnapshotCodec;
