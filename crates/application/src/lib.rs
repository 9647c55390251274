//! Application layer - Use cases and business workflows

pub mod fleet;
pub mod ledger;

pub use fleet::FleetService;
pub use ledger::{History, OperationLog, RecordOperation, UploadedPhoto};
