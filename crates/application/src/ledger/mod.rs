mod operation_log;

pub use operation_log::{History, OperationLog, RecordOperation, UploadedPhoto};
