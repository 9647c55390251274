mod entity;
mod filter;
mod repository;
mod summary;

pub use entity::{NewOperation, Operation, OperationId};
pub use filter::{OperationFilter, PlateFilter};
pub use repository::OperationRepository;
pub use summary::OperationSummary;

#[cfg(any(test, feature = "mocks"))]
pub use repository::MockOperationRepository;
