use super::{NewOperation, Operation, OperationFilter, OperationId};
use crate::DomainError;
use async_trait::async_trait;

/// Repository interface for the operations ledger
///
/// Rows are immutable once inserted; there is no update path.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait OperationRepository: Send + Sync {
    /// Append one row and return its id
    async fn insert(&self, operation: &NewOperation) -> Result<OperationId, DomainError>;

    /// Rows matching every supplied predicate, newest date first, then newest id first
    async fn query(&self, filter: &OperationFilter) -> Result<Vec<Operation>, DomainError>;

    /// Owned copy of the stored proof image, `None` when the row has none or does not exist
    async fn fetch_image(&self, id: OperationId) -> Result<Option<Vec<u8>>, DomainError>;

    /// Delete by id. Deleting an unknown id succeeds.
    async fn delete(&self, id: OperationId) -> Result<(), DomainError>;
}
