use super::{Plate, Vehicle};
use crate::DomainError;
use async_trait::async_trait;

/// Repository interface for the vehicle registry
///
/// Implementations live in the infrastructure layer.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// All vehicles ordered by plate ascending
    async fn list(&self) -> Result<Vec<Vehicle>, DomainError>;

    /// Insert, or overwrite kind and driver of the vehicle with the same plate
    async fn upsert(&self, vehicle: &Vehicle) -> Result<(), DomainError>;

    /// Delete by exact plate. Deleting an unknown plate succeeds.
    async fn delete(&self, plate: &Plate) -> Result<(), DomainError>;
}
