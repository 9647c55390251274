//! Domain layer - Pure business logic with no external dependencies
//!
//! This crate contains:
//! - Entities (Vehicle, Operation)
//! - Value Objects (Plate, VehicleKind, OperationId, OperationFilter)
//! - Repository interfaces (traits)
//! - The proof image normalization port
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Acceptance rules enforced at domain level
//! - Testable in isolation

pub mod error;
pub mod operation;
pub mod proof;
pub mod vehicle;

// Re-export commonly used types
pub use error::DomainError;
pub use operation::{
    NewOperation, Operation, OperationFilter, OperationId, OperationRepository, OperationSummary,
    PlateFilter,
};
pub use proof::{ImageNormalizer, NormalizedImage};
pub use vehicle::{Plate, Vehicle, VehicleKind, VehicleRepository};
