mod entity;
mod kind;
mod plate;
mod repository;

pub use entity::Vehicle;
pub use kind::VehicleKind;
pub use plate::Plate;
pub use repository::VehicleRepository;

#[cfg(any(test, feature = "mocks"))]
pub use repository::MockVehicleRepository;
