//! Infrastructure layer - External integrations

pub mod config;
pub mod database;
pub mod imaging;

pub use config::{AppConfig, DatabaseConfig, ImagingConfig};
pub use database::{PostgresOperationRepository, RegistryStore, SeaOrmVehicleRepository};
pub use imaging::JpegImageNormalizer;
