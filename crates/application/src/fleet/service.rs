use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use domain::vehicle::{Plate, Vehicle, VehicleKind, VehicleRepository};
use domain::DomainError;

/// Fleet registry maintenance
pub struct FleetService {
    vehicles: Arc<dyn VehicleRepository>,
}

impl FleetService {
    pub fn new(vehicles: Arc<dyn VehicleRepository>) -> Self {
        Self { vehicles }
    }

    /// Register a vehicle or update the kind and usual driver of an existing one.
    pub async fn register(
        &self,
        plate: &str,
        kind: &str,
        driver: Option<&str>,
    ) -> Result<Vehicle, DomainError> {
        let plate = Plate::new(plate)?;
        let kind = match kind.parse::<VehicleKind>() {
            Ok(VehicleKind::Other(other)) if other.is_empty() => None,
            Ok(kind) => Some(kind),
            Err(never) => match never {},
        };

        let vehicle = Vehicle::new(plate, kind, driver.map(str::to_string));
        self.vehicles.upsert(&vehicle).await?;

        info!(
            plate = %vehicle.plate,
            driver = vehicle.driver.as_deref().unwrap_or("-"),
            "🚛 Vehicle registered"
        );
        Ok(vehicle)
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, DomainError> {
        self.vehicles.list().await
    }

    pub async fn remove(&self, plate: &str) -> Result<(), DomainError> {
        let plate = Plate::new(plate)?;
        self.vehicles.delete(&plate).await
    }

    /// Usual driver per plate, used to prefill new operations.
    /// Vehicles without a driver are left out.
    pub async fn default_drivers(&self) -> Result<BTreeMap<Plate, String>, DomainError> {
        let vehicles = self.vehicles.list().await?;
        Ok(vehicles
            .into_iter()
            .filter_map(|v| v.driver.map(|driver| (v.plate, driver)))
            .collect())
    }

    pub async fn default_driver(&self, plate: &Plate) -> Result<Option<String>, DomainError> {
        let mut drivers = self.default_drivers().await?;
        Ok(drivers.remove(plate))
    }
}
