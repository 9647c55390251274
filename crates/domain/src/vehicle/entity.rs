use super::{Plate, VehicleKind};
use serde::{Deserialize, Serialize};

/// A registered unit of the fleet and its usual driver.
///
/// Operations copy the driver name when they are recorded, so changing or
/// removing a vehicle never rewrites the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub plate: Plate,
    pub kind: Option<VehicleKind>,
    pub driver: Option<String>,
}

impl Vehicle {
    pub fn new(plate: Plate, kind: Option<VehicleKind>, driver: Option<String>) -> Self {
        Self {
            plate,
            kind,
            driver: driver
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        }
    }
}
