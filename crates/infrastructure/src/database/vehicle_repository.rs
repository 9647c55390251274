use super::entities::vehicles;
use super::error::map_db_err;
use async_trait::async_trait;
use domain::vehicle::{Plate, Vehicle, VehicleKind, VehicleRepository};
use domain::DomainError;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{debug, info};

pub struct SeaOrmVehicleRepository {
    db: DatabaseConnection,
}

impl SeaOrmVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stored plates are taken as written; rows from other writers are
    /// listed and deleted under their exact stored value.
    fn model_to_vehicle(model: vehicles::Model) -> Vehicle {
        let kind = model
            .vehicle_type
            .filter(|t| !t.trim().is_empty())
            .map(VehicleKind::from);

        Vehicle::new(Plate::from_stored(model.plate), kind, model.driver)
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn list(&self) -> Result<Vec<Vehicle>, DomainError> {
        let models = vehicles::Entity::find()
            .order_by_asc(vehicles::Column::Plate)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        debug!(count = models.len(), "Loaded vehicle registry");

        Ok(models.into_iter().map(Self::model_to_vehicle).collect())
    }

    async fn upsert(&self, vehicle: &Vehicle) -> Result<(), DomainError> {
        let active_model = vehicles::ActiveModel {
            plate: Set(vehicle.plate.as_str().to_string()),
            vehicle_type: Set(vehicle.kind.as_ref().map(|k| k.as_str().to_string())),
            driver: Set(vehicle.driver.clone()),
            ..Default::default()
        };

        // Last write wins: kind and driver are overwritten, never merged
        vehicles::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(vehicles::Column::Plate)
                    .update_columns([vehicles::Column::VehicleType, vehicles::Column::Driver])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        info!(plate = %vehicle.plate, driver = ?vehicle.driver, "Vehicle saved");
        Ok(())
    }

    async fn delete(&self, plate: &Plate) -> Result<(), DomainError> {
        let result = vehicles::Entity::delete_many()
            .filter(vehicles::Column::Plate.eq(plate.as_str()))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        info!(plate = %plate, rows = result.rows_affected, "Vehicle deleted");
        Ok(())
    }
}
