//! Resident repository for database operations.

use condos_core::resident::NewResident;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::residents;

/// Resident repository.
#[derive(Debug, Clone)]
pub struct ResidentRepository {
    db: DatabaseConnection,
}

impl ResidentRepository {
    /// Creates a new resident repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a resident in a building.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, resident: NewResident) -> Result<residents::Model, DbErr> {
        let resident = residents::ActiveModel {
            building_id: Set(resident.building_id),
            name: Set(resident.name),
            contact: Set(resident.contact),
            floor: Set(resident.floor),
            fraction: Set(resident.fraction),
            ..Default::default()
        };

        resident.insert(&self.db).await
    }

    /// Lists the residents of a building by floor, then fraction.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_building(
        &self,
        building_id: i32,
    ) -> Result<Vec<residents::Model>, DbErr> {
        residents::Entity::find()
            .filter(residents::Column::BuildingId.eq(building_id))
            .order_by_asc(residents::Column::Floor)
            .order_by_asc(residents::Column::Fraction)
            .order_by_asc(residents::Column::Id)
            .all(&self.db)
            .await
    }

    /// Finds a resident by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<residents::Model>, DbErr> {
        residents::Entity::find_by_id(id).one(&self.db).await
    }
}
