//! Building repository for database operations.

use condos_core::building::NewBuilding;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use crate::entities::buildings;

/// Building repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct BuildingRepository {
    db: DatabaseConnection,
}

impl BuildingRepository {
    /// Creates a new building repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a building attributed to its creator.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        building: NewBuilding,
        creator_id: &str,
    ) -> Result<buildings::Model, DbErr> {
        let building = buildings::ActiveModel {
            name: Set(building.name),
            created_by_id: Set(creator_id.to_string()),
            created_at: Set(chrono::Utc::now().into()),
            updated_at: Set(None),
            floors: Set(building.floors),
            fractions: Set(building.fractions),
            ..Default::default()
        };

        building.insert(&self.db).await
    }

    /// Lists all buildings ordered by name, ties broken by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_ordered_by_name(&self) -> Result<Vec<buildings::Model>, DbErr> {
        buildings::Entity::find()
            .order_by_asc(buildings::Column::Name)
            .order_by_asc(buildings::Column::Id)
            .all(&self.db)
            .await
    }

    /// Finds a building by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<buildings::Model>, DbErr> {
        buildings::Entity::find_by_id(id).one(&self.db).await
    }
}
