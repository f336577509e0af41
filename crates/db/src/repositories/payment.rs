//! Payment repository for database operations.

use condos_shared::Month;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::payments;

/// Input for recording a payment.
#[derive(Debug, Clone)]
pub struct CreatePaymentInput {
    /// Building the payment belongs to.
    pub building_id: i32,
    /// Paying resident.
    pub resident_id: i32,
    /// Amount in minor units.
    pub amount: i32,
    /// Month the payment refers to.
    pub month: Month,
    /// Free-text description.
    pub description: Option<String>,
}

/// Payment repository.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    db: DatabaseConnection,
}

impl PaymentRepository {
    /// Creates a new payment repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment.
    ///
    /// Does not check that the resident lives in the building; callers do
    /// that with [`condos_core::resident::check_payment_attribution`].
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: CreatePaymentInput) -> Result<payments::Model, DbErr> {
        let payment = payments::ActiveModel {
            building_id: Set(input.building_id),
            resident_id: Set(input.resident_id),
            amount: Set(input.amount),
            month: Set(input.month.to_string()),
            description: Set(input.description),
            ..Default::default()
        };

        payment.insert(&self.db).await
    }

    /// Lists a building's payments, newest month first.
    /// When `month` is given only that month is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_building(
        &self,
        building_id: i32,
        month: Option<Month>,
    ) -> Result<Vec<payments::Model>, DbErr> {
        let mut query = payments::Entity::find()
            .filter(payments::Column::BuildingId.eq(building_id));

        if let Some(month) = month {
            query = query.filter(payments::Column::Month.eq(month.to_string()));
        }

        query
            .order_by_desc(payments::Column::Month)
            .order_by_asc(payments::Column::Id)
            .all(&self.db)
            .await
    }
}
