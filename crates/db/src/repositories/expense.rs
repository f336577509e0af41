//! Expense repository for database operations.

use condos_shared::Month;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::expenses;

/// Input for recording an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    /// Building charged.
    pub building_id: i32,
    /// Amount in minor units.
    pub amount: i32,
    /// Month the expense refers to.
    pub month: Month,
    /// Free-text description.
    pub description: Option<String>,
}

/// Expense repository.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: CreateExpenseInput) -> Result<expenses::Model, DbErr> {
        let expense = expenses::ActiveModel {
            building_id: Set(input.building_id),
            amount: Set(input.amount),
            month: Set(input.month.to_string()),
            description: Set(input.description),
            ..Default::default()
        };

        expense.insert(&self.db).await
    }

    /// Lists a building's expenses, newest month first, optionally for a
    /// single month.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_building(
        &self,
        building_id: i32,
        month: Option<Month>,
    ) -> Result<Vec<expenses::Model>, DbErr> {
        let mut query = expenses::Entity::find()
            .filter(expenses::Column::BuildingId.eq(building_id));

        if let Some(month) = month {
            query = query.filter(expenses::Column::Month.eq(month.to_string()));
        }

        query
            .order_by_desc(expenses::Column::Month)
            .order_by_asc(expenses::Column::Id)
            .all(&self.db)
            .await
    }
}
