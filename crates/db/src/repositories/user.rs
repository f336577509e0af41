//! User repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::{accounts, users};

/// Input for creating a user.
#[derive(Debug, Clone, Default)]
pub struct CreateUserInput {
    /// Display name, if the identity provider supplied one.
    pub name: Option<String>,
    /// Email address.
    pub email: String,
    /// Avatar URL.
    pub image: Option<String>,
}

/// User repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user with a generated id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails (e.g. duplicate email).
    pub async fn create(&self, input: CreateUserInput) -> Result<users::Model, DbErr> {
        let user = users::ActiveModel {
            id: Set(Uuid::now_v7().to_string()),
            name: Set(input.name),
            email: Set(input.email.to_lowercase()),
            email_verified: Set(None),
            image: Set(input.image),
        };

        user.insert(&self.db).await
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id.to_string()).one(&self.db).await
    }

    /// Finds a user by email address (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email.to_lowercase()))
            .one(&self.db)
            .await
    }

    /// Finds the user owning a provider account.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_account(
        &self,
        provider: &str,
        provider_account_id: &str,
    ) -> Result<Option<users::Model>, DbErr> {
        let account = accounts::Entity::find_by_id((
            provider.to_string(),
            provider_account_id.to_string(),
        ))
        .find_also_related(users::Entity)
        .one(&self.db)
        .await?;

        Ok(account.and_then(|(_, user)| user))
    }
}
