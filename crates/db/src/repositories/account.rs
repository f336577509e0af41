//! Account repository: identity-provider accounts linked to users.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::accounts;

/// Input for linking a provider account to a user.
#[derive(Debug, Clone, Default)]
pub struct LinkAccountInput {
    /// Owning user.
    pub user_id: String,
    /// Account kind as reported by the provider (`oauth`, `email`, ...).
    pub account_type: String,
    /// Provider name.
    pub provider: String,
    /// Account id within the provider.
    pub provider_account_id: String,
    /// OAuth refresh token.
    pub refresh_token: Option<String>,
    /// OAuth access token.
    pub access_token: Option<String>,
    /// Access token expiry as a Unix timestamp.
    pub expires_at: Option<i32>,
    /// Token type.
    pub token_type: Option<String>,
    /// Granted scope.
    pub scope: Option<String>,
    /// OpenID Connect id token.
    pub id_token: Option<String>,
    /// Provider session state.
    pub session_state: Option<String>,
}

/// Account repository.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a provider account to a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the provider
    /// account is already linked or the user does not exist.
    pub async fn link(&self, input: LinkAccountInput) -> Result<accounts::Model, DbErr> {
        let account = accounts::ActiveModel {
            user_id: Set(input.user_id),
            account_type: Set(input.account_type),
            provider: Set(input.provider),
            provider_account_id: Set(input.provider_account_id),
            refresh_token: Set(input.refresh_token),
            access_token: Set(input.access_token),
            expires_at: Set(input.expires_at),
            token_type: Set(input.token_type),
            scope: Set(input.scope),
            id_token: Set(input.id_token),
            session_state: Set(input.session_state),
        };

        account.insert(&self.db).await
    }

    /// Lists every account linked to a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_for_user(&self, user_id: &str) -> Result<Vec<accounts::Model>, DbErr> {
        accounts::Entity::find()
            .filter(accounts::Column::UserId.eq(user_id))
            .order_by_asc(accounts::Column::Provider)
            .all(&self.db)
            .await
    }
}
