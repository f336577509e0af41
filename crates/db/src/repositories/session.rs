//! Session repository for database operations.
//!
//! Clients hold the raw token; only its SHA-256 digest is stored.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use sha2::{Digest, Sha256};

use crate::entities::{sessions, users};

/// Session repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    db: DatabaseConnection,
}

impl SessionRepository {
    /// Creates a new session repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Hashes a session token for storage.
    #[must_use]
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Generates a random URL-safe session token.
    #[must_use]
    pub fn generate_token() -> String {
        let bytes: [u8; 32] = rand::random();
        base64_url::encode(&bytes)
    }

    /// Creates a new session for a user.
    /// Returns the raw token alongside the stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        user_id: &str,
        expires: DateTime<Utc>,
    ) -> Result<(String, sessions::Model), DbErr> {
        let raw_token = Self::generate_token();

        let session = sessions::ActiveModel {
            session_token: Set(Self::hash_token(&raw_token)),
            user_id: Set(user_id.to_string()),
            expires: Set(expires.into()),
        };

        let session = session.insert(&self.db).await?;
        Ok((raw_token, session))
    }

    /// Resolves a raw token to its session and user.
    ///
    /// Returns `None` when the token is unknown or the session has expired.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_with_user(
        &self,
        raw_token: &str,
    ) -> Result<Option<(sessions::Model, users::Model)>, DbErr> {
        let found = sessions::Entity::find_by_id(Self::hash_token(raw_token))
            .find_also_related(users::Entity)
            .one(&self.db)
            .await?;

        let now = Utc::now();
        Ok(found.and_then(|(session, user)| {
            if session.expires.with_timezone(&Utc) <= now {
                tracing::debug!(user_id = %session.user_id, "Session expired");
                return None;
            }
            user.map(|user| (session, user))
        }))
    }

    /// Moves a session's expiry.
    /// Returns `None` if the token is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn extend(
        &self,
        raw_token: &str,
        expires: DateTime<Utc>,
    ) -> Result<Option<sessions::Model>, DbErr> {
        let Some(session) = sessions::Entity::find_by_id(Self::hash_token(raw_token))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: sessions::ActiveModel = session.into();
        active.expires = Set(expires.into());
        active.update(&self.db).await.map(Some)
    }

    /// Deletes a session by raw token.
    /// Returns whether a session was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, raw_token: &str) -> Result<bool, DbErr> {
        let result = sessions::Entity::delete_by_id(Self::hash_token(raw_token))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every expired session (for maintenance).
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete_expired(&self) -> Result<u64, DbErr> {
        let result = sessions::Entity::delete_many()
            .filter(sessions::Column::Expires.lte(Utc::now()))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
