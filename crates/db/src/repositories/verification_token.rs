//! Verification token repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, Set};

use crate::entities::verification_tokens;

use super::SessionRepository;

/// Verification token repository.
///
/// Tokens are single use: consuming one deletes it whether or not it was
/// still valid.
#[derive(Debug, Clone)]
pub struct VerificationTokenRepository {
    db: DatabaseConnection,
}

impl VerificationTokenRepository {
    /// Creates a new verification token repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a token for an identifier (usually an email address).
    /// Returns the raw token (not hashed) to be sent to the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, identifier: &str, expires: DateTime<Utc>) -> Result<String, DbErr> {
        let raw_token = SessionRepository::generate_token();

        let token = verification_tokens::ActiveModel {
            identifier: Set(identifier.to_string()),
            token: Set(SessionRepository::hash_token(&raw_token)),
            expires: Set(expires.into()),
        };

        token.insert(&self.db).await?;

        Ok(raw_token)
    }

    /// Consumes a token.
    /// Returns `true` only if the token existed and had not expired.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query or delete fails.
    pub async fn consume(&self, identifier: &str, raw_token: &str) -> Result<bool, DbErr> {
        let Some(token) = verification_tokens::Entity::find_by_id((
            identifier.to_string(),
            SessionRepository::hash_token(raw_token),
        ))
        .one(&self.db)
        .await?
        else {
            return Ok(false);
        };

        let valid = token.expires.with_timezone(&Utc) > Utc::now();
        token.delete(&self.db).await?;

        Ok(valid)
    }
}
