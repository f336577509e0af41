//! Session types handed to protected procedures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The verified caller of a request.
///
/// Resolved once per request from the session token and passed to handlers
/// explicitly; nothing reads it from ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in user.
    pub user: SessionUser,
    /// When the session stops being valid.
    pub expires: DateTime<Utc>,
}

/// Identity fields of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// User ID as assigned by the identity provider.
    pub id: String,
    /// Display name, if the provider supplied one.
    pub name: Option<String>,
}

impl Session {
    /// Returns the caller's user ID.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    /// Returns the caller's display name.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.name.as_deref()
    }
}
