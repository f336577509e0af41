//! Strings returned by the diagnostic procedures.

use condos_shared::Session;

/// Returned by `building.getSecretMessage` to signed-in callers.
pub const SECRET_MESSAGE: &str = "you can now see this secret message!";

/// Used in greetings when the provider gave no display name.
pub const ANONYMOUS_NAME: &str = "stranger";

/// Builds the `user.hello` greeting for the caller.
#[must_use]
pub fn greeting(session: &Session) -> String {
    format!("Hello {}", session.display_name().unwrap_or(ANONYMOUS_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use condos_shared::SessionUser;

    fn session(name: Option<&str>) -> Session {
        Session {
            user: SessionUser {
                id: "user-1".to_string(),
                name: name.map(String::from),
            },
            expires: Utc::now(),
        }
    }

    #[test]
    fn test_greeting_uses_display_name() {
        assert_eq!(greeting(&session(Some("Ana"))), "Hello Ana");
    }

    #[test]
    fn test_greeting_without_name() {
        assert_eq!(greeting(&session(None)), "Hello stranger");
    }
}
