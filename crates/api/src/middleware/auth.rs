//! Session resolution for protected procedures.
//!
//! The caller's session is resolved once per request by an extractor and
//! handed to the handler as a parameter.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use condos_db::SessionRepository;
use condos_shared::{Session, SessionUser};

use crate::{AppState, error::ApiError};

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Finds the session token of a request.
///
/// Checks `Authorization: Bearer <token>` first, then the session cookie.
pub fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
        .filter(|token| !token.is_empty());

    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Looks up the session behind a raw token.
async fn resolve(state: &AppState, token: &str) -> Result<Option<Session>, ApiError> {
    let repo = SessionRepository::new((*state.db).clone());

    let Some((session, user)) = repo.find_with_user(token).await? else {
        return Ok(None);
    };

    Ok(Some(Session {
        user: SessionUser {
            id: user.id,
            name: user.name,
        },
        expires: session.expires.with_timezone(&Utc),
    }))
}

/// Extractor for the signed-in caller.
///
/// Rejects with `401 UNAUTHORIZED` when no valid session is attached:
///
/// ```ignore
/// async fn handler(CurrentSession(session): CurrentSession) -> impl IntoResponse {
///     let user_id = session.user_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers, &state.auth.session_cookie)
            .ok_or_else(ApiError::unauthorized)?;

        resolve(state, &token)
            .await?
            .map(CurrentSession)
            .ok_or_else(ApiError::unauthorized)
    }
}

/// Like [`CurrentSession`] but yields `None` instead of rejecting when no
/// valid session is attached. Storage failures still reject.
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<Session>);

impl FromRequestParts<AppState> for OptionalSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = extract_token(&parts.headers, &state.auth.session_cookie) else {
            return Ok(Self(None));
        };

        resolve(state, &token).await.map(OptionalSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use axum::http::header::COOKIE;

    const COOKIE_NAME: &str = "condos.session-token";

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(extract_token(&headers, COOKIE_NAME).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_cookie_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; condos.session-token=xyz"),
        );
        assert_eq!(extract_token(&headers, COOKIE_NAME).as_deref(), Some("xyz"));
    }

    #[test]
    fn test_bearer_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        headers.insert(COOKIE, HeaderValue::from_static("condos.session-token=xyz"));
        assert_eq!(extract_token(&headers, COOKIE_NAME).as_deref(), Some("abc"));
    }

    #[test]
    fn test_no_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        headers.insert(COOKIE, HeaderValue::from_static("other=1"));
        assert!(extract_token(&headers, COOKIE_NAME).is_none());
    }
}
