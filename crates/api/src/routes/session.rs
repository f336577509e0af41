//! Session endpoints backing the client-side auth context.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::{CookieJar, cookie::Cookie};
use condos_db::SessionRepository;
use tracing::info;

use crate::{
    AppState,
    error::ApiError,
    middleware::{OptionalSession, extract_token},
};

/// Creates the session routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/session", get(get_session))
        .route("/auth/signout", post(sign_out))
}

/// GET `/auth/session` - The caller's session, or `null`.
async fn get_session(OptionalSession(session): OptionalSession) -> impl IntoResponse {
    Json(session)
}

/// POST `/auth/signout` - Delete the caller's session and clear its cookie.
///
/// Succeeds even when no session was attached.
async fn sign_out(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(token) = extract_token(&headers, &state.auth.session_cookie) {
        let removed = SessionRepository::new((*state.db).clone())
            .delete(&token)
            .await?;
        if removed {
            info!("Session signed out");
        }
    }

    let jar = jar.remove(Cookie::build((state.auth.session_cookie.clone(), "")).path("/"));
    Ok((jar, StatusCode::NO_CONTENT))
}
