//! `user.*` procedures.

use axum::{Json, Router, routing::get};
use condos_core::messages::greeting;
use serde::Serialize;

use crate::{AppState, middleware::CurrentSession};

/// Creates the user procedure routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/user.hello", get(hello))
}

/// Response of `user.hello`.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    /// Greeting addressed to the caller.
    pub greeting: String,
}

/// GET `/user.hello` - Greets the signed-in caller by name.
async fn hello(CurrentSession(session): CurrentSession) -> Json<HelloResponse> {
    Json(HelloResponse {
        greeting: greeting(&session),
    })
}
