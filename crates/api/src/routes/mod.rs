//! API route definitions.
//!
//! Procedures live under `/rpc/<router>.<procedure>`: queries are `GET`
//! with their input in the query string, mutations are `POST` with a JSON
//! body.

use axum::Router;

use crate::AppState;

pub mod building;
pub mod expense;
pub mod health;
pub mod payment;
pub mod resident;
pub mod session;
pub mod shell;
pub mod user;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(session::routes())
        .nest("/rpc", rpc_routes())
}

/// Creates the procedure router.
fn rpc_routes() -> Router<AppState> {
    Router::new()
        .merge(building::routes())
        .merge(user::routes())
        .merge(resident::routes())
        .merge(payment::routes())
        .merge(expense::routes())
}
