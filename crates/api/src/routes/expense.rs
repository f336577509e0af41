//! `expense.*` procedures.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use condos_db::{CreateExpenseInput, ExpenseRepository, entities::expenses};
use condos_shared::requests::{CreateExpenseRequest, LedgerQuery};
use serde::Serialize;
use tracing::info;

use super::building::require_building;
use crate::{
    AppState,
    error::ApiError,
    extractors::{QueryInput, ValidatedJson},
    middleware::CurrentSession,
};

/// Creates the expense procedure routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expense.create", post(create))
        .route("/expense.getByBuilding", get(get_by_building))
}

/// An expense as returned by the procedures.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    /// Expense ID.
    pub id: i32,
    /// Building charged.
    pub building_id: i32,
    /// Amount in minor units.
    pub amount: i32,
    /// Month as `YYYY-MM`.
    pub month: String,
    /// Free-form note.
    pub description: Option<String>,
}

impl From<expenses::Model> for ExpenseResponse {
    fn from(e: expenses::Model) -> Self {
        Self {
            id: e.id,
            building_id: e.building_id,
            amount: e.amount,
            month: e.month,
            description: e.description,
        }
    }
}

/// POST `/expense.create` - Record a building expense.
async fn create(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ValidatedJson(payload): ValidatedJson<CreateExpenseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let building = require_building(&state.db, payload.building_id).await?;

    let expense = ExpenseRepository::new((*state.db).clone())
        .create(CreateExpenseInput {
            building_id: building.id,
            amount: payload.amount,
            month: payload.month,
            description: payload.description,
        })
        .await?;

    info!(
        expense_id = expense.id,
        building_id = building.id,
        month = %expense.month,
        user_id = %session.user_id(),
        "Expense recorded"
    );

    Ok((StatusCode::CREATED, Json(ExpenseResponse::from(expense))))
}

/// GET `/expense.getByBuilding` - List a building's expenses.
async fn get_by_building(
    State(state): State<AppState>,
    _session: CurrentSession,
    QueryInput(query): QueryInput<LedgerQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let building = require_building(&state.db, query.building_id).await?;

    let expenses = ExpenseRepository::new((*state.db).clone())
        .list_for_building(building.id, query.month)
        .await?;

    let response: Vec<ExpenseResponse> = expenses.into_iter().map(Into::into).collect();
    Ok(Json(response))
}
