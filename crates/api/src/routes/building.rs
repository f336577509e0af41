//! `building.*` procedures.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{DateTime, FixedOffset};
use condos_core::{building::NewBuilding, ledger::MonthlySummary, messages::SECRET_MESSAGE};
use condos_db::{BuildingRepository, ExpenseRepository, PaymentRepository, entities::buildings};
use condos_shared::requests::{BuildingIdQuery, CreateBuildingRequest, MonthlySummaryQuery};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::info;

use crate::{
    AppState,
    error::ApiError,
    extractors::{QueryInput, ValidatedJson},
    middleware::CurrentSession,
};

/// Creates the building procedure routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/building.getAll", get(get_all))
        .route("/building.getById", get(get_by_id))
        .route("/building.create", post(create))
        .route("/building.getSecretMessage", get(get_secret_message))
        .route("/building.getMonthlySummary", get(get_monthly_summary))
}

/// A building as returned by the procedures.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingResponse {
    /// Building ID.
    pub id: i32,
    /// Building name.
    pub name: String,
    /// User who registered the building.
    pub created_by_id: String,
    /// Creation time.
    pub created_at: DateTime<FixedOffset>,
    /// Last update time.
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// Number of floors.
    pub floors: i32,
    /// Number of fractions.
    pub fractions: i32,
}

impl From<buildings::Model> for BuildingResponse {
    fn from(b: buildings::Model) -> Self {
        Self {
            id: b.id,
            name: b.name,
            created_by_id: b.created_by_id,
            created_at: b.created_at,
            updated_at: b.updated_at,
            floors: b.floors,
            fractions: b.fractions,
        }
    }
}

/// Loads a building or fails with `NOT_FOUND`.
pub(crate) async fn require_building(
    db: &DatabaseConnection,
    id: i32,
) -> Result<buildings::Model, ApiError> {
    BuildingRepository::new(db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("building {id}")))
}

/// GET `/building.getAll` - List all buildings by name.
async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let buildings = BuildingRepository::new((*state.db).clone())
        .list_ordered_by_name()
        .await?;

    let response: Vec<BuildingResponse> = buildings.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

/// GET `/building.getById` - Fetch one building.
async fn get_by_id(
    State(state): State<AppState>,
    QueryInput(query): QueryInput<BuildingIdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let building = require_building(&state.db, query.id).await?;
    Ok(Json(BuildingResponse::from(building)))
}

/// POST `/building.create` - Register a building owned by the caller.
async fn create(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ValidatedJson(payload): ValidatedJson<CreateBuildingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let building = BuildingRepository::new((*state.db).clone())
        .create(NewBuilding::from(payload), session.user_id())
        .await?;

    info!(
        building_id = building.id,
        created_by = %building.created_by_id,
        "Building created"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// GET `/building.getSecretMessage` - Confirms the caller is signed in.
async fn get_secret_message(_session: CurrentSession) -> Json<&'static str> {
    Json(SECRET_MESSAGE)
}

/// GET `/building.getMonthlySummary` - Payment and expense totals for a month.
async fn get_monthly_summary(
    State(state): State<AppState>,
    _session: CurrentSession,
    QueryInput(query): QueryInput<MonthlySummaryQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let building = require_building(&state.db, query.building_id).await?;

    let payments = PaymentRepository::new((*state.db).clone())
        .list_for_building(building.id, Some(query.month))
        .await?;
    let expenses = ExpenseRepository::new((*state.db).clone())
        .list_for_building(building.id, Some(query.month))
        .await?;

    Ok(Json(MonthlySummary::compute(
        building.id,
        query.month,
        payments.iter().map(|p| p.amount),
        expenses.iter().map(|e| e.amount),
    )))
}
