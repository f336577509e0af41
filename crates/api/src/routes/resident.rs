//! `resident.*` procedures.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use condos_core::resident::NewResident;
use condos_db::{ResidentRepository, entities::residents};
use condos_shared::requests::{BuildingScopeQuery, CreateResidentRequest};
use serde::Serialize;
use tracing::info;

use super::building::require_building;
use crate::{
    AppState,
    error::ApiError,
    extractors::{QueryInput, ValidatedJson},
    middleware::CurrentSession,
};

/// Creates the resident procedure routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/resident.create", post(create))
        .route("/resident.getByBuilding", get(get_by_building))
}

/// A resident as returned by the procedures.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentResponse {
    /// Resident ID.
    pub id: i32,
    /// Building the resident lives in.
    pub building_id: i32,
    /// Resident name.
    pub name: String,
    /// Short contact.
    pub contact: Option<String>,
    /// Floor number.
    pub floor: i32,
    /// Fraction number.
    pub fraction: i32,
}

impl From<residents::Model> for ResidentResponse {
    fn from(r: residents::Model) -> Self {
        Self {
            id: r.id,
            building_id: r.building_id,
            name: r.name,
            contact: r.contact,
            floor: r.floor,
            fraction: r.fraction,
        }
    }
}

/// POST `/resident.create` - Register a resident in an existing building.
async fn create(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ValidatedJson(payload): ValidatedJson<CreateResidentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let building = require_building(&state.db, payload.building_id).await?;

    let resident = ResidentRepository::new((*state.db).clone())
        .create(NewResident::from(payload))
        .await?;

    info!(
        resident_id = resident.id,
        building_id = building.id,
        user_id = %session.user_id(),
        "Resident registered"
    );

    Ok((StatusCode::CREATED, Json(ResidentResponse::from(resident))))
}

/// GET `/resident.getByBuilding` - List a building's residents.
async fn get_by_building(
    State(state): State<AppState>,
    _session: CurrentSession,
    QueryInput(query): QueryInput<BuildingScopeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let building = require_building(&state.db, query.building_id).await?;

    let residents = ResidentRepository::new((*state.db).clone())
        .list_for_building(building.id)
        .await?;

    let response: Vec<ResidentResponse> = residents.into_iter().map(Into::into).collect();
    Ok(Json(response))
}
