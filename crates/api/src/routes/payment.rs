//! `payment.*` procedures.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use condos_core::resident::check_payment_attribution;
use condos_db::{CreatePaymentInput, PaymentRepository, ResidentRepository, entities::payments};
use condos_shared::requests::{CreatePaymentRequest, LedgerQuery};
use serde::Serialize;
use tracing::{info, warn};

use super::building::require_building;
use crate::{
    AppState,
    error::ApiError,
    extractors::{QueryInput, ValidatedJson},
    middleware::CurrentSession,
};

/// Creates the payment procedure routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payment.create", post(create))
        .route("/payment.getByBuilding", get(get_by_building))
}

/// A payment as returned by the procedures.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    /// Payment ID.
    pub id: i32,
    /// Building receiving the payment.
    pub building_id: i32,
    /// Paying resident.
    pub resident_id: i32,
    /// Amount in minor units.
    pub amount: i32,
    /// Month as `YYYY-MM`.
    pub month: String,
    /// Free-form note.
    pub description: Option<String>,
}

impl From<payments::Model> for PaymentResponse {
    fn from(p: payments::Model) -> Self {
        Self {
            id: p.id,
            building_id: p.building_id,
            resident_id: p.resident_id,
            amount: p.amount,
            month: p.month,
            description: p.description,
        }
    }
}

/// POST `/payment.create` - Record a resident's payment.
async fn create(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ValidatedJson(payload): ValidatedJson<CreatePaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let building = require_building(&state.db, payload.building_id).await?;

    let resident = ResidentRepository::new((*state.db).clone())
        .find_by_id(payload.resident_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("resident {}", payload.resident_id)))?;

    if let Err(e) = check_payment_attribution(resident.id, resident.building_id, building.id) {
        warn!(error = %e, "Payment rejected");
        return Err(ApiError::validation(e.to_string()));
    }

    let payment = PaymentRepository::new((*state.db).clone())
        .create(CreatePaymentInput {
            building_id: building.id,
            resident_id: resident.id,
            amount: payload.amount,
            month: payload.month,
            description: payload.description,
        })
        .await?;

    info!(
        payment_id = payment.id,
        building_id = building.id,
        month = %payment.month,
        user_id = %session.user_id(),
        "Payment recorded"
    );

    Ok((StatusCode::CREATED, Json(PaymentResponse::from(payment))))
}

/// GET `/payment.getByBuilding` - List a building's payments.
async fn get_by_building(
    State(state): State<AppState>,
    _session: CurrentSession,
    QueryInput(query): QueryInput<LedgerQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let building = require_building(&state.db, query.building_id).await?;

    let payments = PaymentRepository::new((*state.db).clone())
        .list_for_building(building.id, query.month)
        .await?;

    let response: Vec<PaymentResponse> = payments.into_iter().map(Into::into).collect();
    Ok(Json(response))
}
