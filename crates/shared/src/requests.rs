//! Procedure input payloads.
//!
//! Field names follow the camelCase convention of the RPC surface.

use serde::Deserialize;
use validator::Validate;

use crate::types::Month;

/// Input of `building.create`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuildingRequest {
    /// Building name; must not be empty.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Number of floors, defaults to 1.
    #[validate(range(min = 1))]
    pub floors: Option<i32>,
    /// Number of fractions (units), defaults to 1.
    #[validate(range(min = 1))]
    pub fractions: Option<i32>,
}

/// Input of `building.getById`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BuildingIdQuery {
    /// Building ID.
    pub id: i32,
}

/// Input of procedures scoped to a single building.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingScopeQuery {
    /// Building ID.
    pub building_id: i32,
}

/// Input of `payment.getByBuilding` and `expense.getByBuilding`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerQuery {
    /// Building ID.
    pub building_id: i32,
    /// Restricts the listing to one month.
    pub month: Option<Month>,
}

/// Input of `building.getMonthlySummary`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummaryQuery {
    /// Building ID.
    pub building_id: i32,
    /// Month to summarize.
    pub month: Month,
}

/// Input of `resident.create`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateResidentRequest {
    /// Building the resident lives in.
    pub building_id: i32,
    /// Resident name; a placeholder is stored when omitted.
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// Phone or other short contact.
    #[validate(length(max = 15))]
    pub contact: Option<String>,
    /// Floor number, 0 being the ground floor.
    #[validate(range(min = 0))]
    pub floor: i32,
    /// Fraction (unit) number within the building.
    #[validate(range(min = 1))]
    pub fraction: i32,
}

/// Input of `payment.create`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    /// Building receiving the payment.
    pub building_id: i32,
    /// Paying resident; must live in `building_id`.
    pub resident_id: i32,
    /// Amount in minor currency units.
    #[validate(range(min = 0))]
    pub amount: i32,
    /// Month the payment settles.
    pub month: Month,
    /// Free-form note.
    #[validate(length(max = 255))]
    pub description: Option<String>,
}

/// Input of `expense.create`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    /// Building incurring the expense.
    pub building_id: i32,
    /// Amount in minor currency units.
    #[validate(range(min = 0))]
    pub amount: i32,
    /// Month the expense is booked against.
    pub month: Month,
    /// Free-form note.
    #[validate(length(max = 255))]
    pub description: Option<String>,
}
