//! Resident defaults and payment attribution.

use condos_shared::requests::CreateResidentRequest;
use thiserror::Error;

/// Name stored when a resident is registered without one.
pub const DEFAULT_RESIDENT_NAME: &str = "Desconhecido";

/// A resident ready to be inserted, with defaults resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResident {
    /// Building the resident lives in.
    pub building_id: i32,
    /// Resident name.
    pub name: String,
    /// Phone or other short contact.
    pub contact: Option<String>,
    /// Floor number.
    pub floor: i32,
    /// Fraction (unit) number.
    pub fraction: i32,
}

impl From<CreateResidentRequest> for NewResident {
    fn from(request: CreateResidentRequest) -> Self {
        Self {
            building_id: request.building_id,
            name: request
                .name
                .unwrap_or_else(|| DEFAULT_RESIDENT_NAME.to_string()),
            contact: request.contact,
            floor: request.floor,
            fraction: request.fraction,
        }
    }
}

/// Reasons a payment cannot be attributed to a resident.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributionError {
    /// The resident lives in a different building.
    #[error("resident {resident_id} does not live in building {building_id}")]
    ForeignResident {
        /// Resident named by the payment.
        resident_id: i32,
        /// Building named by the payment.
        building_id: i32,
    },
}

/// Checks that a payment for `building_id` may be attributed to a resident
/// living in `resident_building_id`.
///
/// # Errors
///
/// Returns `AttributionError::ForeignResident` when the buildings differ.
pub const fn check_payment_attribution(
    resident_id: i32,
    resident_building_id: i32,
    building_id: i32,
) -> Result<(), AttributionError> {
    if resident_building_id == building_id {
        Ok(())
    } else {
        Err(AttributionError::ForeignResident {
            resident_id,
            building_id,
        })
    }
}
