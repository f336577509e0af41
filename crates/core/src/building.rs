//! Building defaults and creation input.

use condos_shared::requests::CreateBuildingRequest;

/// Name stored when a building is created without one.
pub const DEFAULT_BUILDING_NAME: &str = "Novo condomínio";
/// Floor count stored when none is given.
pub const DEFAULT_FLOORS: i32 = 1;
/// Fraction count stored when none is given.
pub const DEFAULT_FRACTIONS: i32 = 1;

/// A building ready to be inserted, with defaults resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBuilding {
    /// Building name.
    pub name: String,
    /// Number of floors.
    pub floors: i32,
    /// Number of fractions (units).
    pub fractions: i32,
}

impl Default for NewBuilding {
    fn default() -> Self {
        Self {
            name: DEFAULT_BUILDING_NAME.to_string(),
            floors: DEFAULT_FLOORS,
            fractions: DEFAULT_FRACTIONS,
        }
    }
}

impl NewBuilding {
    /// Creates a building with the given name and default dimensions.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl From<CreateBuildingRequest> for NewBuilding {
    fn from(request: CreateBuildingRequest) -> Self {
        Self {
            name: request.name,
            floors: request.floors.unwrap_or(DEFAULT_FLOORS),
            fractions: request.fractions.unwrap_or(DEFAULT_FRACTIONS),
        }
    }
}
