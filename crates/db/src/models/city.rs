//! City rows and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use civica_core::city::City;

/// A row from the `cities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CityRow {
    pub id: Uuid,
    pub state_id: Uuid,
    pub name: String,
}

impl CityRow {
    /// Rehydrate the domain entity from this row.
    pub fn into_domain(self) -> City {
        City::restore(self.id, self.state_id, self.name)
    }
}

/// A city joined with its state's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CityDetail {
    pub id: Uuid,
    pub name: String,
    pub state_id: Uuid,
    pub state_name: String,
}

/// Request body for creating a city.
#[derive(Debug, Deserialize)]
pub struct CreateCity {
    pub state_id: Uuid,
    pub name: String,
}

/// Request body for updating a city.
///
/// The owning state is fixed at creation; only the name changes.
#[derive(Debug, Deserialize)]
pub struct UpdateCity {
    pub name: String,
}
