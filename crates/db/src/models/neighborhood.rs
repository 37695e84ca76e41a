//! Neighborhood rows and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use civica_core::neighborhood::Neighborhood;

/// A row from the `neighborhoods` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NeighborhoodRow {
    pub id: Uuid,
    pub city_id: Uuid,
    pub state_id: Uuid,
    pub name: String,
}

impl NeighborhoodRow {
    /// Rehydrate the domain entity from this row.
    pub fn into_domain(self) -> Neighborhood {
        Neighborhood::restore(self.id, self.city_id, self.state_id, self.name)
    }
}

/// A neighborhood joined with its city and state display names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NeighborhoodDetail {
    pub id: Uuid,
    pub name: String,
    pub city_id: Uuid,
    pub city_name: String,
    pub state_id: Uuid,
    pub state_name: String,
}

/// Request body for creating a neighborhood.
#[derive(Debug, Deserialize)]
pub struct CreateNeighborhood {
    pub city_id: Uuid,
    pub state_id: Uuid,
    pub name: String,
}

/// Request body for updating a neighborhood.
///
/// The owning city/state pair is fixed at creation; only the name changes.
#[derive(Debug, Deserialize)]
pub struct UpdateNeighborhood {
    pub name: String,
}
