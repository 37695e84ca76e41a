//! Agency row and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use civica_core::agency::Agency;

/// A row from the `agencies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AgencyRow {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub description: String,
}

impl AgencyRow {
    /// Rehydrate the domain entity from this row.
    pub fn into_domain(self) -> Agency {
        Agency::restore(self.id, self.name, self.code, self.description)
    }
}

/// Request body for creating an agency.
#[derive(Debug, Deserialize)]
pub struct CreateAgency {
    pub name: String,
    pub code: String,
    pub description: String,
}

/// Request body for updating an agency.
#[derive(Debug, Deserialize)]
pub struct UpdateAgency {
    pub name: String,
    pub code: String,
    pub description: String,
}
