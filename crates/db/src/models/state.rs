//! State row and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use civica_core::state::State;

/// A row from the `states` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StateRow {
    pub id: Uuid,
    pub name: String,
    pub code: String,
}

impl StateRow {
    /// Rehydrate the domain entity from this row.
    pub fn into_domain(self) -> State {
        State::restore(self.id, self.name, self.code)
    }
}

/// Request body for creating a state.
#[derive(Debug, Deserialize)]
pub struct CreateState {
    pub name: String,
    pub code: String,
}

/// Request body for updating a state.
#[derive(Debug, Deserialize)]
pub struct UpdateState {
    pub name: String,
    pub code: String,
}
