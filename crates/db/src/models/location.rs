//! Location rows and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use civica_core::location::{Location, LocationFields};

/// A row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LocationRow {
    pub id: Uuid,
    pub neighborhood_id: Uuid,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationRow {
    /// Rehydrate the domain entity from this row.
    pub fn into_domain(self) -> Location {
        Location::restore(
            self.id,
            self.neighborhood_id,
            self.street,
            self.number,
            self.complement,
            self.postal_code,
            self.latitude,
            self.longitude,
        )
    }
}

/// A location joined with the display names of its neighborhood and, by
/// traversal, city and state.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LocationDetail {
    pub id: Uuid,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub neighborhood_id: Uuid,
    pub neighborhood_name: String,
    pub city_name: String,
    pub state_name: String,
}

/// Request body for creating or updating a location.
#[derive(Debug, Deserialize)]
pub struct LocationInput {
    pub neighborhood_id: Uuid,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationInput {
    /// Borrow the mutable fields in the shape the entity factory expects.
    pub fn as_fields(&self) -> LocationFields<'_> {
        LocationFields {
            street: &self.street,
            number: &self.number,
            complement: self.complement.as_deref(),
            postal_code: self.postal_code.as_deref(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
