//! Report rows and request DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use civica_core::report::Report;

/// A row from the `reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub location_id: Uuid,
    pub agency_id: Uuid,
    pub title: String,
    pub description: String,
    pub reported_at: DateTime<Utc>,
    pub status: String,
}

impl ReportRow {
    /// Rehydrate the domain entity from this row.
    pub fn into_domain(self) -> Report {
        Report::restore(
            self.id,
            self.user_id,
            self.location_id,
            self.agency_id,
            self.title,
            self.description,
            self.reported_at,
            self.status,
        )
    }
}

/// A report denormalized for display: reporter and agency names, and the
/// location condensed to `"street, number"`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportDetail {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub reported_at: DateTime<Utc>,
    pub status: String,
    pub user_name: String,
    pub location: String,
    pub agency_name: String,
}

/// Request body for filing a report.
#[derive(Debug, Deserialize)]
pub struct CreateReport {
    pub user_id: Uuid,
    pub location_id: Uuid,
    pub agency_id: Uuid,
    pub title: String,
    pub description: String,
}

/// Request body for updating a report. References and filing timestamp
/// are fixed; only title, description and status change.
#[derive(Debug, Deserialize)]
pub struct UpdateReport {
    pub title: String,
    pub description: String,
    pub status: String,
}
