//! Report follow-up rows and request DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `report_updates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportUpdateRow {
    pub id: Uuid,
    pub report_id: Uuid,
    pub status: String,
    pub note: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for appending a follow-up to a report.
#[derive(Debug, Deserialize)]
pub struct CreateReportUpdate {
    pub status: String,
    pub note: Option<String>,
}
