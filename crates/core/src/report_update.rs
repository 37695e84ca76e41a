//! Report follow-up entry.
//!
//! Appended to a report's timeline when its handling progresses. Entries
//! are immutable once written; correcting one means appending another.

use chrono::Utc;
use uuid::Uuid;

use crate::error::DomainError;
use crate::types::{Id, Timestamp};
use crate::validate;

/// Maximum length for the status string (characters).
pub const STATUS_MAX: usize = 50;
/// Maximum length for the optional note (characters).
pub const NOTE_MAX: usize = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportUpdate {
    id: Id,
    report_id: Id,
    status: String,
    note: Option<String>,
    updated_at: Timestamp,
}

impl ReportUpdate {
    /// Append a follow-up entry to `report_id`, stamping the server clock.
    pub fn new(report_id: Id, status: &str, note: Option<&str>) -> Result<Self, DomainError> {
        validate::required_text("status", status, STATUS_MAX)?;
        validate::optional_text("note", note, NOTE_MAX)?;
        Ok(Self {
            id: Uuid::new_v4(),
            report_id,
            status: status.to_owned(),
            note: note.map(str::to_owned),
            updated_at: Utc::now(),
        })
    }

    /// Rehydrate from trusted storage. Does not re-validate.
    pub fn restore(
        id: Id,
        report_id: Id,
        status: String,
        note: Option<String>,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            report_id,
            status,
            note,
            updated_at,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn report_id(&self) -> Id {
        self.report_id
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
