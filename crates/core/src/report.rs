//! Report entity, a filed civic complaint.
//!
//! A report references one user, one location and one public agency by
//! identifier. All three must resolve to existing rows at creation time;
//! that check is a transaction-level precondition owned by the create
//! handler, not a field rule here.
//!
//! Status is a free-form string, not a state machine. A fresh report
//! starts at [`DEFAULT_STATUS`]; any later value only has to be non-empty
//! and bounded.

use chrono::Utc;
use uuid::Uuid;

use crate::error::DomainError;
use crate::types::{Id, Timestamp};
use crate::validate;

/// Maximum length for the report title (characters).
pub const TITLE_MAX: usize = 100;
/// Maximum length for the report description (characters).
pub const DESCRIPTION_MAX: usize = 500;
/// Maximum length for the status string (characters).
pub const STATUS_MAX: usize = 50;
/// Status assigned to every newly filed report.
pub const DEFAULT_STATUS: &str = "Pending";

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    id: Id,
    user_id: Id,
    location_id: Id,
    agency_id: Id,
    title: String,
    description: String,
    reported_at: Timestamp,
    status: String,
}

impl Report {
    /// File a new report.
    ///
    /// Assigns a fresh identifier, stamps the server clock and starts the
    /// status at [`DEFAULT_STATUS`].
    pub fn new(
        user_id: Id,
        location_id: Id,
        agency_id: Id,
        title: &str,
        description: &str,
    ) -> Result<Self, DomainError> {
        validate::required_text("title", title, TITLE_MAX)?;
        validate::required_text("description", description, DESCRIPTION_MAX)?;
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            location_id,
            agency_id,
            title: title.to_owned(),
            description: description.to_owned(),
            reported_at: Utc::now(),
            status: DEFAULT_STATUS.to_owned(),
        })
    }

    /// Replace title, description and status.
    ///
    /// Identifier, references and filing timestamp never change. Fails
    /// atomically: on error the prior instance is simply not replaced.
    pub fn update(self, title: &str, description: &str, status: &str) -> Result<Self, DomainError> {
        validate::required_text("title", title, TITLE_MAX)?;
        validate::required_text("description", description, DESCRIPTION_MAX)?;
        validate::required_text("status", status, STATUS_MAX)?;
        Ok(Self {
            title: title.to_owned(),
            description: description.to_owned(),
            status: status.to_owned(),
            ..self
        })
    }

    /// Rehydrate from trusted storage. Does not re-validate.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: Id,
        user_id: Id,
        location_id: Id,
        agency_id: Id,
        title: String,
        description: String,
        reported_at: Timestamp,
        status: String,
    ) -> Self {
        Self {
            id,
            user_id,
            location_id,
            agency_id,
            title,
            description,
            reported_at,
            status,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn user_id(&self) -> Id {
        self.user_id
    }

    pub fn location_id(&self) -> Id {
        self.location_id
    }

    pub fn agency_id(&self) -> Id {
        self.agency_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn reported_at(&self) -> Timestamp {
        self.reported_at
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}
