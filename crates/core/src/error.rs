use crate::types::Id;

/// Domain-level error taxonomy.
///
/// `Validation` is raised synchronously inside entity factories and update
/// transitions; `NotFound` and `Conflict` are raised by the orchestration
/// layer when a referenced row does not resolve or a uniqueness /
/// dependency rule is violated.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: Id },

    #[error("Validation failed for field '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    /// Shorthand for a validation failure on `field`.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::Validation {
            field,
            message: message.into(),
        }
    }
}
