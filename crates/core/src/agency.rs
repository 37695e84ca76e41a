//! Public agency entity, the body responsible for addressing reports.

use uuid::Uuid;

use crate::error::DomainError;
use crate::types::Id;
use crate::validate;

/// Maximum length for the agency name (characters).
pub const NAME_MAX: usize = 100;
/// Maximum length for the agency short code (characters).
pub const CODE_MAX: usize = 10;
/// Maximum length for the agency description (characters).
pub const DESCRIPTION_MAX: usize = 250;

#[derive(Debug, Clone, PartialEq)]
pub struct Agency {
    id: Id,
    name: String,
    code: String,
    description: String,
}

impl Agency {
    /// Create a new agency with a fresh identifier.
    pub fn new(name: &str, code: &str, description: &str) -> Result<Self, DomainError> {
        validate::required_text("name", name, NAME_MAX)?;
        validate::required_text("code", code, CODE_MAX)?;
        validate::required_text("description", description, DESCRIPTION_MAX)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            code: code.to_owned(),
            description: description.to_owned(),
        })
    }

    /// Replace the mutable fields, keeping the identifier.
    pub fn update(self, name: &str, code: &str, description: &str) -> Result<Self, DomainError> {
        validate::required_text("name", name, NAME_MAX)?;
        validate::required_text("code", code, CODE_MAX)?;
        validate::required_text("description", description, DESCRIPTION_MAX)?;
        Ok(Self {
            name: name.to_owned(),
            code: code.to_owned(),
            description: description.to_owned(),
            ..self
        })
    }

    /// Rehydrate from trusted storage. Does not re-validate.
    pub fn restore(id: Id, name: String, code: String, description: String) -> Self {
        Self {
            id,
            name,
            code,
            description,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
