//! State entity, the root of the administrative hierarchy.

use uuid::Uuid;

use crate::error::DomainError;
use crate::types::Id;
use crate::validate;

/// Maximum length for the state name (characters).
pub const NAME_MAX: usize = 100;
/// A state code is the fixed two-letter abbreviation (e.g. "SP").
pub const CODE_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    id: Id,
    name: String,
    code: String,
}

impl State {
    /// Create a new state with a fresh identifier.
    pub fn new(name: &str, code: &str) -> Result<Self, DomainError> {
        validate::required_text("name", name, NAME_MAX)?;
        validate::exact_length("code", code, CODE_LEN)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            code: code.to_owned(),
        })
    }

    /// Replace the mutable fields, keeping the identifier.
    ///
    /// Fails without producing a value if any field is invalid.
    pub fn update(self, name: &str, code: &str) -> Result<Self, DomainError> {
        validate::required_text("name", name, NAME_MAX)?;
        validate::exact_length("code", code, CODE_LEN)?;
        Ok(Self {
            name: name.to_owned(),
            code: code.to_owned(),
            ..self
        })
    }

    /// Rehydrate from trusted storage. Does not re-validate.
    pub fn restore(id: Id, name: String, code: String) -> Self {
        Self { id, name, code }
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
}
