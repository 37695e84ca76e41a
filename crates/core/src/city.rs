//! City entity; belongs to one state.

use uuid::Uuid;

use crate::error::DomainError;
use crate::types::Id;
use crate::validate;

/// Maximum length for the city name (characters).
pub const NAME_MAX: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    id: Id,
    state_id: Id,
    name: String,
}

impl City {
    /// Create a new city under `state_id`.
    ///
    /// The caller is responsible for having resolved `state_id` to an
    /// existing state row.
    pub fn new(state_id: Id, name: &str) -> Result<Self, DomainError> {
        validate::required_text("name", name, NAME_MAX)?;
        Ok(Self {
            id: Uuid::new_v4(),
            state_id,
            name: name.to_owned(),
        })
    }

    /// Replace the name, keeping identifier and owning state.
    pub fn update(self, name: &str) -> Result<Self, DomainError> {
        validate::required_text("name", name, NAME_MAX)?;
        Ok(Self {
            name: name.to_owned(),
            ..self
        })
    }

    /// Rehydrate from trusted storage. Does not re-validate.
    pub fn restore(id: Id, state_id: Id, name: String) -> Self {
        Self { id, state_id, name }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn state_id(&self) -> Id {
        self.state_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_boundary() {
        let state_id = Uuid::new_v4();
        assert!(City::new(state_id, &"a".repeat(100)).is_ok());
        assert!(City::new(state_id, &"a".repeat(101)).is_err());
        assert!(City::new(state_id, "  ").is_err());
    }

    #[test]
    fn update_keeps_id_and_state() {
        let city = City::new(Uuid::new_v4(), "Curitiba").unwrap();
        let (id, state_id) = (city.id(), city.state_id());
        let updated = city.update("Londrina").unwrap();
        assert_eq!(updated.id(), id);
        assert_eq!(updated.state_id(), state_id);
        assert_eq!(updated.name(), "Londrina");
    }
}
