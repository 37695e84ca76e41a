//! Neighborhood entity; belongs to one city and carries a denormalized
//! back-reference to the state.
//!
//! The state reference duplicates what could be derived through the city.
//! The pairing is therefore checked at the orchestration layer: a
//! neighborhood may only be created or moved under a city that belongs to
//! the referenced state.

use uuid::Uuid;

use crate::error::DomainError;
use crate::types::Id;
use crate::validate;

/// Maximum length for the neighborhood name (characters).
pub const NAME_MAX: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Neighborhood {
    id: Id,
    city_id: Id,
    state_id: Id,
    name: String,
}

impl Neighborhood {
    /// Create a new neighborhood under `city_id` / `state_id`.
    pub fn new(city_id: Id, state_id: Id, name: &str) -> Result<Self, DomainError> {
        validate::required_text("name", name, NAME_MAX)?;
        Ok(Self {
            id: Uuid::new_v4(),
            city_id,
            state_id,
            name: name.to_owned(),
        })
    }

    /// Replace the name, keeping identifier and owning city/state.
    pub fn update(self, name: &str) -> Result<Self, DomainError> {
        validate::required_text("name", name, NAME_MAX)?;
        Ok(Self {
            name: name.to_owned(),
            ..self
        })
    }

    /// Rehydrate from trusted storage. Does not re-validate.
    pub fn restore(id: Id, city_id: Id, state_id: Id, name: String) -> Self {
        Self {
            id,
            city_id,
            state_id,
            name,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn city_id(&self) -> Id {
        self.city_id
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
        let (city, state) = (Uuid::new_v4(), Uuid::new_v4());
        assert!(Neighborhood::new(city, state, &"a".repeat(100)).is_ok());
        assert!(Neighborhood::new(city, state, &"a".repeat(101)).is_err());
        assert!(Neighborhood::new(city, state, "").is_err());
    }

    #[test]
    fn update_keeps_references() {
        let n = Neighborhood::new(Uuid::new_v4(), Uuid::new_v4(), "Centro").unwrap();
        let (id, city, state) = (n.id(), n.city_id(), n.state_id());
        let updated = n.update("Jardins").unwrap();
        assert_eq!(updated.id(), id);
        assert_eq!(updated.city_id(), city);
        assert_eq!(updated.state_id(), state);
    }
}
