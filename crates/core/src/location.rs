//! Location entity, a postal address anchored to a neighborhood.
//!
//! The neighborhood is the single owning reference; city and state are
//! reached by traversal, never stored here. Latitude/longitude are carried
//! for future use and take no part in any computation.

use uuid::Uuid;

use crate::error::DomainError;
use crate::types::Id;
use crate::validate;

/// Maximum length for the street name (characters).
pub const STREET_MAX: usize = 100;
/// Maximum length for the street number (characters).
pub const NUMBER_MAX: usize = 10;
/// Maximum length for the optional complement (characters).
pub const COMPLEMENT_MAX: usize = 50;
/// Maximum length for the optional postal code (characters).
pub const POSTAL_CODE_MAX: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    id: Id,
    neighborhood_id: Id,
    street: String,
    number: String,
    complement: Option<String>,
    postal_code: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Mutable fields of a [`Location`], shared by `new` and `update`.
#[derive(Debug, Clone, Default)]
pub struct LocationFields<'a> {
    pub street: &'a str,
    pub number: &'a str,
    pub complement: Option<&'a str>,
    pub postal_code: Option<&'a str>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

fn validate_fields(fields: &LocationFields<'_>) -> Result<(), DomainError> {
    validate::required_text("street", fields.street, STREET_MAX)?;
    validate::required_text("number", fields.number, NUMBER_MAX)?;
    validate::optional_text("complement", fields.complement, COMPLEMENT_MAX)?;
    validate::optional_text("postal_code", fields.postal_code, POSTAL_CODE_MAX)?;
    Ok(())
}

impl Location {
    /// Create a new location under `neighborhood_id`.
    pub fn new(neighborhood_id: Id, fields: LocationFields<'_>) -> Result<Self, DomainError> {
        validate_fields(&fields)?;
        Ok(Self {
            id: Uuid::new_v4(),
            neighborhood_id,
            street: fields.street.to_owned(),
            number: fields.number.to_owned(),
            complement: fields.complement.map(str::to_owned),
            postal_code: fields.postal_code.map(str::to_owned),
            latitude: fields.latitude,
            longitude: fields.longitude,
        })
    }

    /// Replace the address fields and owning neighborhood, keeping the
    /// identifier. Fails atomically: no field is applied on error.
    pub fn update(
        self,
        neighborhood_id: Id,
        fields: LocationFields<'_>,
    ) -> Result<Self, DomainError> {
        validate_fields(&fields)?;
        Ok(Self {
            neighborhood_id,
            street: fields.street.to_owned(),
            number: fields.number.to_owned(),
            complement: fields.complement.map(str::to_owned),
            postal_code: fields.postal_code.map(str::to_owned),
            latitude: fields.latitude,
            longitude: fields.longitude,
            ..self
        })
    }

    /// Rehydrate from trusted storage. Does not re-validate.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: Id,
        neighborhood_id: Id,
        street: String,
        number: String,
        complement: Option<String>,
        postal_code: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id,
            neighborhood_id,
            street,
            number,
            complement,
            postal_code,
            latitude,
            longitude,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn neighborhood_id(&self) -> Id {
        self.neighborhood_id
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn complement(&self) -> Option<&str> {
        self.complement.as_deref()
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields<'a>(street: &'a str, number: &'a str) -> LocationFields<'a> {
        LocationFields {
            street,
            number,
            ..Default::default()
        }
    }

    #[test]
    fn street_boundary() {
        let n = Uuid::new_v4();
        assert!(Location::new(n, fields(&"a".repeat(100), "12")).is_ok());
        assert!(Location::new(n, fields(&"a".repeat(101), "12")).is_err());
        assert!(Location::new(n, fields("", "12")).is_err());
    }

    #[test]
    fn number_boundary() {
        let n = Uuid::new_v4();
        assert!(Location::new(n, fields("Rua das Flores", &"1".repeat(10))).is_ok());
        assert!(Location::new(n, fields("Rua das Flores", &"1".repeat(11))).is_err());
        assert!(Location::new(n, fields("Rua das Flores", " ")).is_err());
    }

    #[test]
    fn complement_is_optional_but_bounded() {
        let n = Uuid::new_v4();
        let long = "c".repeat(51);
        let mut f = fields("Rua A", "1");
        f.complement = Some(&long);
        assert!(Location::new(n, f).is_err());

        let ok = "c".repeat(50);
        let mut f = fields("Rua A", "1");
        f.complement = Some(&ok);
        assert!(Location::new(n, f).is_ok());
    }

    #[test]
    fn update_replaces_owning_neighborhood() {
        let loc = Location::new(Uuid::new_v4(), fields("Rua A", "1")).unwrap();
        let id = loc.id();
        let other = Uuid::new_v4();
        let updated = loc.update(other, fields("Rua B", "2")).unwrap();
        assert_eq!(updated.id(), id);
        assert_eq!(updated.neighborhood_id(), other);
        assert_eq!(updated.street(), "Rua B");
    }

    #[test]
    fn failed_update_yields_error_not_partial_state() {
        let loc = Location::new(Uuid::new_v4(), fields("Rua A", "1")).unwrap();
        let result = loc.clone().update(loc.neighborhood_id(), fields("Rua B", ""));
        assert!(result.is_err());
        assert_eq!(loc.street(), "Rua A");
    }
}
