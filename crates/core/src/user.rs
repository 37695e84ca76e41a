//! User account entity.
//!
//! The entity stores the password in its hashed form; the raw password is
//! checked with [`validate_password`] at the orchestration layer before
//! hashing, so an over-long or empty password never reaches the hasher.
//! Email uniqueness is a creation-time check against storage, not a field
//! rule, and lives in the create handler.

use uuid::Uuid;

use crate::error::DomainError;
use crate::role::Role;
use crate::types::Id;
use crate::validate;

/// Maximum length for the user name (characters).
pub const NAME_MAX: usize = 100;
/// Maximum length for the raw password before hashing (characters).
pub const PASSWORD_MAX: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: Id,
    name: String,
    email: String,
    password_hash: String,
    role: Role,
}

/// Validate a raw (pre-hash) password.
pub fn validate_password(password: &str) -> Result<(), DomainError> {
    validate::required_text("password", password, PASSWORD_MAX)
}

impl User {
    /// Create a new user with a fresh identifier.
    ///
    /// `password_hash` must already be the hashed form.
    pub fn new(name: &str, email: &str, password_hash: &str, role: Role) -> Result<Self, DomainError> {
        validate::required_text("name", name, NAME_MAX)?;
        validate::email("email", email)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            role,
        })
    }

    /// Replace the mutable fields, keeping the identifier.
    pub fn update(
        self,
        name: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<Self, DomainError> {
        validate::required_text("name", name, NAME_MAX)?;
        validate::email("email", email)?;
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            role,
            ..self
        })
    }

    /// Rehydrate from trusted storage. Does not re-validate.
    pub fn restore(id: Id, name: String, email: String, password_hash: String, role: Role) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            role,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
