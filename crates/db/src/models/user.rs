//! User rows and request DTOs.
//!
//! The stored row carries the password hash; [`UserResponse`] is the only
//! shape that leaves the service and never includes it.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use civica_core::role::Role;
use civica_core::user::User;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

impl UserRow {
    /// Rehydrate the domain entity from this row.
    pub fn into_domain(self) -> User {
        let role = Role::parse(&self.role);
        User::restore(self.id, self.name, self.email, self.password_hash, role)
    }
}

/// Outward-facing user representation. No password material.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        UserResponse {
            id: row.id,
            name: row.name,
            email: row.email,
            role: row.role,
        }
    }
}

/// Request body for creating a user. `role` defaults to `USER` when
/// absent or unrecognized.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

/// Request body for updating a user.
#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}
