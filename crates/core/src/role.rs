//! User role, a closed two-variant enum.
//!
//! The wire format is the upper-case role name. Parsing is
//! case-insensitive and falls back to [`Role::User`] for anything
//! unrecognized, which is the documented default tier for self-registered
//! accounts.

/// Access tier of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Parse a role name, falling back to [`Role::User`] on unknown input.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Role::Admin,
            _ => Role::User,
        }
    }

    /// Canonical wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
