//! Repository for the `users` table.

use sqlx::PgExecutor;
use uuid::Uuid;

use civica_core::user::User;

use crate::models::user::UserRow;

/// Column list for `users` queries.
const COLUMNS: &str = "id, name, email, password_hash, role";

/// Provides CRUD operations for user accounts.
pub struct UserRepo;

impl UserRepo {
    /// Persist a new user, returning the stored row.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        user: &User,
    ) -> Result<UserRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, name, email, password_hash, role) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserRow>(&query)
            .bind(user.id())
            .bind(user.name())
            .bind(user.email())
            .bind(user.password_hash())
            .bind(user.role().as_str())
            .fetch_one(executor)
            .await
    }

    /// Find a user by ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a user by email. Used for the creation-time uniqueness check.
    pub async fn find_by_email(
        executor: impl PgExecutor<'_>,
        email: &str,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, UserRow>(&query)
            .bind(email)
            .fetch_optional(executor)
            .await
    }

    /// List all users ordered by name.
    pub async fn list(executor: impl PgExecutor<'_>) -> Result<Vec<UserRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY name");
        sqlx::query_as::<_, UserRow>(&query)
            .fetch_all(executor)
            .await
    }

    /// Write the mutable fields of `user` back. Returns the updated row
    /// if the id still resolves.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        user: &User,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET name = $1, email = $2, password_hash = $3, role = $4 \
             WHERE id = $5 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserRow>(&query)
            .bind(user.name())
            .bind(user.email())
            .bind(user.password_hash())
            .bind(user.role().as_str())
            .bind(user.id())
            .fetch_optional(executor)
            .await
    }

    /// Hard-delete a user. Returns `false` if the id did not resolve.
    pub async fn delete(executor: impl PgExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a user row with `id` exists.
    pub async fn exists(executor: impl PgExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    /// Number of reports filed by this user. Non-zero blocks deletion.
    pub async fn dependent_count(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports WHERE user_id = $1")
            .bind(id)
            .fetch_one(executor)
            .await
    }
}
