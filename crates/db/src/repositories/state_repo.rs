//! Repository for the `states` table.

use sqlx::PgExecutor;
use uuid::Uuid;

use civica_core::state::State;

use crate::models::state::StateRow;

/// Column list for `states` queries.
const COLUMNS: &str = "id, name, code";

/// Provides CRUD operations for states.
pub struct StateRepo;

impl StateRepo {
    /// Persist a new state, returning the stored row.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        state: &State,
    ) -> Result<StateRow, sqlx::Error> {
        let query =
            format!("INSERT INTO states (id, name, code) VALUES ($1, $2, $3) RETURNING {COLUMNS}");
        sqlx::query_as::<_, StateRow>(&query)
            .bind(state.id())
            .bind(state.name())
            .bind(state.code())
            .fetch_one(executor)
            .await
    }

    /// Find a state by ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<StateRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM states WHERE id = $1");
        sqlx::query_as::<_, StateRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all states ordered by name.
    pub async fn list(executor: impl PgExecutor<'_>) -> Result<Vec<StateRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM states ORDER BY name");
        sqlx::query_as::<_, StateRow>(&query)
            .fetch_all(executor)
            .await
    }

    /// Write the mutable fields of `state` back. Returns the updated row
    /// if the id still resolves.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        state: &State,
    ) -> Result<Option<StateRow>, sqlx::Error> {
        let query =
            format!("UPDATE states SET name = $1, code = $2 WHERE id = $3 RETURNING {COLUMNS}");
        sqlx::query_as::<_, StateRow>(&query)
            .bind(state.name())
            .bind(state.code())
            .bind(state.id())
            .fetch_optional(executor)
            .await
    }

    /// Hard-delete a state. Returns `false` if the id did not resolve.
    pub async fn delete(executor: impl PgExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM states WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a state row with `id` exists.
    pub async fn exists(executor: impl PgExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM states WHERE id = $1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    /// Number of rows that reference this state (cities plus
    /// neighborhoods). Non-zero blocks deletion.
    pub async fn dependent_count(
        executor: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT (SELECT COUNT(*) FROM cities WHERE state_id = $1) \
                  + (SELECT COUNT(*) FROM neighborhoods WHERE state_id = $1)",
        )
        .bind(id)
        .fetch_one(executor)
        .await
    }
}
