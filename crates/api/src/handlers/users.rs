//! Handlers for the `/users` resource.
//!
//! Email uniqueness is a creation-time check against storage inside the
//! same transaction as the insert; there is no database constraint, and
//! updates do not re-check. Responses never carry password material.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use civica_core::error::DomainError;
use civica_core::role::Role;
use civica_core::user::{self, User};
use civica_db::models::user::{CreateUser, UpdateUser, UserResponse};
use civica_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::password::hash_password;
use crate::state::AppState;

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "User",
            id,
        }))?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /api/users
///
/// 400 if the email is already registered.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let mut tx = state.pool.begin().await?;

    if UserRepo::find_by_email(&mut *tx, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Domain(DomainError::Conflict(
            "Email already registered".into(),
        )));
    }

    user::validate_password(&input.password)?;
    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let role = Role::parse(input.role.as_deref().unwrap_or("USER"));
    let entity = User::new(&input.name, &input.email, &hashed, role)?;
    let row = UserRepo::insert(&mut *tx, &entity).await?;
    tx.commit().await?;

    tracing::info!(user_id = %row.id, "User created");
    Ok((StatusCode::CREATED, Json(UserResponse::from(row))))
}

/// PUT /api/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    let mut tx = state.pool.begin().await?;

    let current = UserRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "User",
            id,
        }))?;

    user::validate_password(&input.password)?;
    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let role = Role::parse(input.role.as_deref().unwrap_or("USER"));
    let updated = current
        .into_domain()
        .update(&input.name, &input.email, &hashed, role)?;
    let row = UserRepo::update(&mut *tx, &updated)
        .await?
        .ok_or(AppError::Domain(DomainError::NotFound {
            entity: "User",
            id,
        }))?;
    tx.commit().await?;

    Ok(Json(UserResponse::from(row)))
}

/// DELETE /api/users/{id}
///
/// Rejected while reports still reference the user.
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;

    let dependents = UserRepo::dependent_count(&mut *tx, id).await?;
    if dependents > 0 {
        return Err(AppError::Domain(DomainError::Conflict(format!(
            "User has {dependents} filed report(s) and cannot be deleted"
        ))));
    }

    let deleted = UserRepo::delete(&mut *tx, id).await?;
    if !deleted {
        return Err(AppError::Domain(DomainError::NotFound {
            entity: "User",
            id,
        }));
    }
    tx.commit().await?;

    tracing::info!(user_id = %id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
