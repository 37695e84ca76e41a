//! Route definitions for the `/states` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::states;
use crate::state::AppState;

/// State routes.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(states::list).post(states::create))
        .route(
            "/{id}",
            get(states::get_by_id)
                .put(states::update)
                .delete(states::delete),
        )
}
