//! Route definitions for the `/neighborhoods` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::neighborhoods;
use crate::state::AppState;

/// Neighborhood routes.
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
        .route("/", get(neighborhoods::list).post(neighborhoods::create))
        .route(
            "/{id}",
            get(neighborhoods::get_by_id)
                .put(neighborhoods::update)
                .delete(neighborhoods::delete),
        )
}
