//! Route definitions for the `/agencies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::agencies;
use crate::state::AppState;

/// Agency routes.
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
        .route("/", get(agencies::list).post(agencies::create))
        .route(
            "/{id}",
            get(agencies::get_by_id)
                .put(agencies::update)
                .delete(agencies::delete),
        )
}
