//! Route definitions for the `/reports` resource and its nested
//! follow-up timeline.

use axum::routing::get;
use axum::Router;

use crate::handlers::{report_updates, reports};
use crate::state::AppState;

/// Report routes.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// GET    /{id}/updates              -> follow-up list
/// POST   /{id}/updates              -> follow-up create
/// GET    /{id}/updates/{update_id}  -> follow-up get
/// DELETE /{id}/updates/{update_id}  -> follow-up delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reports::list).post(reports::create))
        .route(
            "/{id}",
            get(reports::get_by_id)
                .put(reports::update)
                .delete(reports::delete),
        )
        .route(
            "/{id}/updates",
            get(report_updates::list).post(report_updates::create),
        )
        .route(
            "/{id}/updates/{update_id}",
            get(report_updates::get_by_id).delete(report_updates::delete),
        )
}
