pub mod agencies;
pub mod cities;
pub mod health;
pub mod locations;
pub mod neighborhoods;
pub mod reports;
pub mod states;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /states             list, create
/// /states/{id}        get, update, delete
/// /cities             list, create
/// /cities/{id}        get, update, delete
/// /neighborhoods      list, create
/// /neighborhoods/{id} get, update, delete
/// /locations          list, create
/// /locations/{id}     get, update, delete
/// /agencies           list, create
/// /agencies/{id}      get, update, delete
/// /users              list, create
/// /users/{id}         get, update, delete
/// /reports            list, create
/// /reports/{id}       get, update, delete
/// /reports/{id}/updates              list, create
/// /reports/{id}/updates/{update_id}  get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Administrative hierarchy.
        .nest("/states", states::router())
        .nest("/cities", cities::router())
        .nest("/neighborhoods", neighborhoods::router())
        // Addresses.
        .nest("/locations", locations::router())
        // Public agencies.
        .nest("/agencies", agencies::router())
        // User accounts.
        .nest("/users", users::router())
        // Reports and their follow-up timeline.
        .nest("/reports", reports::router())
}
