//! Request handlers, one submodule per resource.
//!
//! Each submodule provides async handler functions (list, get_by_id,
//! create, update, delete) for a single entity type. Handlers decode the
//! DTO, resolve referenced rows, run the entity factory or update
//! transition from `civica_core`, persist through `civica_db` inside a
//! per-request transaction, and map errors via [`crate::error::AppError`].

pub mod agencies;
pub mod cities;
pub mod locations;
pub mod neighborhoods;
pub mod report_updates;
pub mod reports;
pub mod states;
pub mod users;
