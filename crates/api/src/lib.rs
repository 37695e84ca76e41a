//! HTTP layer for the civic-issue-reporting service.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! router assembly) so integration tests and the binary entrypoint share
//! the exact same stack.

pub mod config;
pub mod error;
pub mod handlers;
pub mod password;
pub mod router;
pub mod routes;
pub mod state;
