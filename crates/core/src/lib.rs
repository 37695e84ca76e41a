//! Domain core for the civic-issue-reporting service.
//!
//! Entities are immutable value records: the only way to obtain one is a
//! `new` factory (validates every field before any state exists) and the
//! only way to change one is a consuming `update` transition that returns a
//! new validated instance or a [`error::DomainError`]. No I/O happens here;
//! persistence and HTTP live in `civica-db` and `civica-api`.

pub mod agency;
pub mod city;
pub mod error;
pub mod location;
pub mod neighborhood;
pub mod report;
pub mod report_update;
pub mod role;
pub mod state;
pub mod types;
pub mod user;
pub mod validate;
