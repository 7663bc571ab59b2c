//! Roster server library surface.
//!
//! Exposed so integration tests can build the router against a fresh
//! [`infra::app_state::AppState`] without spawning the binary.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
