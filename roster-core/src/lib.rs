//! # Roster Core
//!
//! Domain model and in-memory store for the Roster user registry.
//!
//! This crate is HTTP-agnostic: it owns the [`User`] record type, the shape
//! validation applied to incoming payloads, and the [`UserStore`] that
//! allocates ids and enforces the email-uniqueness invariant. The server
//! crate wraps the store in a mutex and maps [`StoreError`] /
//! [`ValidationError`] onto HTTP status codes.

pub mod api_types;
pub mod store;
pub mod user;

pub use api_types::ApiResponse;
pub use store::{StoreError, UserStore};
pub use user::{User, UserPayload, ValidationError};
