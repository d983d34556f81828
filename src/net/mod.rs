//! Networking modules for the session endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST calls the auth provider makes and `types` defines the
//! user schema shared with the backend.

pub mod api;
pub mod types;
