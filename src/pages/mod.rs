//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped orchestration and delegate gating and animation to
//! `components`.

pub mod auth;
pub mod dashboard;
pub mod home;
pub mod portal;
