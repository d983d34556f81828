//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only the session lives here; reveal and gesture state is owned by the
//! component instance that mounted it.

pub mod auth;
