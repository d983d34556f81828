//! # diveguide
//!
//! Leptos + WASM frontend core for the dive instructor and resort discovery
//! site.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Shell, routes and context providers |
//! | [`state`] | Session state and the auth provider |
//! | [`net`] | Session endpoints and user DTOs |
//! | [`util`] | Access decisions, reveal/stagger/parallax engines, swipe detection |
//! | [`components`] | `ProtectedRoute` and the animated building blocks |
//! | [`pages`] | Route-level screens |
//! | [`consts`] | Route targets and engine defaults |

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
