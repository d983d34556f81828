//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module keeps its rules in plain, natively testable types and confines
//! browser wiring (observers, listeners, timers) to `hydrate`-only code behind
//! a `use_*` hook.

pub mod access;
pub mod parallax;
pub mod reveal;
pub mod stagger;
pub mod swipe;
pub mod timers;
