//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wrap the `util` hooks into markup: route gating, reveal
//! animations, parallax layers and a swipeable carousel. Pages compose them.

pub mod parallax_layer;
pub mod protected_route;
pub mod reveal;
pub mod swipe_carousel;

/// Title/body pair rendered by the card-based components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub body: String,
}

impl Card {
    #[must_use]
    pub fn new(title: &str, body: &str) -> Self {
        Self { title: title.to_owned(), body: body.to_owned() }
    }
}
