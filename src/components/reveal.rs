//! Scroll-reveal wrappers.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::Card;
use crate::consts::STAGGER_DELAY_MS;
use crate::util::reveal::{RevealOptions, use_scroll_reveal};
use crate::util::stagger::use_staggered_reveal;

/// Class list for a revealable block.
pub(crate) fn reveal_class(base: &str, visible: bool) -> String {
    let base = base.trim();
    match (base.is_empty(), visible) {
        (true, false) => "reveal".to_owned(),
        (true, true) => "reveal reveal--visible".to_owned(),
        (false, false) => format!("{base} reveal"),
        (false, true) => format!("{base} reveal reveal--visible"),
    }
}

/// Fade `children` in when they scroll into view.
#[component]
pub fn Reveal(
    /// Hide again when scrolled out of view.
    #[prop(optional)]
    restartable: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let options = if restartable { RevealOptions::default().restartable() } else { RevealOptions::default() };
    let visible = use_scroll_reveal(target, options);

    view! {
        <div node_ref=target class=move || reveal_class(&class, visible.get())>
            {children()}
        </div>
    }
}

/// Card grid whose cards appear one after another once the grid is in view.
#[component]
pub fn StaggeredCards(
    cards: Vec<Card>,
    #[prop(default = STAGGER_DELAY_MS)] delay_ms: u32,
) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let reveal = use_staggered_reveal(target, cards.len(), delay_ms, RevealOptions::default());

    let items = cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| {
            let shown = move || reveal.visible_items.with(|items| items.get(index).copied().unwrap_or(false));
            view! {
                <article class=move || reveal_class("card", shown())>
                    <h3 class="card__title">{card.title}</h3>
                    <p class="card__body">{card.body}</p>
                </article>
            }
        })
        .collect_view();

    view! {
        <div node_ref=target class="card-grid">
            {items}
        </div>
    }
}
