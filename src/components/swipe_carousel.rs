//! Touch-swipeable carousel of cards.
//!
//! Swiping left advances, swiping right goes back; both wrap around. The dot
//! buttons give pointer and keyboard users the same navigation.

#[cfg(test)]
#[path = "swipe_carousel_test.rs"]
mod swipe_carousel_test;

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::Card;
use crate::util::swipe::{SwipeHandlers, SwipeOptions, use_swipe};

/// Slide after `current`, wrapping to the first.
pub(crate) fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Slide before `current`, wrapping to the last.
pub(crate) fn prev_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        (current - 1).min(len - 1)
    }
}

#[component]
pub fn SwipeCarousel(slides: Vec<Card>) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let len = slides.len();
    let active = RwSignal::new(0_usize);

    let handlers = SwipeHandlers::default()
        .on_left(move || active.update(|i| *i = next_slide(*i, len)))
        .on_right(move || active.update(|i| *i = prev_slide(*i, len)));
    use_swipe(target, handlers, SwipeOptions::default());

    let slide_views = slides
        .into_iter()
        .enumerate()
        .map(|(index, slide)| {
            view! {
                <div
                    class="carousel__slide"
                    class:carousel__slide--active=move || active.get() == index
                    aria-hidden=move || (active.get() != index).to_string()
                >
                    <h3 class="carousel__title">{slide.title}</h3>
                    <p class="carousel__body">{slide.body}</p>
                </div>
            }
        })
        .collect_view();

    let dots = (0..len)
        .map(|index| {
            view! {
                <button
                    class="carousel__dot"
                    class:carousel__dot--active=move || active.get() == index
                    aria-label=format!("Show slide {}", index + 1)
                    on:click=move |_| active.set(index)
                ></button>
            }
        })
        .collect_view();

    view! {
        <div node_ref=target class="carousel">
            <div class="carousel__track">{slide_views}</div>
            <div class="carousel__dots">{dots}</div>
        </div>
    }
}
