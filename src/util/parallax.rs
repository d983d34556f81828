//! Scroll-driven parallax offset.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use leptos::html::Div;
use leptos::prelude::*;

/// Offset for a given vertical scroll position: `scroll_y * speed`.
///
/// Linear with no clamping or easing, so negative speeds move against the
/// scroll and overscroll (negative `scroll_y`) passes straight through.
#[must_use]
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// CSS transform for a layer displaced by `offset` pixels.
#[must_use]
pub fn translate_y(offset: f64) -> String {
    format!("translate3d(0, {offset}px, 0)")
}

/// Track the parallax offset for the layer behind `target`.
///
/// The scroll listener is registered once the node exists and removed when
/// the owning component is cleaned up. The offset stays `0.0` until the first
/// scroll event, and on the server.
pub fn use_parallax(target: NodeRef<Div>, speed: f64) -> ReadSignal<f64> {
    let (offset, set_offset) = signal(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        let listener = StoredValue::new_local(None::<WindowListenerHandle>);
        Effect::new(move || {
            if target.get().is_none() || listener.with_value(Option::is_some) {
                return;
            }
            let handle = window_event_listener(leptos::ev::scroll, move |_| {
                let scroll_y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                set_offset.set(parallax_offset(scroll_y, speed));
            });
            listener.set_value(Some(handle));
        });
        on_cleanup(move || {
            if let Some(handle) = listener.try_update_value(Option::take).flatten() {
                handle.remove();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, speed, set_offset);
    }

    offset
}
