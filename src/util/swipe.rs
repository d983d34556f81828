//! Touch swipe detection.
//!
//! A single touch is tracked from `touchstart` through `touchmove` and
//! classified on `touchend`. The dominant axis decides the direction (ties go
//! horizontal) and the travel along it must exceed the threshold. A touch
//! that never moved is a tap and fires nothing.

#[cfg(test)]
#[path = "swipe_test.rs"]
mod swipe_test;

use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;

use crate::consts::SWIPE_THRESHOLD_PX;

/// Touch position in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Detection settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeOptions {
    /// Minimum travel in pixels; the swipe must exceed it.
    pub threshold: f64,
    /// Suppress the browser's scroll while a touch moves.
    pub prevent_default_touchmove: bool,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self { threshold: SWIPE_THRESHOLD_PX, prevent_default_touchmove: false }
    }
}

/// Classify a finished touch.
#[must_use]
pub fn classify(start: TouchPoint, end: TouchPoint, threshold: f64) -> Option<SwipeDirection> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx.abs() >= dy.abs() {
        if dx > threshold {
            Some(SwipeDirection::Right)
        } else if -dx > threshold {
            Some(SwipeDirection::Left)
        } else {
            None
        }
    } else if dy > threshold {
        Some(SwipeDirection::Down)
    } else if -dy > threshold {
        Some(SwipeDirection::Up)
    } else {
        None
    }
}

/// Start/end bookkeeping for the active touch.
#[derive(Clone, Debug, Default)]
pub struct SwipeTracker {
    start: Option<TouchPoint>,
    end: Option<TouchPoint>,
}

impl SwipeTracker {
    pub fn touch_start(&mut self, at: TouchPoint) {
        self.start = Some(at);
        self.end = None;
    }

    pub fn touch_move(&mut self, at: TouchPoint) {
        if self.start.is_some() {
            self.end = Some(at);
        }
    }

    /// Finish the touch and classify it. The tracker is reset either way.
    pub fn touch_end(&mut self, threshold: f64) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        let end = self.end.take()?;
        classify(start, end, threshold)
    }
}

type Handler = Rc<dyn Fn()>;

/// Optional callbacks per direction; unbound directions are ignored.
#[derive(Clone, Default)]
pub struct SwipeHandlers {
    on_swipe_left: Option<Handler>,
    on_swipe_right: Option<Handler>,
    on_swipe_up: Option<Handler>,
    on_swipe_down: Option<Handler>,
}

impl SwipeHandlers {
    #[must_use]
    pub fn on_left(mut self, f: impl Fn() + 'static) -> Self {
        self.on_swipe_left = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn on_right(mut self, f: impl Fn() + 'static) -> Self {
        self.on_swipe_right = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn on_up(mut self, f: impl Fn() + 'static) -> Self {
        self.on_swipe_up = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn on_down(mut self, f: impl Fn() + 'static) -> Self {
        self.on_swipe_down = Some(Rc::new(f));
        self
    }

    /// Run the handler bound to `direction`. Returns whether one ran.
    pub fn dispatch(&self, direction: SwipeDirection) -> bool {
        let handler = match direction {
            SwipeDirection::Left => &self.on_swipe_left,
            SwipeDirection::Right => &self.on_swipe_right,
            SwipeDirection::Up => &self.on_swipe_up,
            SwipeDirection::Down => &self.on_swipe_down,
        };
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

/// Detect swipes on the element behind `target`.
///
/// Listeners are attached once the node mounts and detached when the owning
/// component is cleaned up. Nothing is attached on the server.
pub fn use_swipe(target: NodeRef<Div>, handlers: SwipeHandlers, options: SwipeOptions) {
    #[cfg(feature = "hydrate")]
    {
        let listeners = StoredValue::new_local(None::<browser::TouchListeners>);
        Effect::new(move || {
            let Some(element) = target.get() else {
                return;
            };
            match browser::TouchListeners::attach(element.into(), handlers.clone(), options) {
                Ok(attached) => listeners.set_value(Some(attached)),
                Err(e) => leptos::logging::warn!("swipe listeners not attached: {e:?}"),
            }
        });
        on_cleanup(move || listeners.dispose());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, handlers, options);
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::{JsCast, JsValue, closure::Closure};

    use super::{SwipeHandlers, SwipeOptions, SwipeTracker, TouchPoint};

    type TouchCallback = Closure<dyn FnMut(web_sys::TouchEvent)>;

    fn first_touch(ev: &web_sys::TouchEvent) -> Option<TouchPoint> {
        let touch = ev.touches().get(0)?;
        Some(TouchPoint::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
    }

    /// Touch listeners registered on one element; dropping removes them.
    pub(super) struct TouchListeners {
        target: web_sys::EventTarget,
        callbacks: Vec<(&'static str, TouchCallback)>,
    }

    impl TouchListeners {
        pub(super) fn attach(
            target: web_sys::EventTarget,
            handlers: SwipeHandlers,
            options: SwipeOptions,
        ) -> Result<Self, JsValue> {
            let tracker = Rc::new(RefCell::new(SwipeTracker::default()));

            let on_start = {
                let tracker = Rc::clone(&tracker);
                Closure::wrap(Box::new(move |ev: web_sys::TouchEvent| {
                    if let Some(at) = first_touch(&ev) {
                        tracker.borrow_mut().touch_start(at);
                    }
                }) as Box<dyn FnMut(web_sys::TouchEvent)>)
            };
            let on_move = {
                let tracker = Rc::clone(&tracker);
                let prevent = options.prevent_default_touchmove;
                Closure::wrap(Box::new(move |ev: web_sys::TouchEvent| {
                    if prevent {
                        ev.prevent_default();
                    }
                    if let Some(at) = first_touch(&ev) {
                        tracker.borrow_mut().touch_move(at);
                    }
                }) as Box<dyn FnMut(web_sys::TouchEvent)>)
            };
            let on_end = {
                let threshold = options.threshold;
                Closure::wrap(Box::new(move |_: web_sys::TouchEvent| {
                    let direction = tracker.borrow_mut().touch_end(threshold);
                    if let Some(direction) = direction {
                        handlers.dispatch(direction);
                    }
                }) as Box<dyn FnMut(web_sys::TouchEvent)>)
            };

            let mut attached = Self { target, callbacks: Vec::with_capacity(3) };
            attached.listen("touchstart", on_start, true)?;
            attached.listen("touchmove", on_move, !options.prevent_default_touchmove)?;
            attached.listen("touchend", on_end, true)?;
            Ok(attached)
        }

        fn listen(&mut self, event: &'static str, callback: TouchCallback, passive: bool) -> Result<(), JsValue> {
            let opts = web_sys::AddEventListenerOptions::new();
            opts.set_passive(passive);
            self.target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &opts,
            )?;
            self.callbacks.push((event, callback));
            Ok(())
        }
    }

    impl Drop for TouchListeners {
        fn drop(&mut self) {
            for (event, callback) in self.callbacks.drain(..) {
                if let Err(e) = self
                    .target
                    .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                {
                    leptos::logging::warn!("failed to remove {event} listener: {e:?}");
                }
            }
        }
    }
}
