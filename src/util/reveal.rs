//! Viewport-intersection reveal tracking.
//!
//! An element is revealed once the fraction of it inside the viewport box,
//! expanded or shrunk by a CSS-style root margin, reaches the threshold.
//! One-shot reveals latch and stop observing; restartable reveals follow the
//! element in and out of the viewport.
//!
//! DESIGN
//! ======
//! [`RevealTracker`] holds the latch/toggle rules and knows nothing about the
//! DOM. The browser binding feeds it `IntersectionObserver` entries, or
//! geometry samples from a scroll listener when the observer API is missing.
//! Either way the binding is owned by one value whose drop detaches the
//! tracker and releases the listener, so no update can follow teardown.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::fmt;
use std::str::FromStr;

use leptos::html::Div;
use leptos::prelude::*;

use crate::consts::REVEAL_THRESHOLD;

// =============================================================
// Options
// =============================================================

/// Length in a root margin: absolute pixels or a percentage of the root box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl MarginLength {
    /// Resolve against the root dimension on the same axis.
    #[must_use]
    pub fn resolve(self, basis: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => basis * pct / 100.0,
        }
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Why a root margin string was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RootMarginError {
    #[error("root margin is empty")]
    Empty,
    #[error("root margin takes 1 to 4 values, got {0}")]
    TooManyValues(usize),
    #[error("invalid root margin length: {0}")]
    InvalidLength(String),
}

fn parse_length(token: &str) -> Result<MarginLength, RootMarginError> {
    let invalid = || RootMarginError::InvalidLength(token.to_owned());
    if let Some(px) = token.strip_suffix("px") {
        return px.parse::<f64>().map(MarginLength::Px).map_err(|_| invalid());
    }
    if let Some(pct) = token.strip_suffix('%') {
        return pct.parse::<f64>().map(MarginLength::Percent).map_err(|_| invalid());
    }
    match token.parse::<f64>() {
        Ok(zero) if zero == 0.0 => Ok(MarginLength::Px(0.0)),
        _ => Err(invalid()),
    }
}

/// Offsets applied to each side of the viewport box before intersecting.
///
/// Positive values grow the box, negative values shrink it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl Default for RootMargin {
    /// `0px 0px -50px 0px`: reveal slightly after the element enters from below.
    fn default() -> Self {
        Self {
            top: MarginLength::Px(0.0),
            right: MarginLength::Px(0.0),
            bottom: MarginLength::Px(-50.0),
            left: MarginLength::Px(0.0),
        }
    }
}

impl FromStr for RootMargin {
    type Err = RootMarginError;

    /// Parse the CSS margin shorthand (`top [right [bottom [left]]]`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(parse_length)
            .collect::<Result<Vec<_>, _>>()?;
        let (top, right, bottom, left) = match values.as_slice() {
            [] => return Err(RootMarginError::Empty),
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            more => return Err(RootMarginError::TooManyValues(more.len())),
        };
        Ok(Self { top, right, bottom, left })
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

impl RootMargin {
    /// Apply the margin to a root box.
    #[must_use]
    pub fn expand(&self, root: Rect) -> Rect {
        let width = root.width();
        let height = root.height();
        Rect {
            left: root.left - self.left.resolve(width),
            top: root.top - self.top.resolve(height),
            right: root.right + self.right.resolve(width),
            bottom: root.bottom + self.bottom.resolve(height),
        }
    }
}

/// Settings for one reveal observation.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction in `0.0..=1.0` needed to count as revealed.
    pub threshold: f64,
    pub root_margin: RootMargin,
    /// Latch on first reveal and stop observing.
    pub trigger_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: REVEAL_THRESHOLD, root_margin: RootMargin::default(), trigger_once: true }
    }
}

impl RevealOptions {
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Use a CSS margin string; malformed input keeps the current margin.
    #[must_use]
    pub fn with_root_margin(mut self, margin: &str) -> Self {
        match margin.parse() {
            Ok(parsed) => self.root_margin = parsed,
            Err(e) => leptos::logging::warn!("ignoring root margin {margin:?}: {e}"),
        }
        self
    }

    /// Follow the element in and out of view instead of latching.
    #[must_use]
    pub fn restartable(mut self) -> Self {
        self.trigger_once = false;
        self
    }
}

// =============================================================
// Geometry
// =============================================================

/// Axis-aligned box in CSS pixels (viewport coordinates).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        (self.right - self.left).max(0.0)
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Overlap with `other`; edge-adjacent boxes overlap with zero area.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let clipped = Rect {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        (clipped.left <= clipped.right && clipped.top <= clipped.bottom).then_some(clipped)
    }

    /// Fraction of this box's area that lies inside `root`.
    #[must_use]
    pub fn visible_fraction(&self, root: &Rect) -> f64 {
        let Some(overlap) = self.intersection(root) else {
            return 0.0;
        };
        let area = self.area();
        if area <= 0.0 {
            return 1.0;
        }
        (overlap.area() / area).clamp(0.0, 1.0)
    }
}

// =============================================================
// Tracking
// =============================================================

/// One intersection reading for an observed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f64,
}

impl IntersectionSample {
    /// Measure `element` against `viewport` after applying `margin`.
    #[must_use]
    pub fn from_geometry(element: Rect, viewport: Rect, margin: &RootMargin) -> Self {
        let root = margin.expand(viewport);
        Self {
            is_intersecting: element.intersection(&root).is_some(),
            ratio: element.visible_fraction(&root),
        }
    }

    /// Whether this reading counts as revealed at `threshold`.
    #[must_use]
    pub fn meets(&self, threshold: f64) -> bool {
        if threshold <= 0.0 {
            return self.is_intersecting;
        }
        self.is_intersecting && self.ratio >= threshold
    }
}

/// Result of feeding one reading to a [`RevealTracker`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealUpdate {
    /// New visibility, when it changed.
    pub visible: Option<bool>,
    /// The element needs no further observation.
    pub unobserve: bool,
}

/// Latch/toggle state for one observed element.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    trigger_once: bool,
    visible: bool,
    detached: bool,
}

impl RevealTracker {
    #[must_use]
    pub fn new(trigger_once: bool) -> Self {
        Self { trigger_once, visible: false, detached: false }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True once the tracker ignores further readings.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Feed whether the element currently meets the threshold.
    pub fn observe(&mut self, meets_threshold: bool) -> RevealUpdate {
        if self.detached {
            return RevealUpdate::default();
        }
        if meets_threshold {
            let changed = !self.visible;
            self.visible = true;
            if self.trigger_once {
                self.detached = true;
            }
            return RevealUpdate { visible: changed.then_some(true), unobserve: self.trigger_once };
        }
        if self.visible && !self.trigger_once {
            self.visible = false;
            return RevealUpdate { visible: Some(false), unobserve: false };
        }
        RevealUpdate::default()
    }

    /// Stop reacting; later readings are ignored.
    pub fn detach(&mut self) {
        self.detached = true;
    }
}

// =============================================================
// Leptos binding
// =============================================================

/// Track whether the element behind `target` has been revealed.
///
/// Observation starts once the node mounts and stops when the owning
/// component is cleaned up. On the server the signal stays `false`.
pub fn use_scroll_reveal(target: NodeRef<Div>, options: RevealOptions) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let watch = StoredValue::new_local(None::<browser::RevealWatch>);
        Effect::new(move || {
            let Some(element) = target.get() else {
                return;
            };
            let started = browser::RevealWatch::start(element.into(), &options, move |v| set_visible.set(v));
            // Replacing the slot drops any earlier watch for a re-mounted node.
            watch.set_value(Some(started));
        });
        on_cleanup(move || watch.dispose());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, options, set_visible);
    }

    visible
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::prelude::{WindowListenerHandle, window_event_listener};
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};

    use super::{IntersectionSample, Rect, RevealOptions, RevealTracker};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

    enum Source {
        Observer {
            observer: web_sys::IntersectionObserver,
            _callback: ObserverCallback,
        },
        Scroll {
            listeners: Vec<WindowListenerHandle>,
        },
    }

    /// Live observation of one element; dropping it ends the observation.
    pub(super) struct RevealWatch {
        tracker: Rc<RefCell<RevealTracker>>,
        source: Option<Source>,
    }

    impl RevealWatch {
        pub(super) fn start(
            element: web_sys::Element,
            options: &RevealOptions,
            on_change: impl Fn(bool) + 'static,
        ) -> Self {
            let tracker = Rc::new(RefCell::new(RevealTracker::new(options.trigger_once)));
            let on_change: Rc<dyn Fn(bool)> = Rc::new(on_change);
            let source = match observe(&element, options, &tracker, &on_change) {
                Ok(source) => source,
                Err(e) => {
                    leptos::logging::warn!("IntersectionObserver unavailable, using scroll fallback: {e:?}");
                    scroll_fallback(element, options, &tracker, &on_change)
                }
            };
            Self { tracker, source: Some(source) }
        }
    }

    impl Drop for RevealWatch {
        fn drop(&mut self) {
            self.tracker.borrow_mut().detach();
            match self.source.take() {
                Some(Source::Observer { observer, .. }) => observer.disconnect(),
                Some(Source::Scroll { listeners }) => {
                    for listener in listeners {
                        listener.remove();
                    }
                }
                None => {}
            }
        }
    }

    fn observe(
        element: &web_sys::Element,
        options: &RevealOptions,
        tracker: &Rc<RefCell<RevealTracker>>,
        on_change: &Rc<dyn Fn(bool)>,
    ) -> Result<Source, JsValue> {
        let threshold = options.threshold;
        let tracker = Rc::clone(tracker);
        let on_change = Rc::clone(on_change);
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    let sample = IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    let update = tracker.borrow_mut().observe(sample.meets(threshold));
                    if let Some(visible) = update.visible {
                        on_change(visible);
                    }
                    if update.unobserve {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin.to_string());
        let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);
        Ok(Source::Observer { observer, _callback: callback })
    }

    fn viewport() -> Option<Rect> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Rect::new(0.0, 0.0, width, height))
    }

    fn scroll_fallback(
        element: web_sys::Element,
        options: &RevealOptions,
        tracker: &Rc<RefCell<RevealTracker>>,
        on_change: &Rc<dyn Fn(bool)>,
    ) -> Source {
        let threshold = options.threshold;
        let margin = options.root_margin;
        let tracker = Rc::clone(tracker);
        let on_change = Rc::clone(on_change);
        let check = Rc::new(move || {
            if tracker.borrow().is_detached() {
                return;
            }
            let Some(root) = viewport() else {
                return;
            };
            let bounds = element.get_bounding_client_rect();
            let rect = Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
            let sample = IntersectionSample::from_geometry(rect, root, &margin);
            let update = tracker.borrow_mut().observe(sample.meets(threshold));
            if let Some(visible) = update.visible {
                on_change(visible);
            }
        });

        check();
        let on_scroll = Rc::clone(&check);
        let on_resize = check;
        Source::Scroll {
            listeners: vec![
                window_event_listener(leptos::ev::scroll, move |_| on_scroll()),
                window_event_listener(leptos::ev::resize, move |_| on_resize()),
            ],
        }
    }
}
