//! Staggered reveal of item lists.
//!
//! When the wrapper becomes visible, item `i` is switched on `i * delay_ms`
//! after the transition. Items only ever switch on. Losing visibility (a
//! restartable reveal) or tearing down cancels every activation that has not
//! fired yet, as one group.

#[cfg(test)]
#[path = "stagger_test.rs"]
mod stagger_test;

use leptos::html::Div;
use leptos::prelude::*;

use crate::util::reveal::{RevealOptions, use_scroll_reveal};
use crate::util::timers::{Scheduler, Task, TimerGroup};

/// Item count and spacing for one staggered observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggerSchedule {
    pub count: usize,
    pub delay_ms: u32,
}

impl StaggerSchedule {
    #[must_use]
    pub fn new(count: usize, delay_ms: u32) -> Self {
        Self { count, delay_ms }
    }

    /// Activation offset for each item, in item order.
    pub fn offsets(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.count).map(|i| u32::try_from(i).unwrap_or(u32::MAX).saturating_mul(self.delay_ms))
    }
}

/// Switch item `index` on. Returns whether anything changed.
pub fn activate_item(items: &mut [bool], index: usize) -> bool {
    match items.get_mut(index) {
        Some(item) if !*item => {
            *item = true;
            true
        }
        _ => false,
    }
}

/// Turns visibility transitions into scheduled item activations.
pub struct StaggerDriver<H> {
    schedule: StaggerSchedule,
    last_visible: Option<bool>,
    pending: Option<TimerGroup<H>>,
}

impl<H> StaggerDriver<H> {
    #[must_use]
    pub fn new(schedule: StaggerSchedule) -> Self {
        Self { schedule, last_visible: None, pending: None }
    }

    /// React to the wrapper's current visibility.
    ///
    /// Repeating the last value is a no-op. Any change cancels unfired
    /// activations; a change to visible schedules a fresh fan-out calling
    /// `activate(i)` for every item.
    pub fn on_visibility<S, F>(&mut self, scheduler: &S, visible: bool, activate: F)
    where
        S: Scheduler<Handle = H>,
        F: Fn(usize) + Clone + 'static,
    {
        if self.last_visible == Some(visible) {
            return;
        }
        self.last_visible = Some(visible);
        self.cancel();
        if !visible || self.schedule.count == 0 {
            return;
        }
        let tasks = self
            .schedule
            .offsets()
            .enumerate()
            .map(|(index, at_ms)| {
                let activate = activate.clone();
                let task: Task = Box::new(move || activate(index));
                (at_ms, task)
            })
            .collect::<Vec<_>>();
        self.pending = Some(TimerGroup::start(scheduler, tasks));
    }

    /// Drop every activation that has not fired.
    pub fn cancel(&mut self) {
        if let Some(group) = self.pending.take() {
            group.cancel();
        }
    }

    /// Whether a fan-out is scheduled (fired or not).
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }
}

/// Signals exposed by [`use_staggered_reveal`].
#[derive(Clone, Copy)]
pub struct StaggeredReveal {
    pub is_visible: ReadSignal<bool>,
    pub visible_items: ReadSignal<Vec<bool>>,
}

/// Reveal `count` items one after another once `target` comes into view.
///
/// `count` and `delay_ms` are fixed for the life of the observation; mount a
/// new component to change them.
pub fn use_staggered_reveal(
    target: NodeRef<Div>,
    count: usize,
    delay_ms: u32,
    options: RevealOptions,
) -> StaggeredReveal {
    let is_visible = use_scroll_reveal(target, options);
    let (visible_items, set_visible_items) = signal(vec![false; count]);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::timers::BrowserScheduler;

        let driver = StoredValue::new_local(StaggerDriver::new(StaggerSchedule::new(count, delay_ms)));
        Effect::new(move || {
            let visible = is_visible.get();
            driver.update_value(|driver| {
                driver.on_visibility(&BrowserScheduler, visible, move |index| {
                    set_visible_items.update(|items| {
                        activate_item(items, index);
                    });
                });
            });
        });
        on_cleanup(move || driver.dispose());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, set_visible_items);
    }

    StaggeredReveal { is_visible, visible_items }
}
