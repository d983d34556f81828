//! Cancellable deferred tasks grouped under one disposer.
//!
//! DESIGN
//! ======
//! Timers are scheduled through the [`Scheduler`] seam so the fan-out logic
//! runs against gloo `Timeout`s in the browser and against a virtual clock in
//! tests. A [`TimerGroup`] owns every handle it scheduled plus one shared
//! liveness flag. Dropping the group clears the flag before releasing the
//! handles, so a callback the host has already dequeued still sees the group
//! as cancelled and does nothing.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::cell::Cell;
use std::rc::Rc;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Something that can run a task after a delay.
pub trait Scheduler {
    /// Keeps the scheduled task alive; dropping it cancels where supported.
    type Handle;

    /// Run `task` once, `delay_ms` milliseconds from now.
    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle;
}

/// Browser scheduler backed by `setTimeout`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}

/// A set of deferred tasks cancelled together.
pub struct TimerGroup<H> {
    alive: Rc<Cell<bool>>,
    handles: Vec<H>,
}

impl<H> TimerGroup<H> {
    /// Schedule every `(delay_ms, task)` pair on `scheduler`.
    pub fn start<S>(scheduler: &S, tasks: impl IntoIterator<Item = (u32, Task)>) -> Self
    where
        S: Scheduler<Handle = H>,
    {
        let alive = Rc::new(Cell::new(true));
        let handles = tasks
            .into_iter()
            .map(|(delay_ms, task)| {
                let alive = Rc::clone(&alive);
                let guarded: Task = Box::new(move || {
                    if alive.get() {
                        task();
                    }
                });
                scheduler.schedule(delay_ms, guarded)
            })
            .collect();
        Self { alive, handles }
    }

    /// Number of tasks the group was started with.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Cancel every task that has not fired yet.
    pub fn cancel(self) {
        drop(self);
    }
}

impl<H> Drop for TimerGroup<H> {
    fn drop(&mut self) {
        self.alive.set(false);
        self.handles.clear();
    }
}

/// Virtual clock for driving timer code in tests.
///
/// Handles are `()`, so cancellation relies solely on the group's liveness
/// flag: queued tasks still run, and must observe it.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct ManualScheduler {
    now: Cell<u32>,
    seq: Cell<u64>,
    queue: std::cell::RefCell<Vec<(u32, u64, Task)>>,
}

#[cfg(test)]
impl ManualScheduler {
    /// Run every task due at or before `t_ms`, in due-time then FIFO order.
    pub(crate) fn advance_to(&self, t_ms: u32) {
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let idx = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _, _))| *due <= t_ms)
                    .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                    .map(|(idx, _)| idx);
                idx.map(|idx| queue.remove(idx))
            };
            let Some((due, _, task)) = next else {
                break;
            };
            self.now.set(due);
            task();
        }
        self.now.set(t_ms.max(self.now.get()));
    }

    pub(crate) fn now(&self) -> u32 {
        self.now.get()
    }

    pub(crate) fn queued(&self) -> usize {
        self.queue.borrow().len()
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    type Handle = ();

    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        let due = self.now.get().saturating_add(delay_ms);
        self.queue.borrow_mut().push((due, seq, task));
    }
}
