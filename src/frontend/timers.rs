//! One-shot timers owned by a reactive scope.
//!
//! Timers go through a [`Scheduler`]. The browser's `setTimeout` is used
//! unless an ancestor scope called [`provide_scheduler`].

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;

use crate::toast::{TOAST_DURATION, ToastState};

pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;
pub type CancelTimer = Box<dyn FnOnce() + Send + Sync + 'static>;

/// Runs callbacks once after a delay.
pub trait Scheduler: Send + Sync + 'static {
    /// Returns a canceller for the timeout, or `None` if it could not be set.
    fn set_timeout(&self, delay: Duration, callback: TimerCallback) -> Option<CancelTimer>;
}

/// `window.setTimeout`.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, delay: Duration, callback: TimerCallback) -> Option<CancelTimer> {
        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => {
                let cancel: CancelTimer = Box::new(move || handle.clear());
                Some(cancel)
            }
            Err(err) => {
                log::warn!("could not schedule timer: {err:?}");
                None
            }
        }
    }
}

#[derive(Clone)]
struct SharedScheduler(Arc<dyn Scheduler>);

/// Makes timers created below the current owner use `scheduler`.
pub fn provide_scheduler(scheduler: impl Scheduler) {
    provide_context(SharedScheduler(Arc::new(scheduler)));
}

/// A single pending timeout. Scheduling again replaces the previous one, and
/// the timeout is cleared when the owning scope is disposed.
#[derive(Clone, Copy)]
pub struct DelayedTask {
    scheduler: StoredValue<Arc<dyn Scheduler>>,
    pending: StoredValue<Option<CancelTimer>>,
}

impl DelayedTask {
    pub fn new() -> Self {
        let scheduler: Arc<dyn Scheduler> = match use_context::<SharedScheduler>() {
            Some(shared) => shared.0,
            None => Arc::new(BrowserScheduler),
        };
        let task = Self {
            scheduler: StoredValue::new(scheduler),
            pending: StoredValue::new(None),
        };
        on_cleanup(move || task.cancel());
        task
    }

    pub fn schedule(&self, delay: Duration, callback: impl FnOnce() + Send + 'static) {
        self.cancel();

        let pending = self.pending;
        let fired: TimerCallback = Box::new(move || {
            pending.try_update_value(|p| *p = None);
            callback();
        });
        let cancel = self
            .scheduler
            .try_with_value(|scheduler| scheduler.set_timeout(delay, fired))
            .flatten();
        if let Some(orphan) = self.pending.try_set_value(cancel).flatten() {
            orphan();
        }
    }

    pub fn cancel(&self) {
        if let Some(cancel) = self.pending.try_update_value(Option::take).flatten() {
            cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.try_with_value(Option::is_some).unwrap_or(false)
    }
}

impl Default for DelayedTask {
    fn default() -> Self {
        Self::new()
    }
}

/// Toast state plus the timer that hides it again.
#[derive(Clone, Copy)]
pub struct ToastController {
    state: RwSignal<ToastState>,
    timer: DelayedTask,
}

impl ToastController {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ToastState::new()),
            timer: DelayedTask::new(),
        }
    }

    pub fn state(&self) -> Signal<ToastState> {
        self.state.into()
    }

    pub fn show(&self, message: impl Into<String>) {
        let Some(ticket) = self.state.try_update(|s| s.show(message)) else {
            return;
        };
        let state = self.state;
        self.timer.schedule(TOAST_DURATION, move || {
            state.try_update(|s| s.dismiss(ticket));
        });
    }
}

impl Default for ToastController {
    fn default() -> Self {
        Self::new()
    }
}
