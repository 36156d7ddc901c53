//! Cancellable one-shot deferred task.
//!
//! Models the "do this later unless something happens first" pattern used by
//! the auto-clear cycle: at most one task is pending at a time, scheduling
//! replaces any earlier deadline, and the owner polls with the current time
//! to find out whether the task is due.
//!
//! Keeping time explicit (rather than spawning a thread or tying into an
//! event loop) makes the host integration trivial and the behavior fully
//! deterministic under test.

use std::time::{Duration, Instant};

use crate::logging::targets;

/// A cancellable one-shot deadline.
///
/// The holder drives it by calling [`Deferred::poll`] with the current time;
/// `poll` returns `true` exactly once when the deadline has passed.
#[derive(Debug, Default)]
pub struct Deferred {
    deadline: Option<Instant>,
}

impl Deferred {
    /// Create a deferred task with nothing scheduled.
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Schedule the task to fire `delay` after `now`.
    ///
    /// Replaces any previously pending deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        tracing::trace!(target: targets::TIMER, ?delay, "deferred task scheduled");
        self.deadline = Some(now + delay);
    }

    /// Cancel the pending task, if any.
    ///
    /// Returns `true` if a task was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.deadline.take().is_some();
        if was_pending {
            tracing::trace!(target: targets::TIMER, "deferred task cancelled");
        }
        was_pending
    }

    /// Returns true if a task is pending.
    pub fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the deadline has passed.
    ///
    /// The task is consumed on firing; a fired or cancelled task never fires
    /// again until rescheduled.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
