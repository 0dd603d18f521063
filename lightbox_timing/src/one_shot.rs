// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Scheduler, TimerToken};

/// Restartable one-shot timer.
///
/// A `OneShot` owns at most one pending [`TimerToken`]. Restarting it cancels
/// the previous token and schedules a fresh one, and [`OneShot::fire`] only
/// accepts the newest token. A delivery that was already queued by the host
/// when the timer was restarted is therefore reported as stale rather than
/// cutting the new countdown short.
///
/// Once [`OneShot::finish`] has been called the timer is inert for good.
///
/// ```rust
/// use lightbox_timing::{OneShot, TimerQueue};
///
/// let mut queue = TimerQueue::new();
/// let mut timer = OneShot::new(300);
///
/// let first = timer.restart(&mut queue).unwrap();
/// queue.advance_to(100);
/// timer.restart(&mut queue);
///
/// // The first token is stale even if a host delivers it anyway.
/// assert!(!timer.fire(first));
/// let fired = queue.advance_to(400);
/// assert!(timer.fire(fired[0]));
/// ```
#[derive(Clone, Debug)]
pub struct OneShot {
    duration: u64,
    pending: Option<TimerToken>,
    finished: bool,
}

impl OneShot {
    /// Creates an idle timer that counts down `duration` host time units.
    #[must_use]
    pub const fn new(duration: u64) -> Self {
        Self {
            duration,
            pending: None,
            finished: false,
        }
    }

    /// Returns the countdown length.
    #[must_use]
    pub const fn duration(&self) -> u64 {
        self.duration
    }

    /// Returns `true` while a countdown is running.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns `true` once [`OneShot::finish`] has been called.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Cancels any running countdown and starts a new one.
    ///
    /// Returns the new token, or `None` if the timer is finished.
    pub fn restart<S: Scheduler + ?Sized>(&mut self, sched: &mut S) -> Option<TimerToken> {
        if self.finished {
            return None;
        }
        self.cancel(sched);
        let token = sched.schedule(self.duration);
        self.pending = Some(token);
        Some(token)
    }

    /// Cancels the running countdown, if any. The timer can be restarted.
    pub fn cancel<S: Scheduler + ?Sized>(&mut self, sched: &mut S) {
        if let Some(token) = self.pending.take() {
            sched.cancel(token);
        }
    }

    /// Cancels the running countdown and makes the timer permanently inert.
    pub fn finish<S: Scheduler + ?Sized>(&mut self, sched: &mut S) {
        self.cancel(sched);
        self.finished = true;
    }

    /// Handles a delivered token.
    ///
    /// Returns `true` exactly when `token` is the countdown this timer is
    /// waiting for; the timer is idle afterwards. Stale tokens and any
    /// delivery after [`OneShot::finish`] return `false`.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.finished || self.pending != Some(token) {
            return false;
        }
        self.pending = None;
        true
    }
}
