// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture debouncer: keep an action disabled until a gesture burst settles.
//!
//! A drag or pinch often ends with the fingers lifting in quick succession,
//! which platform tap detectors can misread as a double tap. The debouncer
//! tracks a single `enabled` flag:
//!
//! 1) It starts disabled.
//! 2) Every [`GestureDebouncer::refresh`] disables it and restarts a one-shot
//!    countdown.
//! 3) When the countdown is delivered through [`GestureDebouncer::on_timer`]
//!    without an intervening refresh, it becomes enabled.
//! 4) [`GestureDebouncer::finish`] tears it down; nothing re-enables it after.
//!
//! ## Minimal example
//!
//! ```
//! use lightbox_gesture::GestureDebouncer;
//! use lightbox_timing::TimerQueue;
//!
//! let mut queue = TimerQueue::new();
//! let mut debounce = GestureDebouncer::new(300);
//!
//! debounce.refresh(&mut queue);
//! assert!(!debounce.enabled());
//!
//! for token in queue.advance_to(300) {
//!     debounce.on_timer(token);
//! }
//! assert!(debounce.enabled());
//! ```

use lightbox_timing::{OneShot, Scheduler, TimerToken};

/// Default quiet window, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Flips an `enabled` flag off on every gesture burst and back on once the
/// burst has been quiet for a fixed window.
#[derive(Clone, Debug)]
pub struct GestureDebouncer {
    enabled: bool,
    timer: OneShot,
}

impl GestureDebouncer {
    /// Creates a disabled debouncer with the given quiet window.
    #[must_use]
    pub const fn new(window: u64) -> Self {
        Self {
            enabled: false,
            timer: OneShot::new(window),
        }
    }

    /// Returns `true` once the last burst has been quiet for the full window.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the quiet window.
    #[must_use]
    pub const fn window(&self) -> u64 {
        self.timer.duration()
    }

    /// Returns `true` while a countdown is running.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Returns `true` once [`GestureDebouncer::finish`] has been called.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    /// Records a gesture burst: disables immediately and restarts the
    /// countdown, superseding any pending one.
    pub fn refresh<S: Scheduler + ?Sized>(&mut self, sched: &mut S) {
        self.enabled = false;
        if let Some(token) = self.timer.restart(sched) {
            log::trace!("debounce restarted: {token:?} due in {}", self.window());
        }
    }

    /// Handles a delivered timer token.
    ///
    /// Returns `true` if the token ended the current countdown and the
    /// debouncer is now enabled. Stale or foreign tokens are ignored.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if !self.timer.fire(token) {
            return false;
        }
        self.enabled = true;
        log::debug!("gesture settled; double tap enabled");
        true
    }

    /// Cancels the countdown and disables the debouncer permanently.
    pub fn finish<S: Scheduler + ?Sized>(&mut self, sched: &mut S) {
        self.timer.finish(sched);
        self.enabled = false;
    }
}

impl Default for GestureDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
