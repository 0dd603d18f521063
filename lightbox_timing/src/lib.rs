// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lightbox Timing: host-agnostic timer primitives.
//!
//! Viewers built on Lightbox run on a single cooperative UI thread. The only
//! deferred work they need is "call me back after a short delay, unless I
//! change my mind first". This crate models that without assuming any event
//! loop:
//!
//! - [`Scheduler`]: the interface a host implements to deliver delayed
//!   callbacks, identified by opaque [`TimerToken`]s.
//! - [`TimerQueue`]: a deterministic [`Scheduler`] for hosts that drive time
//!   themselves (frame loops, tests, replay tools).
//! - [`OneShot`]: a restartable one-shot timer that only honors its newest
//!   token, so a callback that was already in flight when the timer was
//!   restarted or finished is rejected instead of firing late.
//!
//! Time is an opaque, monotonically increasing `u64` in host units.
//! Milliseconds are the convention used throughout Lightbox.
//!
//! ## Minimal example
//!
//! ```rust
//! use lightbox_timing::{OneShot, TimerQueue};
//!
//! let mut queue = TimerQueue::new();
//! let mut timer = OneShot::new(300);
//!
//! timer.restart(&mut queue);
//! assert!(queue.advance_to(299).is_empty());
//!
//! let fired = queue.advance_to(300);
//! assert_eq!(fired.len(), 1);
//! assert!(timer.fire(fired[0]));
//! assert!(!timer.is_pending());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod one_shot;
mod queue;

pub use one_shot::OneShot;
pub use queue::TimerQueue;

/// Opaque handle identifying one scheduled callback.
///
/// Tokens are never reused by a single [`Scheduler`], so comparing a delivered
/// token against the one a timer is waiting for is enough to detect stale
/// deliveries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Creates a token from a raw host identifier.
    ///
    /// Hosts that implement [`Scheduler`] on top of a platform timer API use
    /// this to wrap whatever handle the platform hands back.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

/// Delivers delayed callbacks on the host's event loop.
///
/// Implementations schedule a callback and later hand the returned
/// [`TimerToken`] back to whoever owns it (for example
/// [`OneShot::fire`]). Delivery happens on the same logical thread that
/// scheduled it; nothing here is `Send`.
pub trait Scheduler {
    /// Returns the current host time.
    fn now(&self) -> u64;

    /// Schedules a callback `delay` time units from [`Scheduler::now`].
    fn schedule(&mut self, delay: u64) -> TimerToken;

    /// Cancels a previously scheduled callback.
    ///
    /// Unknown or already delivered tokens are ignored. Hosts that cannot
    /// revoke a callback may treat this as a no-op; [`OneShot`] rejects stale
    /// tokens on its own.
    fn cancel(&mut self, token: TimerToken);
}
