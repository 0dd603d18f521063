// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::{Scheduler, TimerToken};

#[derive(Clone, Copy, Debug)]
struct Entry {
    deadline: u64,
    token: TimerToken,
}

/// Deterministic timer queue driven by explicit time updates.
///
/// `TimerQueue` keeps pending deadlines sorted and hands back expired tokens
/// from [`TimerQueue::advance_to`]. It never reads a clock on its own, which
/// makes it suitable for frame-driven hosts and for tests that need exact
/// control over elapsed time.
///
/// Tokens that share a deadline expire in the order they were scheduled.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: u64,
    next_token: u64,
    pending: Vec<Entry>,
}

impl TimerQueue {
    /// Creates an empty queue at time `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue whose clock starts at `now`.
    #[must_use]
    pub fn starting_at(now: u64) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    /// Moves the clock forward and returns every token whose deadline has
    /// been reached, in deadline order.
    ///
    /// Time never moves backwards: a `now` earlier than the current time only
    /// re-checks the queue at the current time.
    pub fn advance_to(&mut self, now: u64) -> Vec<TimerToken> {
        self.now = self.now.max(now);
        let current = self.now;
        let expired = self.pending.partition_point(|e| e.deadline <= current);
        self.pending.drain(..expired).map(|e| e.token).collect()
    }

    /// Returns the earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.first().map(|e| e.deadline)
    }

    /// Returns `true` if `token` is still waiting to be delivered.
    #[must_use]
    pub fn is_scheduled(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|e| e.token == token)
    }

    /// Number of pending callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for TimerQueue {
    fn now(&self) -> u64 {
        self.now
    }

    fn schedule(&mut self, delay: u64) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        let deadline = self.now.saturating_add(delay);
        // Tokens grow monotonically, so inserting after every entry with an
        // equal deadline keeps ties in scheduling order.
        let at = self.pending.partition_point(|e| e.deadline <= deadline);
        self.pending.insert(at, Entry { deadline, token });
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(at) = self.pending.iter().position(|e| e.token == token) {
            self.pending.remove(at);
        }
    }
}
