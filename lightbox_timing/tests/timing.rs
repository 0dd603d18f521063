// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `lightbox_timing` crate.
//!
//! These drive a [`OneShot`] through a [`TimerQueue`] the way a frame loop
//! would, and through a host that cannot revoke callbacks once scheduled.

use lightbox_timing::{OneShot, Scheduler, TimerQueue, TimerToken};

/// A host whose platform timers cannot be cancelled: every scheduled token is
/// eventually delivered.
#[derive(Default)]
struct FireAndForgetHost {
    now: u64,
    next: u64,
    scheduled: Vec<(u64, TimerToken)>,
}

impl FireAndForgetHost {
    fn deliver_until(&mut self, now: u64) -> Vec<TimerToken> {
        self.now = now;
        let (due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.scheduled)
            .into_iter()
            .partition(|(d, _)| *d <= now);
        self.scheduled = rest;
        due.into_iter().map(|(_, t)| t).collect()
    }
}

impl Scheduler for FireAndForgetHost {
    fn now(&self) -> u64 {
        self.now
    }

    fn schedule(&mut self, delay: u64) -> TimerToken {
        let token = TimerToken::from_raw(self.next);
        self.next += 1;
        self.scheduled.push((self.now + delay, token));
        token
    }

    fn cancel(&mut self, _token: TimerToken) {}
}

#[test]
fn stale_deliveries_from_uncancellable_host_are_rejected() {
    let mut host = FireAndForgetHost::default();
    let mut timer = OneShot::new(300);

    for at in [0, 100, 200] {
        host.now = at;
        timer.restart(&mut host);
    }

    // The two superseded callbacks arrive first and must be ignored.
    let fired: Vec<bool> = host
        .deliver_until(400)
        .into_iter()
        .map(|t| timer.fire(t))
        .collect();
    assert_eq!(fired, vec![false, false]);
    assert!(timer.is_pending());

    let fired: Vec<bool> = host
        .deliver_until(500)
        .into_iter()
        .map(|t| timer.fire(t))
        .collect();
    assert_eq!(fired, vec![true]);
}

#[test]
fn finish_is_final_even_when_host_delivers_anyway() {
    let mut host = FireAndForgetHost::default();
    let mut timer = OneShot::new(300);
    timer.restart(&mut host);
    timer.finish(&mut host);

    for token in host.deliver_until(10_000) {
        assert!(!timer.fire(token));
    }
}

#[test]
fn works_through_a_trait_object() {
    let mut queue = TimerQueue::new();
    let sched: &mut dyn Scheduler = &mut queue;
    let mut timer = OneShot::new(5);
    let token = timer.restart(sched).unwrap();
    assert_eq!(queue.advance_to(5), vec![token]);
    assert!(timer.fire(token));
}
