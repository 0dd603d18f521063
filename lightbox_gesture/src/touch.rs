// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-touch tracker: turn pointer positions into [`GestureSample`]s.
//!
//! ## Usage
//!
//! 1) Call [`TouchTracker::pointer_down`] when a finger lands.
//! 2) On each move, call [`TouchTracker::pointer_move`] (one pointer) or
//!    [`TouchTracker::pointers_moved`] (platforms that batch all pointers in
//!    one event) to get the sample for that frame.
//! 3) Call [`TouchTracker::pointer_up`] when a finger lifts, or
//!    [`TouchTracker::cancel`] if the platform aborts the gesture.
//!
//! Samples are always computed between two snapshots with the same set of
//! pointers, so a finger landing or lifting never shows up as a jump in pan,
//! zoom or rotation.
//!
//! With one pointer, the sample is a pure pan. With two or more, the pan is
//! the movement of the centroid and the first two pointers define the pinch
//! span (zoom) and angle (rotation).
//!
//! A lone finger produces no samples until it has moved farther than the
//! touch slop from where it landed. The first pan sample then carries the
//! whole distance from the landing point. Once a second finger has landed,
//! or the slop has been crossed, every move is reported until all fingers
//! lift.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::GestureSample;

/// Spans shorter than this (in view units) are too noisy to derive a zoom
/// factor or angle from; such frames report no zoom and no rotation.
pub const MIN_PINCH_SPAN: f64 = 1.0;

/// Distance, in view units, a lone finger may wobble before it starts a pan.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// Host identifier for one pointer (finger).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Copy, Clone, Debug)]
struct Contact {
    id: PointerId,
    pos: Point,
}

type Contacts = SmallVec<[Contact; 4]>;

/// Tracks active pointers and derives per-frame gesture samples.
#[derive(Clone, Debug)]
pub struct TouchTracker {
    contacts: Contacts,
    slop: f64,
    /// Where the first finger of the current touch sequence landed.
    anchor: Point,
    dragging: bool,
}

impl Default for TouchTracker {
    fn default() -> Self {
        Self::with_slop(DEFAULT_TOUCH_SLOP)
    }
}

impl TouchTracker {
    /// Creates a tracker with no active pointers and the default touch slop.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker with the given touch slop, in view units.
    ///
    /// A slop of `0.0` reports every single-finger movement.
    #[must_use]
    pub fn with_slop(slop: f64) -> Self {
        Self {
            contacts: Contacts::new(),
            slop,
            anchor: Point::ZERO,
            dragging: false,
        }
    }

    /// Returns the touch slop in use.
    #[must_use]
    pub fn slop(&self) -> f64 {
        self.slop
    }

    /// Number of pointers currently down.
    #[must_use]
    pub fn finger_count(&self) -> usize {
        self.contacts.len()
    }

    /// Returns `true` while at least one pointer is down.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.contacts.is_empty()
    }

    /// Returns `true` once the current touch sequence has left the slop, or
    /// has had more than one finger down.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns the position of the pointer if exactly one is down.
    #[must_use]
    pub fn lone_position(&self) -> Option<Point> {
        match self.contacts.as_slice() {
            [only] => Some(only.pos),
            _ => None,
        }
    }

    /// Registers a pointer landing at `pos`.
    ///
    /// A repeated down for a pointer that is already tracked just moves it
    /// without producing a sample.
    pub fn pointer_down(&mut self, id: PointerId, pos: Point) {
        if self.contacts.is_empty() {
            self.anchor = pos;
            self.dragging = false;
        }
        match self.contacts.iter_mut().find(|c| c.id == id) {
            Some(c) => c.pos = pos,
            None => self.contacts.push(Contact { id, pos }),
        }
        if self.contacts.len() > 1 {
            self.dragging = true;
        }
    }

    /// Moves one pointer and returns the resulting sample.
    ///
    /// Returns `None` if `id` is not down.
    pub fn pointer_move(&mut self, id: PointerId, pos: Point) -> Option<GestureSample> {
        self.pointers_moved(&[(id, pos)])
    }

    /// Moves several pointers at once and returns a single sample for the frame.
    ///
    /// Unknown pointer ids are ignored. Returns `None` if none of the ids are
    /// down, or if a lone finger is still within the slop of where it landed.
    pub fn pointers_moved(&mut self, moves: &[(PointerId, Point)]) -> Option<GestureSample> {
        let before = self.contacts.clone();
        let mut touched = false;
        for &(id, pos) in moves {
            if let Some(c) = self.contacts.iter_mut().find(|c| c.id == id) {
                c.pos = pos;
                touched = true;
            }
        }
        if !touched {
            return None;
        }
        if self.dragging {
            return Some(sample_between(&before, &self.contacts));
        }
        self.dragging = true;
        match self.contacts.as_slice() {
            [only] => {
                let moved = only.pos - self.anchor;
                if moved.length() <= self.slop {
                    self.dragging = false;
                    return None;
                }
                Some(GestureSample::pan(moved))
            }
            _ => Some(sample_between(&before, &self.contacts)),
        }
    }

    /// Removes a lifted pointer. Unknown ids are ignored.
    pub fn pointer_up(&mut self, id: PointerId) {
        self.contacts.retain(|c| c.id != id);
    }

    /// Drops every pointer.
    pub fn cancel(&mut self) {
        self.contacts.clear();
    }
}

fn centroid(contacts: &Contacts) -> Point {
    let sum = contacts
        .iter()
        .fold(Vec2::ZERO, |acc, c| acc + c.pos.to_vec2());
    let n = contacts.len().max(1) as f64;
    (sum / n).to_point()
}

fn pinch_axis(contacts: &Contacts) -> Option<Vec2> {
    match contacts.as_slice() {
        [a, b, ..] => {
            let axis = b.pos - a.pos;
            (axis.length() >= MIN_PINCH_SPAN).then_some(axis)
        }
        _ => None,
    }
}

/// Normalizes an angle in degrees into `(-180, 180]`.
fn wrap_degrees(mut deg: f64) -> f64 {
    while deg > 180.0 {
        deg -= 360.0;
    }
    while deg <= -180.0 {
        deg += 360.0;
    }
    deg
}

fn sample_between(before: &Contacts, after: &Contacts) -> GestureSample {
    let pan_delta = centroid(after) - centroid(before);
    let (zoom_factor, rotation_delta) = match (pinch_axis(before), pinch_axis(after)) {
        (Some(old), Some(new)) => (
            new.length() / old.length(),
            wrap_degrees((new.atan2() - old.atan2()).to_degrees()),
        ),
        _ => (1.0, 0.0),
    };
    GestureSample {
        zoom_factor,
        pan_delta,
        rotation_delta,
        finger_count: u8::try_from(after.len()).unwrap_or(u8::MAX),
    }
}
