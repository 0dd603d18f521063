// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan boundary rules.
//!
//! At scale `s`, an image of extent `w x h` that fills the viewport when
//! untransformed can be translated by up to `w * (s - 1) / 2` horizontally and
//! `h * (s - 1) / 2` vertically while still covering the viewport. That box is
//! never enforced by clamping, which would make the image snap. Instead each
//! proposed translation is either accepted or rejected as a whole:
//!
//! - Inside the box: accepted.
//! - Outside, but strictly closer to the box edge on one axis and no farther
//!   on the other: accepted as "returning". This keeps diagonal drags along
//!   an edge from sticking.
//! - Anything else: rejected; the previous translation stays.
//!
//! Distances are measured per axis to the edge line, as `|max - |t||`.

use kurbo::Vec2;

use crate::ImageExtent;

/// Outcome of checking a proposed translation against the pan box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admissibility {
    /// The proposed translation lies within the pan box.
    Inside,
    /// Outside the pan box, but moving toward its edge.
    Returning,
    /// Outside the pan box and not moving toward it.
    Rejected,
}

impl Admissibility {
    /// Returns `true` unless the translation was rejected.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Half extents of the pan box for `extent` at `scale`.
#[must_use]
pub fn max_pan(extent: ImageExtent, scale: f64) -> Vec2 {
    let grow = (scale - 1.0) / 2.0;
    Vec2::new(extent.width() * grow, extent.height() * grow)
}

/// Returns `true` if `t` lies within `[-max.x, max.x] x [-max.y, max.y]`.
#[must_use]
pub fn is_within(t: Vec2, max: Vec2) -> bool {
    (-max.x..=max.x).contains(&t.x) && (-max.y..=max.y).contains(&t.y)
}

/// Returns `true` if moving from `old` to `new` gets strictly closer to the
/// pan box edge on one axis without getting farther on the other.
#[must_use]
pub fn nearest_transition(max: Vec2, old: Vec2, new: Vec2) -> bool {
    let dx0 = (max.x - old.x.abs()).abs();
    let dy0 = (max.y - old.y.abs()).abs();
    let dx1 = (max.x - new.x.abs()).abs();
    let dy1 = (max.y - new.y.abs()).abs();
    (dy1 < dy0 && dx1 <= dx0) || (dx1 < dx0 && dy1 <= dy0)
}

/// Classifies a proposed move from `old` to `new` against the pan box `max`.
#[must_use]
pub fn admissibility(old: Vec2, new: Vec2, max: Vec2) -> Admissibility {
    if is_within(new, max) {
        Admissibility::Inside
    } else if nearest_transition(max, old, new) {
        Admissibility::Returning
    } else {
        Admissibility::Rejected
    }
}

/// Returns `true` if a move from `old` to `new` may be applied.
#[must_use]
pub fn is_admissible(old: Vec2, new: Vec2, max: Vec2) -> bool {
    admissibility(old, new, max).is_accepted()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn max_pan_grows_with_scale() {
        let extent = ImageExtent::new(200.0, 100.0).unwrap();
        assert_eq!(max_pan(extent, 1.0), Vec2::ZERO);
        assert_eq!(max_pan(extent, 3.0), v(200.0, 100.0));
    }

    #[test]
    fn box_edges_are_inclusive() {
        let max = v(200.0, 200.0);
        assert!(is_within(v(200.0, -200.0), max));
        assert!(!is_within(v(200.5, 0.0), max));
        assert_eq!(admissibility(v(0.0, 0.0), v(190.0, 190.0), max), Admissibility::Inside);
    }

    #[test]
    fn moving_away_outside_the_box_is_rejected() {
        let max = v(200.0, 200.0);
        assert_eq!(
            admissibility(v(205.0, 205.0), v(210.0, 210.0), max),
            Admissibility::Rejected
        );
    }

    #[test]
    fn returning_on_one_axis_is_accepted() {
        let max = v(200.0, 0.0);
        // dx0 = 10, dx1 = 5, dy0 = dy1 = 0.
        assert!(nearest_transition(max, v(210.0, 0.0), v(205.0, 0.0)));
        assert_eq!(
            admissibility(v(210.0, 0.0), v(205.0, 0.0), max),
            Admissibility::Returning
        );
    }

    #[test]
    fn regressing_on_the_other_axis_is_rejected() {
        let max = v(200.0, 200.0);
        // Closer on X, farther on Y.
        assert!(!is_admissible(v(210.0, 205.0), v(205.0, 220.0), max));
    }

    #[test]
    fn standing_still_outside_is_rejected() {
        let max = v(100.0, 100.0);
        assert!(!is_admissible(v(150.0, 0.0), v(150.0, 0.0), max));
    }

    #[test]
    fn distance_is_measured_to_the_edge_line() {
        // From deep inside to just past the edge counts as getting closer
        // to the edge on both axes.
        let max = v(200.0, 200.0);
        assert_eq!(
            admissibility(v(150.0, 150.0), v(210.0, 210.0), max),
            Admissibility::Returning
        );
    }

    #[test]
    fn negative_side_is_symmetric() {
        let max = v(100.0, 100.0);
        assert!(is_admissible(v(-120.0, 0.0), v(-110.0, 0.0), max));
        assert!(!is_admissible(v(-110.0, 0.0), v(-120.0, 0.0), max));
    }
}
