// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-sample transform rule as a pure function.
//!
//! [`reduce`] maps the previous [`Transform`] and one [`GestureSample`] to the
//! next transform. It does not log, schedule or remember anything, so the
//! transform after sample `n` depends only on the transform after sample
//! `n - 1` and on sample `n`. [`ViewportEngine`](crate::ViewportEngine) wraps
//! it with the stateful parts.
//!
//! For a well-formed sample with a known extent, in order:
//!
//! 1) The pan box is computed at the current scale.
//! 2) `translation + pan_delta` is applied if [`geometry::admissibility`]
//!    accepts it.
//! 3) The raw scale `scale * zoom_factor` is computed. When it shrinks the
//!    image, the translation is scaled down by the same ratio so the pinch
//!    focus stays put. The raw scale is then dropped if it falls outside the
//!    sample guard, and otherwise committed after clamping to the scale range.
//! 4) The rotation delta is accumulated.
//!
//! Without an extent only step 4 applies. Malformed samples change nothing.

use lightbox_gesture::GestureSample;

use crate::geometry::{self, Admissibility};
use crate::{ImageExtent, Transform, ViewportConfig};

/// What happened to the scale component of a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleDecision {
    /// The raw scale was within the scale range and was committed as is.
    Committed,
    /// The raw scale passed the guard and was committed after clamping.
    Clamped,
    /// The raw scale fell outside the sample guard; the scale is unchanged.
    Rejected,
}

/// Result of [`reduce`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// The next transform.
    pub transform: Transform,
    /// Outcome of the pan check, or `None` if pan was not evaluated.
    pub pan: Option<Admissibility>,
    /// Outcome of the scale check, or `None` if zoom was not evaluated.
    pub scale: Option<ScaleDecision>,
}

impl Step {
    fn unchanged(transform: Transform) -> Self {
        Self {
            transform,
            pan: None,
            scale: None,
        }
    }
}

/// Applies one gesture sample to `current`.
///
/// `extent` is `None` until the image has loaded; pan and zoom are skipped
/// until then while rotation still accumulates.
#[must_use]
pub fn reduce(
    current: Transform,
    sample: &GestureSample,
    extent: Option<ImageExtent>,
    config: &ViewportConfig,
) -> Step {
    if !sample.is_well_formed() {
        return Step::unchanged(current);
    }

    let mut next = current;
    next.rotation += sample.rotation_delta;

    let Some(extent) = extent else {
        return guard_finite(current, Step::unchanged(next));
    };

    let max = geometry::max_pan(extent, current.scale);
    let proposed = current.translation + sample.pan_delta;
    let pan = geometry::admissibility(current.translation, proposed, max);
    if pan.is_accepted() {
        next.translation = proposed;
    }

    let raw = current.scale * sample.zoom_factor;
    if raw < current.scale {
        next.translation *= raw / current.scale;
    }
    let scale = if raw < config.sample_guard_min || raw > config.sample_guard_max {
        ScaleDecision::Rejected
    } else {
        next.scale = raw.clamp(config.min_scale, config.max_scale);
        if next.scale == raw {
            ScaleDecision::Committed
        } else {
            ScaleDecision::Clamped
        }
    };

    guard_finite(
        current,
        Step {
            transform: next,
            pan: Some(pan),
            scale: Some(scale),
        },
    )
}

/// Accumulating finite values can still overflow; never let that escape.
fn guard_finite(current: Transform, step: Step) -> Step {
    if step.transform.is_finite() {
        step
    } else {
        Step::unchanged(current)
    }
}
