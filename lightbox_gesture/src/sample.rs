// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame multi-touch input.

use kurbo::Vec2;

/// One frame of multi-touch gesture input.
///
/// Samples are ephemeral: a host produces one per input frame while fingers
/// are down and a transform engine consumes it immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    /// Multiplicative zoom since the previous sample. `1.0` means no zoom.
    pub zoom_factor: f64,
    /// Translation since the previous sample, in view space.
    pub pan_delta: Vec2,
    /// Rotation since the previous sample, in degrees.
    pub rotation_delta: f64,
    /// Number of fingers down when the sample was taken.
    pub finger_count: u8,
}

impl GestureSample {
    /// A sample that changes nothing.
    pub const IDLE: Self = Self {
        zoom_factor: 1.0,
        pan_delta: Vec2::ZERO,
        rotation_delta: 0.0,
        finger_count: 1,
    };

    /// A single-finger pan.
    #[must_use]
    pub fn pan(delta: Vec2) -> Self {
        Self {
            pan_delta: delta,
            ..Self::IDLE
        }
    }

    /// A two-finger pinch with no pan or rotation.
    #[must_use]
    pub fn zoom(factor: f64) -> Self {
        Self {
            zoom_factor: factor,
            finger_count: 2,
            ..Self::IDLE
        }
    }

    /// A two-finger twist with no pan or zoom.
    #[must_use]
    pub fn rotate(degrees: f64) -> Self {
        Self {
            rotation_delta: degrees,
            finger_count: 2,
            ..Self::IDLE
        }
    }

    /// Returns `true` if every component is finite and the zoom factor is
    /// strictly positive.
    ///
    /// Platform gesture detectors occasionally report NaN or infinite values
    /// (for example a zero previous span). Such samples must be dropped before
    /// they reach any accumulated state.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.zoom_factor.is_finite()
            && self.zoom_factor > 0.0
            && self.pan_delta.is_finite()
            && self.rotation_delta.is_finite()
    }
}

impl Default for GestureSample {
    fn default() -> Self {
        Self::IDLE
    }
}
